//! Everything shown about one mixed color.

use hsl_harmony::{
    calculate_color_rules_by_name, hex_list, Hsl, Rgb, Temperature, UnknownRulePolicy,
};
use serde::Serialize;

use crate::error::MixError;
use crate::models::{BitMixer, Channel};
use crate::services::naming::ColorNamer;

/// Per-channel readout: value, two hex digits, and the switch states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSummary {
    pub channel: Channel,
    pub value: u8,
    pub hex: String,
    pub bits: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub rgb: Rgb,
    pub hex: String,
    pub rgb_text: String,
    pub hsl: Hsl,
    pub hsl_text: String,
    pub temperature: Temperature,
    pub name: String,
    pub channels: Vec<ChannelSummary>,
    /// Hue rotated 180°, same saturation and lightness
    pub complementary: Rgb,
    /// Hue rotated -30° and +30°
    pub analogous: [Rgb; 2],
    pub rule: String,
    /// Empty when the rule name is unknown and the policy is `Empty`
    pub palette: Vec<Rgb>,
}

impl ColorReport {
    pub fn build(
        rgb: Rgb,
        rule_name: &str,
        policy: UnknownRulePolicy,
        namer: &dyn ColorNamer,
    ) -> Result<Self, MixError> {
        let hsl = Hsl::from(rgb);
        let hex = rgb.to_hex();
        let palette = calculate_color_rules_by_name(rgb.r, rgb.g, rgb.b, rule_name, policy)?;
        if palette.is_empty() {
            tracing::warn!(rule = rule_name, "Unknown harmony rule, palette is empty");
        }

        let mixer = BitMixer::from_rgb(rgb);
        let channels = Channel::ALL
            .into_iter()
            .map(|channel| {
                let bits = mixer.channel(channel);
                ChannelSummary {
                    channel,
                    value: bits.value(),
                    hex: bits.hex(),
                    bits: bits.bit_states(),
                }
            })
            .collect();

        let report = Self {
            rgb,
            rgb_text: format!("{}, {}, {}", rgb.r, rgb.g, rgb.b),
            hsl_text: hsl.to_display_string(),
            temperature: Temperature::from_hue(hsl.h),
            name: namer.name(&format!("#{hex}")),
            hex,
            hsl,
            channels,
            complementary: hsl.rotate(180.0).to_rgb(),
            analogous: [hsl.rotate(-30.0).to_rgb(), hsl.rotate(30.0).to_rgb()],
            rule: rule_name.to_string(),
            palette,
        };
        tracing::debug!(color = %report.rgb, rule = %report.rule, "Built color report");
        Ok(report)
    }

    /// Palette hex codes joined with `", "`.
    pub fn palette_hex_list(&self) -> String {
        hex_list(&self.palette)
    }

    pub fn render_text(&self) -> String {
        let channels: String = self
            .channels
            .iter()
            .map(|c| format!("{:<6} {:>3}  {}  {}\n", c.channel, c.value, c.hex, c.bits))
            .collect();
        let palette = if self.palette.is_empty() {
            format!("({}: no colors)", self.rule)
        } else {
            format!("({}) {}", self.rule, self.palette_hex_list())
        };

        format!(
            "{channels}\n\
             HEX          {hex}\n\
             RGB          {rgb}\n\
             HSL          {hsl}\n\
             Temperature  {temperature}\n\
             Name         {name}\n\
             Complement   {complement}\n\
             Analogous    {left} | {right}\n\
             Palette      {palette}\n",
            hex = self.hex,
            rgb = self.rgb_text,
            hsl = self.hsl_text,
            temperature = self.temperature,
            name = self.name,
            complement = rgb_text(self.complementary),
            left = rgb_text(self.analogous[0]),
            right = rgb_text(self.analogous[1]),
        )
    }
}

fn rgb_text(c: Rgb) -> String {
    format!("{}, {}, {}", c.r, c.g, c.b)
}
