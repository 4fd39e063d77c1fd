//! The 24-switch bit mixer.
//!
//! Each channel is eight switches. Switch `n` contributes `2^n` to the
//! channel value, so the value is the sum of the powers of two of every
//! switch that is on.

use std::fmt;
use std::str::FromStr;

use hsl_harmony::Rgb;
use rand::Rng;
use serde::Serialize;

use crate::error::MixError;

pub const BITS_PER_CHANNEL: u8 = 8;

/// One of the three mixer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The eight switches of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelBits {
    switches: [bool; BITS_PER_CHANNEL as usize],
}

impl ChannelBits {
    /// Switch states for a channel value (bit `n` of `value` drives switch `n`).
    pub fn from_value(value: u8) -> Self {
        let mut switches = [false; BITS_PER_CHANNEL as usize];
        for (bit, on) in switches.iter_mut().enumerate() {
            *on = value & (1 << bit) != 0;
        }
        Self { switches }
    }

    /// Sum of `2^bit` over every switch that is on.
    pub fn value(&self) -> u8 {
        self.switches
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(bit, _)| 1u8 << bit)
            .sum()
    }

    pub fn is_set(&self, bit: u8) -> Result<bool, MixError> {
        Ok(self.switches[Self::index(bit)?])
    }

    pub fn set(&mut self, bit: u8, on: bool) -> Result<(), MixError> {
        self.switches[Self::index(bit)?] = on;
        Ok(())
    }

    pub fn toggle(&mut self, bit: u8) -> Result<bool, MixError> {
        let idx = Self::index(bit)?;
        self.switches[idx] = !self.switches[idx];
        Ok(self.switches[idx])
    }

    /// `"1"`/`"0"` per switch, bit 7 first.
    pub fn bit_states(&self) -> String {
        self.switches
            .iter()
            .rev()
            .map(|&on| if on { '1' } else { '0' })
            .collect()
    }

    /// Two-digit uppercase hex of the channel value.
    pub fn hex(&self) -> String {
        format!("{:02X}", self.value())
    }

    fn index(bit: u8) -> Result<usize, MixError> {
        if bit >= BITS_PER_CHANNEL {
            return Err(MixError::BitOutOfRange(bit));
        }
        Ok(bit as usize)
    }
}

/// Red, green and blue switch banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitMixer {
    red: ChannelBits,
    green: ChannelBits,
    blue: ChannelBits,
}

impl BitMixer {
    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            red: ChannelBits::from_value(color.r),
            green: ChannelBits::from_value(color.g),
            blue: ChannelBits::from_value(color.b),
        }
    }

    /// Parse 24 switch states, red then green then blue, MSB first.
    ///
    /// `_` and whitespace may be used as separators.
    pub fn from_bit_string(s: &str) -> Result<Self, MixError> {
        let bits: Vec<bool> = s
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .map(|c| match c {
                '1' => Ok(true),
                '0' => Ok(false),
                other => Err(MixError::InvalidBits(format!("unexpected character {other:?}"))),
            })
            .collect::<Result<_, _>>()?;

        let expected = 3 * BITS_PER_CHANNEL as usize;
        if bits.len() != expected {
            return Err(MixError::InvalidBits(format!(
                "expected {expected} bits, got {}",
                bits.len()
            )));
        }

        let mut mixer = Self::default();
        for (chunk, channel) in bits.chunks(BITS_PER_CHANNEL as usize).zip(Channel::ALL) {
            let bank = mixer.channel_mut(channel);
            for (i, &on) in chunk.iter().enumerate() {
                bank.set(BITS_PER_CHANNEL - 1 - i as u8, on)?;
            }
        }
        Ok(mixer)
    }

    pub fn channel(&self, channel: Channel) -> &ChannelBits {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut ChannelBits {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    pub fn set_bit(&mut self, channel: Channel, bit: u8, on: bool) -> Result<(), MixError> {
        self.channel_mut(channel).set(bit, on)?;
        tracing::debug!(%channel, bit, on, "Switch changed");
        Ok(())
    }

    pub fn toggle_bit(&mut self, channel: Channel, bit: u8) -> Result<bool, MixError> {
        let on = self.channel_mut(channel).toggle(bit)?;
        tracing::debug!(%channel, bit, on, "Switch toggled");
        Ok(on)
    }

    pub fn color(&self) -> Rgb {
        Rgb::new(self.red.value(), self.green.value(), self.blue.value())
    }

    /// Turn every switch off.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flip a fair coin for every switch.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for channel in Channel::ALL {
            let bank = self.channel_mut(channel);
            for bit in 0..BITS_PER_CHANNEL {
                bank.switches[bit as usize] = rng.gen_bool(0.5);
            }
        }
        tracing::debug!(color = %self.color(), "Randomized switches");
    }

    /// All 24 switch states as three space-separated groups.
    pub fn bit_string(&self) -> String {
        Channel::ALL
            .iter()
            .map(|&c| self.channel(c).bit_states())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse `"R,G,B"` with each channel in `0..=255`.
pub fn parse_rgb_list(s: &str) -> Result<Rgb, MixError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(MixError::InvalidRgbList(s.to_string()));
    };
    let parse = |v: &str| {
        i64::from_str(v).map_err(|_| MixError::InvalidRgbList(s.to_string()))
    };
    Ok(Rgb::try_from((parse(*r)?, parse(*g)?, parse(*b)?))?)
}
