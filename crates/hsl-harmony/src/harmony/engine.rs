//! Palette derivation: base RGB + rule → five RGB swatches.

use super::palette::Palette;
use super::rule::{HarmonyRule, Swatch, UnknownRulePolicy};
use crate::color::{Hsl, Rgb};
use crate::error::HarmonyError;

impl HarmonyRule {
    /// Build this rule's palette for `base`.
    ///
    /// The base is converted to HSL once. Base slots copy `base` verbatim so
    /// they never pick up rounding drift from the HSL round trip.
    ///
    /// ```
    /// use hsl_harmony::{HarmonyRule, Rgb};
    ///
    /// let palette = HarmonyRule::Complementary.apply(Rgb::new(255, 0, 0));
    /// assert_eq!(palette[1], Rgb::new(0, 255, 255));
    /// ```
    pub fn apply(self, base: Rgb) -> Palette {
        let hsl = Hsl::from(base);
        Palette::new(self.derive(hsl).map(|swatch| match swatch {
            Swatch::Base => base,
            Swatch::Derived(derived) => derived.to_rgb(),
        }))
    }
}

/// Derive the five-swatch palette for `rule` from a base color.
pub fn calculate_color_rules(r: u8, g: u8, b: u8, rule: HarmonyRule) -> Palette {
    rule.apply(Rgb::new(r, g, b))
}

/// Like [`calculate_color_rules`], but with the rule given by name.
///
/// An unrecognised name yields an empty list under
/// [`UnknownRulePolicy::Empty`] and [`HarmonyError::InvalidRule`] under
/// [`UnknownRulePolicy::Error`].
///
/// ```
/// use hsl_harmony::{calculate_color_rules_by_name, UnknownRulePolicy};
///
/// let empty = calculate_color_rules_by_name(1, 2, 3, "sepia", UnknownRulePolicy::Empty);
/// assert_eq!(empty, Ok(vec![]));
///
/// let strict = calculate_color_rules_by_name(1, 2, 3, "sepia", UnknownRulePolicy::Error);
/// assert!(strict.is_err());
/// ```
pub fn calculate_color_rules_by_name(
    r: u8,
    g: u8,
    b: u8,
    name: &str,
    policy: UnknownRulePolicy,
) -> Result<Vec<Rgb>, HarmonyError> {
    match name.parse::<HarmonyRule>() {
        Ok(rule) => Ok(calculate_color_rules(r, g, b, rule).to_vec()),
        Err(_) if policy == UnknownRulePolicy::Empty => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}
