//! The harmony rule table.
//!
//! Each rule is five [`SlotSpec`]s. A slot is either the base color passed
//! through verbatim or a hue rotation plus a lightness shift applied to the
//! base in HSL space. Saturation is never touched.

use std::fmt;
use std::str::FromStr;

use crate::color::Hsl;
use crate::error::HarmonyError;

/// A named rule for deriving a five-color palette from one base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HarmonyRule {
    /// Base color alternating with its opposite hue.
    #[default]
    Complementary,
    /// Neighbouring hues at ±15° and ±30°.
    Analogous,
    /// Progressively darker versions of the base.
    Shades,
    /// Progressively lighter versions of the base.
    Tints,
    /// Hues at ±120°, plus a shade and a tint of them.
    Triadic,
}

/// One slot of a rule: what to do with the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotSpec {
    /// The input RGB triple, not reconverted through HSL.
    Base,
    /// Rotate hue by `hue` degrees and shift lightness by `lightness` percent.
    Shift { hue: f64, lightness: f64 },
}

/// A slot resolved against a concrete base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    /// Use the base RGB triple as given.
    Base,
    /// Convert this HSL target to RGB.
    Derived(Hsl),
}

const fn shift(hue: f64, lightness: f64) -> SlotSpec {
    SlotSpec::Shift { hue, lightness }
}

const COMPLEMENTARY: [SlotSpec; 5] = [
    SlotSpec::Base,
    shift(180.0, 0.0),
    SlotSpec::Base,
    shift(180.0, -10.0),
    SlotSpec::Base,
];

const ANALOGOUS: [SlotSpec; 5] = [
    shift(-30.0, 0.0),
    shift(-15.0, 0.0),
    SlotSpec::Base,
    shift(15.0, 0.0),
    shift(30.0, 0.0),
];

const SHADES: [SlotSpec; 5] = [
    shift(0.0, -20.0),
    shift(0.0, -10.0),
    SlotSpec::Base,
    shift(0.0, -5.0),
    shift(0.0, -2.5),
];

const TINTS: [SlotSpec; 5] = [
    shift(0.0, 20.0),
    shift(0.0, 10.0),
    SlotSpec::Base,
    shift(0.0, 5.0),
    shift(0.0, 2.5),
];

const TRIADIC: [SlotSpec; 5] = [
    SlotSpec::Base,
    shift(-120.0, 0.0),
    shift(120.0, 0.0),
    shift(-120.0, -10.0),
    shift(120.0, 10.0),
];

impl HarmonyRule {
    /// Every rule, in menu order.
    pub const ALL: [HarmonyRule; 5] = [
        HarmonyRule::Complementary,
        HarmonyRule::Analogous,
        HarmonyRule::Shades,
        HarmonyRule::Tints,
        HarmonyRule::Triadic,
    ];

    /// Lowercase rule name as used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Shades => "shades",
            HarmonyRule::Tints => "tints",
            HarmonyRule::Triadic => "triadic",
        }
    }

    pub fn slots(self) -> &'static [SlotSpec; 5] {
        match self {
            HarmonyRule::Complementary => &COMPLEMENTARY,
            HarmonyRule::Analogous => &ANALOGOUS,
            HarmonyRule::Shades => &SHADES,
            HarmonyRule::Tints => &TINTS,
            HarmonyRule::Triadic => &TRIADIC,
        }
    }

    /// Resolve the rule's slots against a base color in HSL.
    pub fn derive(self, base: Hsl) -> [Swatch; 5] {
        (*self.slots()).map(|slot| match slot {
            SlotSpec::Base => Swatch::Base,
            SlotSpec::Shift { hue, lightness } => {
                Swatch::Derived(base.rotate(hue).shift_lightness(lightness))
            }
        })
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HarmonyRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HarmonyError::InvalidRule(s.to_string()))
    }
}

/// What to do when a rule name does not match any [`HarmonyRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnknownRulePolicy {
    /// Return an empty palette, silently.
    Empty,
    /// Fail with [`HarmonyError::InvalidRule`].
    #[default]
    Error,
}
