//! Warm / cool / neutral classification by hue.

use std::fmt;

/// Coarse color temperature derived from the hue angle alone.
///
/// Saturation is ignored, so achromatic colors (hue 0) classify as warm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Temperature {
    /// Hue below 90° or above 270°
    Warm,
    /// Hue in 90°..180°
    Cool,
    /// Hue in 180°..=270°
    Neutral,
}

impl Temperature {
    pub fn from_hue(h: f64) -> Self {
        if h < 90.0 || h > 270.0 {
            Temperature::Warm
        } else if h < 180.0 {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Warm => "Warm",
            Temperature::Cool => "Cool",
            Temperature::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
