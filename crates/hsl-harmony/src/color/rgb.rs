//! 8-bit RGB color type
//!
//! `Rgb` is the integer representation the outside world deals in: channel
//! values composed from switches, hex strings, and every palette slot.

use std::fmt;
use std::str::FromStr;

use super::hsl::Hsl;
use crate::error::{HarmonyError, ParseColorError};

/// A color with three 8-bit channels and no alpha.
///
/// Equality is structural; there is no identity beyond the channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use hsl_harmony::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_hex(), "FF0000");
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase six-digit hex without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl TryFrom<(i64, i64, i64)> for Rgb {
    type Error = HarmonyError;

    /// Checked construction from wide integers, rejecting anything outside 0..=255.
    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let channel = |v: i64| {
            u8::try_from(v).map_err(|_| HarmonyError::InvalidInput("channel outside 0..=255"))
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use hsl_harmony::Rgb;
    /// let teal: Rgb = "#008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    /// let white: Rgb = "fff".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
