//! HSL color type and the RGB ⇄ HSL conversion pair.
//!
//! Hue is in degrees, saturation and lightness in percent. The conversions
//! work in `f64` so that converting an 8-bit color to HSL and back lands on
//! the same integers for every one of the 2^24 inputs.

use super::rgb::Rgb;
use crate::error::HarmonyError;

/// A color in HSL space.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation in percent, `0.0..=100.0`
/// - `l`: lightness in percent, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. Components are stored as given.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Checked constructor.
    ///
    /// Rejects non-finite components and saturation or lightness outside
    /// `0..=100`. The hue may be any finite angle and is wrapped into
    /// `0.0..360.0`.
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self, HarmonyError> {
        if !h.is_finite() {
            return Err(HarmonyError::InvalidInput("hue must be finite"));
        }
        if !(0.0..=100.0).contains(&s) {
            return Err(HarmonyError::InvalidInput("saturation must be within 0..=100"));
        }
        if !(0.0..=100.0).contains(&l) {
            return Err(HarmonyError::InvalidInput("lightness must be within 0..=100"));
        }
        Ok(Self::new(wrap_hue(h), s, l))
    }

    /// Rotate the hue by `degrees`, keeping it in `0.0..360.0`.
    ///
    /// Backward rotations add a full turn before taking the remainder,
    /// `(h + degrees + 360) % 360`. Reducing `h + degrees` directly can land
    /// one ulp lower, which is enough to move a rounded channel.
    #[inline]
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        let h = if degrees < 0.0 {
            (self.h + degrees + 360.0) % 360.0
        } else {
            (self.h + degrees) % 360.0
        };
        // Only rotations past a full turn backwards can still be negative
        let h = if h < 0.0 { wrap_hue(h) } else { h };
        Self::new(h, self.s, self.l)
    }

    /// Shift lightness by `delta` percent, clamped to `0..=100`.
    #[inline]
    #[must_use]
    pub fn shift_lightness(self, delta: f64) -> Self {
        Self::new(self.h, self.s, (self.l + delta).clamp(0.0, 100.0))
    }

    /// Convert to 8-bit RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        Rgb::new(r, g, b)
    }

    /// Human-readable form with each component rounded, e.g. `"210°, 50%, 40%"`.
    pub fn to_display_string(self) -> String {
        format!(
            "{}°, {}%, {}%",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        let (h, s, l) = rgb_to_hsl(c.r, c.g, c.b);
        Self::new(h, s, l)
    }
}

impl From<Hsl> for Rgb {
    fn from(c: Hsl) -> Self {
        c.to_rgb()
    }
}

/// Wrap any finite angle into `0.0..360.0`.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert 8-bit RGB to `(hue°, saturation%, lightness%)`.
///
/// Achromatic inputs (all channels equal) have hue and saturation 0.
///
/// ```
/// use hsl_harmony::rgb_to_hsl;
/// assert_eq!(rgb_to_hsl(255, 0, 0), (0.0, 100.0, 50.0));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Ties resolve in r, g, b order
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert `(hue°, saturation%, lightness%)` to 8-bit RGB.
///
/// The hue is wrapped into `0.0..360.0` first, so `h` and `h + 360.0` give
/// the same color. Channels are rounded half away from zero and clamped to
/// `0..=255`. Non-finite input is not rejected here: NaN propagates through
/// the arithmetic and the final saturating cast turns it into 0. Use
/// [`Hsl::try_new`] to validate untrusted input.
///
/// ```
/// use hsl_harmony::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), (0, 255, 255));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = wrap_hue(h) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    (to_u8(r), to_u8(g), to_u8(b))
}

/// Piecewise-linear channel ramp around the hue circle.
#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_u8(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
