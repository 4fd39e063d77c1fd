//! hsl-harmony: RGB/HSL conversion and five-swatch color harmony palettes
//!
//! The crate is two pure functions and a rule table:
//!
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`]: the conversion pair. Converting any
//!   8-bit color to HSL and back reproduces it exactly.
//! - [`calculate_color_rules`]: applies a [`HarmonyRule`] to a base color and
//!   returns a [`Palette`] of exactly five colors in slot order.
//!
//! # Quick Start
//!
//! ```
//! use hsl_harmony::{calculate_color_rules, rgb_to_hsl, HarmonyRule, Rgb};
//!
//! assert_eq!(rgb_to_hsl(255, 0, 0), (0.0, 100.0, 50.0));
//!
//! let palette = calculate_color_rules(255, 0, 0, HarmonyRule::Complementary);
//! assert_eq!(palette.slot(2), Some(Rgb::new(0, 255, 255)));
//! assert_eq!(palette.slot(3), Some(Rgb::new(255, 0, 0)));
//! ```
//!
//! # Rules
//!
//! | Rule | Slot 1 | Slot 2 | Slot 3 | Slot 4 | Slot 5 |
//! |---|---|---|---|---|---|
//! | complementary | base | h+180 | base | h+180, l−10 | base |
//! | analogous | h−30 | h−15 | base | h+15 | h+30 |
//! | shades | l−20 | l−10 | base | l−5 | l−2.5 |
//! | tints | l+20 | l+10 | base | l+5 | l+2.5 |
//! | triadic | base | h−120 | h+120 | h−120, l−10 | h+120, l+10 |
//!
//! Hues wrap modulo 360 and lightness is clamped to `0..=100`. Saturation is
//! never changed. Base slots are the input triple verbatim; triadic is the one
//! rule whose middle slot is derived.
//!
//! # Rounding
//!
//! [`hsl_to_rgb`] rounds each channel half away from zero. On the
//! non-negative range the conversion produces this is the same as rounding
//! half up.
//!
//! # Unknown rule names
//!
//! Rules arriving as strings go through [`calculate_color_rules_by_name`],
//! where an [`UnknownRulePolicy`] decides between an empty palette and
//! [`HarmonyError::InvalidRule`].

pub mod color;
pub mod error;
pub mod harmony;


pub use color::{hsl_to_rgb, rgb_to_hsl, wrap_hue, Hsl, Rgb, Temperature};
pub use error::{HarmonyError, ParseColorError};
pub use harmony::{
    calculate_color_rules, calculate_color_rules_by_name, hex_list, HarmonyRule, Palette, SlotSpec,
    Swatch, UnknownRulePolicy, PALETTE_SIZE,
};
