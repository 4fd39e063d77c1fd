//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit channels, the form colors enter and leave the crate in
//! - [`Hsl`]: hue/saturation/lightness, the space harmony rules operate in
//!
//! # Example
//!
//! ```
//! use hsl_harmony::{Hsl, Rgb};
//!
//! let base = Rgb::new(51, 102, 153);
//! let hsl = Hsl::from(base);
//! assert_eq!(Rgb::from(hsl), base);
//! ```

mod hsl;
mod rgb;
mod temperature;

pub use hsl::{hsl_to_rgb, rgb_to_hsl, wrap_hue, Hsl};
pub use rgb::Rgb;
pub use temperature::Temperature;
