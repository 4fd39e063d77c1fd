//! Human-readable color names.
//!
//! Naming is a capability the report consumes, not something it owns:
//! anything implementing [`ColorNamer`] can be plugged in. [`BasicNamer`]
//! is a small default that snaps to the nearest of the sixteen basic CSS
//! colors.

use hsl_harmony::Rgb;

/// Looks up a name for a hex color string such as `"#3366CC"`.
pub trait ColorNamer {
    fn name(&self, hex: &str) -> String;
}

impl<F> ColorNamer for F
where
    F: Fn(&str) -> String,
{
    fn name(&self, hex: &str) -> String {
        self(hex)
    }
}

const BASIC_COLORS: [(&str, Rgb); 16] = [
    ("Black", Rgb::new(0, 0, 0)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("White", Rgb::new(255, 255, 255)),
    ("Maroon", Rgb::new(128, 0, 0)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Purple", Rgb::new(128, 0, 128)),
    ("Fuchsia", Rgb::new(255, 0, 255)),
    ("Green", Rgb::new(0, 128, 0)),
    ("Lime", Rgb::new(0, 255, 0)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Aqua", Rgb::new(0, 255, 255)),
];

/// Nearest basic CSS color by squared RGB distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNamer;

impl BasicNamer {
    pub fn nearest(color: Rgb) -> &'static str {
        let distance = |other: Rgb| {
            let dr = color.r as i32 - other.r as i32;
            let dg = color.g as i32 - other.g as i32;
            let db = color.b as i32 - other.b as i32;
            dr * dr + dg * dg + db * db
        };

        // First entry wins ties, table order is deterministic
        BASIC_COLORS
            .iter()
            .min_by_key(|(_, c)| distance(*c))
            .map(|(name, _)| *name)
            .unwrap_or("Black")
    }
}

impl ColorNamer for BasicNamer {
    fn name(&self, hex: &str) -> String {
        match hex.parse::<Rgb>() {
            Ok(color) => Self::nearest(color).to_string(),
            Err(e) => {
                tracing::debug!(hex, %e, "Cannot name unparseable color");
                format!("Invalid Color: {hex}")
            }
        }
    }
}
