//! Harmony rules and palette derivation
//!
//! A [`HarmonyRule`] is a table of five [`SlotSpec`]s; applying it to a base
//! color yields a [`Palette`] of exactly five colors in slot order.

mod engine;
mod palette;
mod rule;

pub use engine::{calculate_color_rules, calculate_color_rules_by_name};
pub use palette::{hex_list, Palette, PALETTE_SIZE};
pub use rule::{HarmonyRule, SlotSpec, Swatch, UnknownRulePolicy};
