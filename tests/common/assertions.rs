//! Assertion helpers for tests.

use hsl_harmony::{HarmonyRule, Rgb};
use pretty_assertions::assert_eq;

use bitmix::services::ColorReport;

/// Where a rule puts the verbatim base color: slot 1 for triadic, slot 3
/// for every other rule.
pub fn base_slot_index(rule: HarmonyRule) -> usize {
    match rule {
        HarmonyRule::Triadic => 0,
        _ => 2,
    }
}

/// Assert a report carries a full five-color palette with the base in its slot
pub fn assert_full_palette(report: &ColorReport) {
    assert_eq!(
        report.palette.len(),
        5,
        "Expected 5 palette colors for rule {:?}, got {:?}",
        report.rule,
        report.palette
    );
    let rule: HarmonyRule = report.rule.parse().expect("report rule is known");
    let slot = base_slot_index(rule);
    assert_eq!(
        report.palette[slot],
        report.rgb,
        "Slot {} must be the base color for {rule}",
        slot + 1
    );
}

/// Assert the report's palette matches the rule applied directly
pub fn assert_palette_matches_rule(report: &ColorReport, rule: HarmonyRule) {
    assert_eq!(report.palette, rule.apply(report.rgb).to_vec());
}

/// Assert the text rendering mentions every palette color
pub fn assert_text_lists_palette(report: &ColorReport) {
    let text = report.render_text();
    for color in &report.palette {
        assert!(
            text.contains(&color.to_hex()),
            "Rendered text is missing {}:\n{text}",
            color.to_hex()
        );
    }
}

pub fn assert_rgb(actual: Rgb, expected: (u8, u8, u8)) {
    assert_eq!(<(u8, u8, u8)>::from(actual), expected);
}
