//! Config loading through the asset loader.

mod common;

use bitmix::assets::{AssetLoader, ConfigSource};
use bitmix::models::{AppConfig, OutputFormat};
use bitmix::services::{BasicNamer, ColorReport};
use bitmix::MixError;
use common::fixtures::{colors, TempConfig};
use hsl_harmony::{HarmonyError, UnknownRulePolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_external_config_is_used() {
    let temp = TempConfig::with_content("default_rule: analogous\nformat: json\n");
    let loader = temp.loader();

    assert_eq!(loader.config_source(), ConfigSource::File(temp.path.clone()));
    let config = AppConfig::load(&loader).unwrap();
    assert_eq!(config.default_rule, "analogous");
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.unknown_rule, UnknownRulePolicy::Error);
}

#[test]
fn test_missing_config_uses_embedded_defaults() {
    let temp = TempConfig::missing();
    let config = AppConfig::load(&temp.loader()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp = TempConfig::with_content("default_rule: [not, a, string\n");
    let err = AppConfig::load(&temp.loader()).unwrap_err();
    assert!(matches!(err, MixError::Config(_)), "got {err:?}");
}

#[test]
fn test_init_then_load_matches_defaults() {
    let temp = TempConfig::missing();
    let loader = temp.loader();

    let report = loader.init_config(false).unwrap();
    assert_eq!(report.written, vec![temp.path.display().to_string()]);
    assert_eq!(loader.config_source(), ConfigSource::File(temp.path.clone()));

    let config = AppConfig::load(&loader).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_init_does_not_clobber_without_force() {
    let temp = TempConfig::with_content("default_rule: shades\n");
    let loader = temp.loader();

    let report = loader.init_config(false).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(AppConfig::load(&loader).unwrap().default_rule, "shades");

    loader.init_config(true).unwrap();
    assert_eq!(AppConfig::load(&loader).unwrap().default_rule, "complementary");
}

#[test]
fn test_configured_unknown_rule_with_empty_policy() {
    let temp = TempConfig::with_content("default_rule: sepia\nunknown_rule: empty\n");
    let config = AppConfig::load(&temp.loader()).unwrap();

    let rule = config.resolve_rule(None);
    let report =
        ColorReport::build(colors::STEEL, rule, config.unknown_rule, &BasicNamer).unwrap();
    assert!(report.palette.is_empty());
    assert_eq!(report.palette_hex_list(), "");
}

#[test]
fn test_configured_unknown_rule_with_error_policy() {
    let temp = TempConfig::with_content("default_rule: sepia\n");
    let config = AppConfig::load(&temp.loader()).unwrap();

    let err = ColorReport::build(
        colors::STEEL,
        config.resolve_rule(None),
        config.unknown_rule,
        &BasicNamer,
    )
    .unwrap_err();
    match err {
        MixError::Harmony(HarmonyError::InvalidRule(name)) => assert_eq!(name, "sepia"),
        other => panic!("Expected InvalidRule, got {other:?}"),
    }
}

#[test]
fn test_default_loader_is_embedded() {
    assert_eq!(AssetLoader::default().config_source(), ConfigSource::Embedded);
}
