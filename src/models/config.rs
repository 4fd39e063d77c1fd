use crate::assets::AssetLoader;
use crate::error::MixError;
use hsl_harmony::{HarmonyRule, UnknownRulePolicy};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Rule name used when no rule is given on the command line.
    ///
    /// Kept as a string so an unknown name goes through `unknown_rule`
    /// like one typed on the command line.
    #[serde(default = "default_rule")]
    pub default_rule: String,

    /// What an unrecognised rule name does
    #[serde(default)]
    pub unknown_rule: UnknownRulePolicy,

    /// Default report format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_rule() -> String {
    HarmonyRule::default().name().to_string()
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Parse YAML. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, MixError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MixError::Config(e.to_string()))
    }

    /// Load configuration from AssetLoader (external file or embedded)
    pub fn load(loader: &AssetLoader) -> Result<Self, MixError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            source = %loader.config_source(),
            default_rule = %config.default_rule,
            unknown_rule = ?config.unknown_rule,
            format = ?config.format,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// The rule name to use: the explicit one if given, else the configured default.
    pub fn resolve_rule<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.default_rule)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_rule: default_rule(),
            unknown_rule: UnknownRulePolicy::default(),
            format: OutputFormat::default(),
        }
    }
}
