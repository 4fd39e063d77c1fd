//! Config loading with an embedded fallback
//!
//! - If no config path is given: use the embedded `config.yaml` only
//! - If a path is given and the file exists: read it from the filesystem
//! - If a path is given but missing: fall back to the embedded default
//!
//! `bitmix init` writes the embedded default out so it can be edited.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Where the active config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => f.write_str("embedded default"),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Loads `config.yaml` from an optional external path, falling back to the
/// copy compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from --config or BITMIX_CONFIG)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Which config [`read_config`](Self::read_config) would return.
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            _ => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let ConfigSource::File(path) = self.config_source() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(&path)?));
        }

        if let Some(ref path) = self.config_file {
            tracing::warn!(path = %path.display(), "Config file not found, using embedded default");
        }

        Self::embedded_config()
            .map(|data| {
                tracing::trace!("Loading config from embedded assets");
                data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to the configured path (or `./config.yaml`).
    ///
    /// An existing file is left alone unless `force` is set.
    pub fn init_config(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("./{CONFIG_FILE_NAME}")));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if let Some(data) = Self::embedded_config() {
            fs::write(&path, &*data)?;
            tracing::info!(path = %path.display(), "Wrote embedded default config");
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    /// Names of the files compiled into the binary
    pub fn list_embedded() -> Vec<String> {
        EmbeddedConfig::iter().map(|s| s.to_string()).collect()
    }

    fn embedded_config() -> Option<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_FILE_NAME).map(|f| f.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_is_present() {
        assert_eq!(AssetLoader::list_embedded(), vec!["config.yaml".to_string()]);
        let content = AssetLoader::default().read_config_string().unwrap();
        assert!(content.contains("default_rule"));
    }

    #[test]
    fn test_missing_external_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("nope.yaml")));
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
        assert!(loader.read_config_string().unwrap().contains("default_rule"));
    }

    #[test]
    fn test_external_file_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "default_rule: triadic\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::File(path));
        assert_eq!(loader.read_config_string().unwrap(), "default_rule: triadic\n");
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        let first = loader.init_config(false).unwrap();
        assert_eq!(first.written.len(), 1);
        assert!(first.skipped.is_empty());
        assert!(path.exists());

        let second = loader.init_config(false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 1);

        let forced = loader.init_config(true).unwrap();
        assert_eq!(forced.written.len(), 1);
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Embedded.to_string(), "embedded default");
        assert_eq!(
            ConfigSource::File(PathBuf::from("/tmp/x.yaml")).to_string(),
            "/tmp/x.yaml"
        );
    }
}
