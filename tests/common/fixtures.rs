//! Test fixtures and constants.

use std::fs;
use std::path::PathBuf;

use bitmix::assets::AssetLoader;
use hsl_harmony::Rgb;
use tempfile::TempDir;

/// Colors used across scenarios
pub mod colors {
    use hsl_harmony::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const STEEL: Rgb = Rgb::new(51, 102, 153);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

/// Bit string for [`colors::STEEL`]
pub const STEEL_BITS: &str = "00110011_01100110_10011001";

/// A config file in its own temporary directory.
///
/// The directory is removed when this is dropped.
pub struct TempConfig {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    pub fn with_content(yaml: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.yaml");
        fs::write(&path, yaml).expect("write config");
        Self { dir, path }
    }

    /// A path inside a fresh temp dir with nothing written to it.
    pub fn missing() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.yaml");
        Self { dir, path }
    }

    pub fn loader(&self) -> AssetLoader {
        AssetLoader::new(Some(self.path.clone()))
    }
}

pub fn hex_codes(colors: &[Rgb]) -> Vec<String> {
    colors.iter().map(|c| c.to_hex()).collect()
}
