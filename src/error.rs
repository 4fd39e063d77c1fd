use hsl_harmony::{HarmonyError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixError {
    #[error("Bit index {0} out of range (expected 0..=7)")]
    BitOutOfRange(u8),

    #[error("Invalid bit string: {0}")]
    InvalidBits(String),

    #[error("Invalid RGB list: {0}")]
    InvalidRgbList(String),

    #[error("Color error: {0}")]
    Harmony(#[from] HarmonyError),

    #[error("Color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_out_of_range() {
        let error = MixError::BitOutOfRange(8);
        assert_eq!(error.to_string(), "Bit index 8 out of range (expected 0..=7)");
    }

    #[test]
    fn test_invalid_bits() {
        let error = MixError::InvalidBits("expected 24 bits, got 3".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid bit string: expected 24 bits, got 3"
        );
    }

    #[test]
    fn test_invalid_rgb_list() {
        let error = MixError::InvalidRgbList("1,2".to_string());
        assert_eq!(error.to_string(), "Invalid RGB list: 1,2");
    }

    #[test]
    fn test_config_error() {
        let error = MixError::Config("bad yaml".to_string());
        assert_eq!(error.to_string(), "Config error: bad yaml");
    }

    #[test]
    fn test_from_harmony_error() {
        let error: MixError = HarmonyError::InvalidRule("sepia".to_string()).into();
        match error {
            MixError::Harmony(HarmonyError::InvalidRule(ref name)) => assert_eq!(name, "sepia"),
            _ => panic!("Expected Harmony variant"),
        }
        assert_eq!(
            error.to_string(),
            "Color error: unknown harmony rule: \"sepia\""
        );
    }

    #[test]
    fn test_from_parse_color_error() {
        let error: MixError = ParseColorError::InvalidLength.into();
        assert!(matches!(error, MixError::ParseColor(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: MixError = io.into();
        assert_eq!(error.to_string(), "IO error: missing");
    }
}
