//! Error types for color parsing and palette derivation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when parsing a hex color string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for checked conversions and rule lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarmonyError {
    /// A rule name did not match any known harmony rule.
    #[error("unknown harmony rule: {0:?}")]
    InvalidRule(String),

    /// A component was non-finite or outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Hex color string could not be parsed.
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rule_message() {
        let error = HarmonyError::InvalidRule("tetradic".to_string());
        assert_eq!(error.to_string(), "unknown harmony rule: \"tetradic\"");
    }

    #[test]
    fn test_invalid_input_message() {
        let error = HarmonyError::InvalidInput("hue must be finite");
        assert_eq!(error.to_string(), "invalid input: hue must be finite");
    }

    #[test]
    fn test_parse_error_wraps_into_harmony_error() {
        let err: HarmonyError = ParseColorError::InvalidLength.into();
        assert!(matches!(
            err,
            HarmonyError::ParseColor(ParseColorError::InvalidLength)
        ));
        assert_eq!(
            err.to_string(),
            "color parse error: invalid hex color length (expected 3 or 6 characters)"
        );
    }
}
