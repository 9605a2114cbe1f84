//! # Token Errors
//!
//! Error types for strict conversion, validation and rendering.
//!
//! ## Error Policy
//!
//! - Assembly of the built-in theme never fails
//! - Strict conversion and validation report the first violation found
//! - Errors carry the offending token so the engine input can be fixed

use config::constants::ConfigError;
use thiserror::Error;

/// Errors produced by the token resolver.
///
/// ## Example
///
/// ```rust
/// use gnoweb_tokens::{try_convert, TokenError};
///
/// match try_convert(-8.0) {
///     Err(TokenError::InvalidPixelValue(px)) => assert_eq!(px, -8.0),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TokenError {
    /// Pixel magnitude is negative, NaN or infinite.
    #[error("pixel value must be finite and non-negative: {0}")]
    InvalidPixelValue(f64),

    /// Root font size cannot serve as a divisor.
    #[error("base font size must be a positive finite number: {0}")]
    InvalidBaseFontSize(f64),

    /// Color literal is not of the form `#RRGGBB`.
    #[error("invalid hex color '{0}': expected #RRGGBB")]
    InvalidHexColor(String),

    /// Breakpoints are not strictly ascending.
    #[error("screen '{next}' must be wider than the preceding screen '{previous}'")]
    ScreensOutOfOrder {
        /// Name of the earlier breakpoint
        previous: String,
        /// Name of the breakpoint that is not wider
        next: String,
    },

    /// A length token resolved to a negative or non-finite value.
    #[error("{family} token '{token}' has invalid length {value}")]
    InvalidLength {
        /// Theme family the token belongs to
        family: &'static str,
        /// Token name
        token: String,
        /// Rendered value
        value: String,
    },

    /// Font stack has a blank preferred face.
    #[error("font family '{0}' has an empty preferred face")]
    EmptyFontFace(String),

    /// Font stack has no fallbacks, or a blank one.
    #[error("font family '{0}' needs at least one non-empty fallback")]
    EmptyFallbacks(String),

    /// No content globs for the engine to scan.
    #[error("content patterns must contain at least one non-empty glob")]
    EmptyContentPatterns,

    /// Safelist holds a blank class name.
    #[error("safelist contains an empty class name")]
    EmptySafelistEntry,

    /// JSON rendering failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ConfigError> for TokenError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidBaseFontSize(value) => TokenError::InvalidBaseFontSize(value),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenError::ScreensOutOfOrder {
            previous: "md".to_string(),
            next: "sm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "screen 'sm' must be wider than the preceding screen 'md'"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: TokenError = ConfigError::InvalidBaseFontSize(0.0).into();
        assert!(matches!(err, TokenError::InvalidBaseFontSize(v) if v == 0.0));
    }
}
