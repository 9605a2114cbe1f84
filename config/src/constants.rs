//! # Configuration Constants
//!
//! Centralized constants for the gnoweb theme resolver. Unit conversion
//! parameters, engine directives and output locations are defined here.
//!
//! ## Categories
//!
//! - **Units**: Root font size and unit suffix used by px to rem conversion
//! - **Directives**: Content globs and safelist handed to the CSS engine
//! - **Output**: Default file name of the generated configuration module

use thiserror::Error;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Root font size in pixels.
///
/// Every pixel magnitude in the theme is divided by this value to obtain its
/// root-relative (`rem`) form. Browsers default the root font size to 16px.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_FONT_SIZE_PX;
///
/// let breakpoint_px = 640.0;
/// assert_eq!(breakpoint_px / BASE_FONT_SIZE_PX, 40.0);
/// ```
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Suffix appended to converted magnitudes.
///
/// # Example
///
/// ```rust
/// use config::constants::REM_SUFFIX;
///
/// assert_eq!(format!("{}{}", 1.5, REM_SUFFIX), "1.5rem");
/// ```
pub const REM_SUFFIX: &str = "rem";

/// Length of a `#RRGGBB` color literal.
pub const HEX_COLOR_LEN: usize = 7;

// =============================================================================
// ENGINE DIRECTIVES
// =============================================================================

/// Glob patterns the CSS engine scans for utility-class usage.
///
/// Patterns are relative to the frontend build root.
///
/// # Example
///
/// ```rust
/// use config::constants::CONTENT_GLOBS;
///
/// assert!(CONTENT_GLOBS.iter().any(|glob| glob.contains("gohtml")));
/// ```
pub const CONTENT_GLOBS: &[&str] = &["./components/**/*.{gohtml,ts}"];

/// Class names the CSS engine must always emit.
///
/// `text-green-600` is only assembled at runtime by templates, so the content
/// scan never sees it.
pub const SAFELIST: &[&str] = &["text-green-600"];

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// File name the generated configuration module is written to.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OUTPUT_FILE;
///
/// assert!(DEFAULT_OUTPUT_FILE.ends_with(".js"));
/// ```
pub const DEFAULT_OUTPUT_FILE: &str = "tx.config.js";

// =============================================================================
// RESOLVER CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings the token resolver runs with.
///
/// # Examples
/// ```
/// use config::constants::ResolverConfig;
/// let config = ResolverConfig::default();
/// assert_eq!(config.base_font_size(), 16.0);
/// ```
///
/// The root font size is only reachable through [`ResolverConfig::new`] and
/// `Default`, so an unchecked divisor cannot be built:
///
/// ```compile_fail
/// use config::constants::ResolverConfig;
/// let config = ResolverConfig { base_font_size: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    base_font_size: f64,
}

impl ResolverConfig {
    /// Builds a configuration, rejecting a root font size that cannot serve
    /// as a divisor.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ResolverConfig;
    /// let cfg = ResolverConfig::new(10.0).expect("valid config");
    /// assert_eq!(cfg.base_font_size(), 10.0);
    /// assert!(ResolverConfig::new(0.0).is_err());
    /// ```
    pub fn new(base_font_size: f64) -> Result<Self, ConfigError> {
        if !base_font_size.is_finite() || base_font_size <= 0.0 {
            return Err(ConfigError::InvalidBaseFontSize(base_font_size));
        }
        Ok(Self { base_font_size })
    }

    /// Root font size in pixels used as the px to rem divisor.
    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_font_size: BASE_FONT_SIZE_PX,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Raised when the root font size is zero, negative or not finite.
    #[error("base font size must be a positive finite number: {0}")]
    InvalidBaseFontSize(f64),
}
