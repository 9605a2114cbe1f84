//! # gnoweb Tokens
//!
//! Theme token resolver for the gnoweb frontend CSS engine.
//! Pixel design values are normalized to root-relative units and assembled
//! into the configuration object the engine loads.
//!
//! ## Architecture
//!
//! ```text
//! config constants → RemConverter → ThemeTable → ConfigurationRoot → JSON / ES module
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gnoweb_tokens::{assemble_configuration, build_theme_table, convert};
//!
//! assert_eq!(convert(360.0).to_string(), "22.5rem");
//! assert_eq!(
//!     build_theme_table().border_radius.get("DEFAULT").unwrap().to_string(),
//!     "0.3125rem"
//! );
//!
//! let config = assemble_configuration();
//! assert!(config.validate().is_ok());
//! assert!(config.safelist.contains("text-green-600"));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! gnoweb-tokens → tx-config (writes tx.config.js) → CSS engine
//!               → gnoweb-tokens-wasm (JS import)
//! ```

pub mod configuration;
pub mod error;
pub mod palette;
pub mod resolver;
pub mod scale;
pub mod theme;
pub mod typography;
pub mod units;
pub mod validate;

// Re-export public API
pub use configuration::{ConfigurationRoot, ContentPatterns, Safelist};
pub use error::TokenError;
pub use palette::{ColorEntry, CssKeyword, HexColor, Palette};
pub use resolver::TokenResolver;
pub use scale::TokenScale;
pub use theme::{Breakpoint, Container, ThemeTable, ZLayer};
pub use typography::FontStack;
pub use units::{Length, Px, Rem, RemConverter};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Converts a pixel magnitude to rem with the default 16px root.
///
/// The quotient is exact and unchecked: negative input yields a negative rem.
///
/// ```rust
/// assert_eq!(gnoweb_tokens::convert(1580.0).to_string(), "98.75rem");
/// ```
pub fn convert(px: f64) -> Rem {
    RemConverter::default().convert(Px(px))
}

/// Strict form of [`convert`].
///
/// # Errors
///
/// Returns [`TokenError::InvalidPixelValue`] for negative or non-finite input.
pub fn try_convert(px: f64) -> Result<Rem, TokenError> {
    RemConverter::default().try_convert(Px(px))
}

/// Assembles the theme table with the default 16px root.
pub fn build_theme_table() -> ThemeTable {
    TokenResolver::default().build_theme_table()
}

/// Assembles the engine configuration with the default 16px root.
pub fn assemble_configuration() -> ConfigurationRoot {
    TokenResolver::default().assemble_configuration()
}
