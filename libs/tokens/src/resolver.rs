//! # Token Resolver
//!
//! Runs conversion, theme assembly and configuration assembly against one
//! injected root font size.

use config::constants::ResolverConfig;

use crate::configuration::ConfigurationRoot;
use crate::error::TokenError;
use crate::theme::ThemeTable;
use crate::units::{Px, Rem, RemConverter};

/// Stateless resolver bound to a root font size.
///
/// # Example
///
/// ```rust
/// use config::constants::ResolverConfig;
/// use gnoweb_tokens::TokenResolver;
///
/// let resolver = TokenResolver::new(&ResolverConfig::default());
/// assert_eq!(resolver.convert(360.0).to_string(), "22.5rem");
/// assert_eq!(resolver.assemble_configuration(), resolver.assemble_configuration());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenResolver {
    converter: RemConverter,
}

impl TokenResolver {
    /// Creates a resolver from a validated configuration.
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            converter: RemConverter::from_config(config),
        }
    }

    /// Creates a resolver, validating the root font size.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidBaseFontSize`] for unusable sizes.
    pub fn with_base_font_size(base_font_size: f64) -> Result<Self, TokenError> {
        Ok(Self {
            converter: RemConverter::new(base_font_size)?,
        })
    }

    /// Converter in use.
    pub fn converter(&self) -> &RemConverter {
        &self.converter
    }

    /// Converts `px` to rem without checking the input.
    pub fn convert(&self, px: f64) -> Rem {
        self.converter.convert(Px(px))
    }

    /// Converts `px` to rem, rejecting negative and non-finite input.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidPixelValue`] for bad input.
    pub fn try_convert(&self, px: f64) -> Result<Rem, TokenError> {
        self.converter.try_convert(Px(px))
    }

    /// Assembles the theme table.
    pub fn build_theme_table(&self) -> ThemeTable {
        ThemeTable::build(&self.converter)
    }

    /// Assembles the full engine configuration.
    pub fn assemble_configuration(&self) -> ConfigurationRoot {
        ConfigurationRoot::assemble(&self.converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sixteen_pixel_root() {
        let resolver = TokenResolver::default();
        assert_eq!(resolver.converter().base_font_size(), 16.0);
        assert_eq!(resolver.convert(640.0).to_string(), "40rem");
    }

    #[test]
    fn injected_config_reaches_every_family() {
        let config = ResolverConfig::new(8.0).unwrap();
        let resolver = TokenResolver::new(&config);
        let theme = resolver.build_theme_table();
        assert_eq!(theme.screens.get("xs").unwrap().to_string(), "45rem");
        assert_eq!(theme.font_size.get("200").unwrap().to_string(), "2rem");
        assert_eq!(theme.border_radius.get("sm").unwrap().to_string(), "0.5rem");
    }

    #[test]
    fn with_base_font_size_validates() {
        assert!(TokenResolver::with_base_font_size(0.0).is_err());
        assert!(TokenResolver::with_base_font_size(20.0).is_ok());
    }

    #[test]
    fn try_convert_delegates() {
        let resolver = TokenResolver::default();
        assert!(resolver.try_convert(-1.0).is_err());
        assert_eq!(resolver.try_convert(4.0).unwrap().to_string(), "0.25rem");
    }
}
