//! # Units
//!
//! Pixel and root-relative length types plus the converter between them.
//!
//! ## Conversion
//!
//! ```text
//! Px(640) ─ / base font size (16) ─→ Rem(40) ─ Display ─→ "40rem"
//! ```
//!
//! The quotient is never rounded. Rendering uses the shortest decimal that
//! round-trips to the same `f64`, so `5px` becomes `"0.3125rem"` and `16px`
//! becomes `"1rem"`.

use std::fmt;

use config::constants::{ResolverConfig, BASE_FONT_SIZE_PX, REM_SUFFIX};
use serde::{Serialize, Serializer};

use crate::error::TokenError;

// =============================================================================
// PIXELS
// =============================================================================

/// Absolute pixel magnitude as found in design tools.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f64);

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Px(value)
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(f64::from(value))
    }
}

// =============================================================================
// REM
// =============================================================================

/// Root-relative length, rendered as `"<number>rem"`.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::Rem;
///
/// assert_eq!(Rem::new(22.5).to_string(), "22.5rem");
/// assert_eq!(Rem::new(1.0).to_string(), "1rem");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rem(f64);

impl Rem {
    /// Wraps an already converted magnitude.
    pub const fn new(value: f64) -> Self {
        Rem(value)
    }

    /// Numeric component without the unit suffix.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the length is usable by the engine.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl fmt::Display for Rem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 renders unsigned
        write!(f, "{}{}", self.0 + 0.0, REM_SUFFIX)
    }
}

impl Serialize for Rem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Length that may be the unitless zero.
///
/// The font-size scale starts at a bare `"0"`, every other step is a rem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Unitless `0`.
    Zero,
    /// Root-relative length.
    Rem(Rem),
}

impl Length {
    /// Numeric rem magnitude, `0.0` for [`Length::Zero`].
    pub fn rem_value(self) -> f64 {
        match self {
            Length::Zero => 0.0,
            Length::Rem(rem) => rem.value(),
        }
    }

    /// Whether the length is usable by the engine.
    pub fn is_valid(self) -> bool {
        match self {
            Length::Zero => true,
            Length::Rem(rem) => rem.is_valid(),
        }
    }
}

impl From<Rem> for Length {
    fn from(rem: Rem) -> Self {
        Length::Rem(rem)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => f.write_str("0"),
            Length::Rem(rem) => fmt::Display::fmt(rem, f),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// CONVERTER
// =============================================================================

/// Converts pixel magnitudes into rem using an explicit root font size.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::{Px, RemConverter};
///
/// let converter = RemConverter::default();
/// assert_eq!(converter.convert(Px(1580.0)).to_string(), "98.75rem");
///
/// let compact = RemConverter::new(10.0).unwrap();
/// assert_eq!(compact.convert(Px(15.0)).to_string(), "1.5rem");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemConverter {
    base_font_size: f64,
}

impl RemConverter {
    /// Creates a converter dividing by `base_font_size`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidBaseFontSize`] for zero, negative or
    /// non-finite bases.
    pub fn new(base_font_size: f64) -> Result<Self, TokenError> {
        let config = ResolverConfig::new(base_font_size)?;
        Ok(Self::from_config(&config))
    }

    /// Creates a converter from a validated resolver configuration.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            base_font_size: config.base_font_size(),
        }
    }

    /// Root font size in pixels.
    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }

    /// Converts without checking the input.
    ///
    /// Negative or non-finite pixels produce a negative or non-finite rem.
    /// Negative zero yields an unsigned zero.
    pub fn convert(&self, px: Px) -> Rem {
        let rem = Rem(px.0 / self.base_font_size + 0.0);
        log::trace!("converted {}px to {rem}", px.0);
        rem
    }

    /// Converts, rejecting negative and non-finite pixels.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidPixelValue`] when `px` is negative, NaN
    /// or infinite.
    pub fn try_convert(&self, px: Px) -> Result<Rem, TokenError> {
        if !px.0.is_finite() || px.0 < 0.0 {
            return Err(TokenError::InvalidPixelValue(px.0));
        }
        Ok(self.convert(px))
    }
}

impl Default for RemConverter {
    fn default() -> Self {
        Self {
            base_font_size: BASE_FONT_SIZE_PX,
        }
    }
}
