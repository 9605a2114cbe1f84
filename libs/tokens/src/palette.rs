//! # Color Palette
//!
//! Hex colors, CSS keyword pass-throughs and the gnoweb palette.
//!
//! Shade tables are keyed by the engine's numeric shade names (`50`..`900`).
//! Only shades the frontend actually uses are declared.

use std::fmt;
use std::str::FromStr;

use config::constants::HEX_COLOR_LEN;
use serde::{Serialize, Serializer};

use crate::error::TokenError;
use crate::scale::TokenScale;

/// Opaque sRGB color, always rendered as `#RRGGBB`.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::HexColor;
///
/// let muted: HexColor = "#8f8f8f".parse().unwrap();
/// assert_eq!(muted.to_string(), "#8F8F8F");
/// assert!("#FFF".parse::<HexColor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Builds a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for HexColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TokenError::InvalidHexColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if s.len() != HEX_COLOR_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::from_u32(rgb))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// CSS color keywords passed to the engine verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssKeyword {
    /// `transparent`
    Transparent,
    /// `currentColor`
    CurrentColor,
    /// `inherit`
    Inherit,
}

impl CssKeyword {
    /// CSS spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            CssKeyword::Transparent => "transparent",
            CssKeyword::CurrentColor => "currentColor",
            CssKeyword::Inherit => "inherit",
        }
    }
}

impl Serialize for CssKeyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Top-level palette entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorEntry {
    /// Single keyword value, e.g. `transparent`.
    Keyword(CssKeyword),
    /// Shade table, e.g. `gray.50`.
    Shades(TokenScale<HexColor>),
}

impl ColorEntry {
    /// Shade table of this entry, if it has one.
    pub fn shades(&self) -> Option<&TokenScale<HexColor>> {
        match self {
            ColorEntry::Shades(shades) => Some(shades),
            ColorEntry::Keyword(_) => None,
        }
    }

    /// Looks up a single shade.
    pub fn shade(&self, name: &str) -> Option<HexColor> {
        self.shades().and_then(|shades| shades.get(name)).copied()
    }
}

/// Palette name to color entry.
pub type Palette = TokenScale<ColorEntry>;

// =============================================================================
// GNOWEB PALETTE
// =============================================================================

/// Neutral shades, keyed by role in the frontend.
const GRAY_SHADES: [(&str, u32); 8] = [
    ("50", 0xF0F0F0),  // background
    ("100", 0xE2E2E2), // title, dark mode
    ("200", 0xBDBDBD), // content, dark mode
    ("300", 0x8F8F8F), // muted
    ("400", 0x7C7C7C), // border
    ("600", 0x54595D), // content
    ("800", 0x131313), // background, dark mode
    ("900", 0x080809), // title
];

const GREEN_SHADES: [(&str, u32); 2] = [
    ("400", 0x2D8D72), // primary, dark mode
    ("600", 0x226C57), // primary, light mode
];

fn shades(table: &[(&str, u32)]) -> ColorEntry {
    ColorEntry::Shades(
        table
            .iter()
            .map(|&(name, rgb)| (name, HexColor::from_u32(rgb)))
            .collect(),
    )
}

/// Builds the gnoweb color palette.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::palette::gnoweb_palette;
///
/// let palette = gnoweb_palette();
/// let green = palette.get("green").and_then(|entry| entry.shade("600"));
/// assert_eq!(green.map(|c| c.to_string()).as_deref(), Some("#226C57"));
/// ```
pub fn gnoweb_palette() -> Palette {
    TokenScale::new()
        .with("white", shades(&[("50", 0xFFFFFF)]))
        .with("gray", shades(&GRAY_SHADES))
        .with("green", shades(&GREEN_SHADES))
        .with("transparent", ColorEntry::Keyword(CssKeyword::Transparent))
        .with("current", ColorEntry::Keyword(CssKeyword::CurrentColor))
        .with("inherit", ColorEntry::Keyword(CssKeyword::Inherit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_case() {
        let color: HexColor = "#2d8d72".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0x2D, 0x8D, 0x72));
        assert_eq!(color.to_string(), "#2D8D72");
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "#", "FFFFFF", "#FFF", "#FFFFFFF", "#GGGGGG", "#+FFFFF"] {
            assert!(
                matches!(bad.parse::<HexColor>(), Err(TokenError::InvalidHexColor(ref s)) if s == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn from_u32_keeps_leading_zeros() {
        assert_eq!(HexColor::from_u32(0x080809).to_string(), "#080809");
        assert_eq!(HexColor::from_u32(0x080809).channels(), [8, 8, 9]);
    }

    #[test]
    fn keywords_are_not_hex() {
        let palette = gnoweb_palette();
        for (name, spelling) in [
            ("transparent", "transparent"),
            ("current", "currentColor"),
            ("inherit", "inherit"),
        ] {
            let entry = palette.get(name).unwrap();
            assert!(entry.shades().is_none());
            assert_eq!(
                serde_json::to_string(entry).unwrap(),
                format!("\"{spelling}\"")
            );
        }
    }

    #[test]
    fn gray_shades_in_declared_order() {
        let palette = gnoweb_palette();
        let gray = palette.get("gray").and_then(ColorEntry::shades).unwrap();
        assert_eq!(
            gray.names().collect::<Vec<_>>(),
            ["50", "100", "200", "300", "400", "600", "800", "900"]
        );
        assert_eq!(gray.get("600").unwrap().to_string(), "#54595D");
    }
}
