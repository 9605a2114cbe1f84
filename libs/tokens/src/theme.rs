//! # Theme Table
//!
//! The seven token families handed to the CSS engine under `theme`.
//!
//! ```text
//! screens       Breakpoint widths, narrowest first      (px → rem)
//! zIndex        Stacking layers                         (literal)
//! container     Centering and horizontal padding        (px → rem)
//! borderRadius  Corner radii                            (px → rem)
//! colors        Shade tables and CSS keywords           (literal)
//! fontFamily    Ordered font stacks                     (literal)
//! fontSize      Type scale                              (px → rem)
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::palette::{gnoweb_palette, Palette};
use crate::scale::TokenScale;
use crate::typography::{font_families, font_sizes, FontStack};
use crate::units::{Length, Px, Rem, RemConverter};

// =============================================================================
// SCREENS
// =============================================================================

/// Responsive breakpoints, declared from narrowest to widest.
///
/// The engine generates `min-width` media queries in declaration order, so
/// the variant order here is the cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Small phones.
    Xs,
    /// Phones.
    Sm,
    /// Large phones and small tablets.
    Md,
    /// Tablets.
    Lg,
    /// Laptops.
    Xl,
    /// Desktops.
    Xxl,
    /// Content maximum.
    Max,
}

impl Breakpoint {
    /// All breakpoints in cascade order.
    pub const ALL: [Breakpoint; 7] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
        Breakpoint::Max,
    ];

    /// Token name used by the engine (`sm:` prefix, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
            Breakpoint::Max => "max",
        }
    }

    /// Minimum viewport width in pixels.
    pub const fn width(self) -> Px {
        Px(match self {
            Breakpoint::Xs => 360.0,
            Breakpoint::Sm => 480.0,
            Breakpoint::Md => 640.0,
            Breakpoint::Lg => 820.0,
            Breakpoint::Xl => 1020.0,
            Breakpoint::Xxl => 1366.0,
            Breakpoint::Max => 1580.0,
        })
    }
}

/// Builds the `screens` family.
pub fn screens(converter: &RemConverter) -> TokenScale<Rem> {
    Breakpoint::ALL
        .iter()
        .map(|bp| (bp.name(), converter.convert(bp.width())))
        .collect()
}

// =============================================================================
// Z-INDEX
// =============================================================================

/// Stacking layer, serialized as a string as the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZLayer(pub i32);

impl fmt::Display for ZLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ZLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `zIndex` entries; `min` sits below the document flow, `max` above all.
pub const Z_LAYERS: [(&str, i32); 5] = [
    ("min", -1),
    ("1", 1),
    ("2", 2),
    ("100", 100),
    ("max", 9999),
];

fn z_index() -> TokenScale<ZLayer> {
    Z_LAYERS
        .iter()
        .map(|&(name, layer)| (name, ZLayer(layer)))
        .collect()
}

// =============================================================================
// CONTAINER & RADII
// =============================================================================

/// Horizontal padding of the `container` utility, in pixels.
pub const CONTAINER_PADDING_PX: f64 = 40.0;

/// Corner radii in pixels.
pub const BORDER_RADII: [(&str, f64); 2] = [("sm", 4.0), ("DEFAULT", 5.0)];

/// Options of the `container` utility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Container {
    /// Center the container with auto margins.
    pub center: bool,
    /// Horizontal padding.
    pub padding: Rem,
}

fn border_radius(converter: &RemConverter) -> TokenScale<Rem> {
    BORDER_RADII
        .iter()
        .map(|&(name, px)| (name, converter.convert(Px(px))))
        .collect()
}

// =============================================================================
// THEME TABLE
// =============================================================================

/// Full theme handed to the engine.
///
/// Field names serialize in camelCase to match the engine schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTable {
    /// Breakpoints, narrowest first.
    pub screens: TokenScale<Rem>,
    /// Stacking layers.
    pub z_index: TokenScale<ZLayer>,
    /// Container utility options.
    pub container: Container,
    /// Corner radii.
    pub border_radius: TokenScale<Rem>,
    /// Color palette.
    pub colors: Palette,
    /// Font stacks.
    pub font_family: TokenScale<FontStack>,
    /// Type scale.
    pub font_size: TokenScale<Length>,
}

impl ThemeTable {
    /// Assembles every family, converting pixel magnitudes with `converter`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gnoweb_tokens::{RemConverter, ThemeTable};
    ///
    /// let theme = ThemeTable::build(&RemConverter::default());
    /// assert_eq!(theme.border_radius.get("DEFAULT").unwrap().to_string(), "0.3125rem");
    /// assert_eq!(theme.container.padding.to_string(), "2.5rem");
    /// ```
    pub fn build(converter: &RemConverter) -> Self {
        Self {
            screens: screens(converter),
            z_index: z_index(),
            container: Container {
                center: true,
                padding: converter.convert(Px(CONTAINER_PADDING_PX)),
            },
            border_radius: border_radius(converter),
            colors: gnoweb_palette(),
            font_family: font_families(),
            font_size: font_sizes(converter),
        }
    }
}

#[cfg(test)]
mod tests;
