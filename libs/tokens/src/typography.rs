//! # Typography
//!
//! Font stacks and the font-size scale.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::scale::TokenScale;
use crate::units::{Length, Px, RemConverter};

/// Ordered font stack: preferred face first, then fallbacks.
///
/// Serialized as a flat array, the shape the CSS engine expects.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::FontStack;
///
/// let stack = FontStack::new("Inter", ["sans-serif"]);
/// assert_eq!(stack.faces().collect::<Vec<_>>(), ["Inter", "sans-serif"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStack {
    preferred: String,
    fallbacks: Vec<String>,
}

impl FontStack {
    /// Creates a stack from its preferred face and ordered fallbacks.
    pub fn new<I, S>(preferred: impl Into<String>, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred: preferred.into(),
            fallbacks: fallbacks.into_iter().map(Into::into).collect(),
        }
    }

    /// Face the engine tries first.
    pub fn preferred(&self) -> &str {
        &self.preferred
    }

    /// Fallback faces in priority order.
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// All faces in priority order.
    pub fn faces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.preferred.as_str()).chain(self.fallbacks.iter().map(String::as_str))
    }
}

impl Serialize for FontStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.fallbacks.len()))?;
        for face in self.faces() {
            seq.serialize_element(face)?;
        }
        seq.end()
    }
}

// =============================================================================
// FONT FAMILIES
// =============================================================================

/// Monospace fallbacks. The trailing `;` is kept as the frontend ships it.
pub const MONO_FALLBACK: &str =
    r#"Menlo, Consolas, "Ubuntu Mono", "Roboto Mono", "DejaVu Sans Mono", monospace;"#;

/// System sans-serif and emoji fallbacks shared by both Inter stacks.
pub const SANS_FALLBACK: &str = r#"ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, "Noto Sans", sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol", "Noto Color Emoji""#;

/// Builds the font family table: `mono`, `interVar`, `interNormal`.
pub fn font_families() -> TokenScale<FontStack> {
    TokenScale::new()
        .with("mono", FontStack::new("Roboto", [MONO_FALLBACK]))
        .with("interVar", FontStack::new(r#""Inter var""#, [SANS_FALLBACK]))
        .with("interNormal", FontStack::new("Inter", [SANS_FALLBACK]))
}

// =============================================================================
// FONT SIZES
// =============================================================================

/// Font-size steps after the unitless `0`, in pixels.
pub const FONT_SIZE_STEPS: [(&str, f64); 10] = [
    ("50", 12.0),
    ("100", 14.0),
    ("200", 16.0),
    ("300", 18.0),
    ("400", 20.0),
    ("500", 22.0),
    ("600", 24.0),
    ("700", 32.0),
    ("800", 38.0),
    ("900", 42.0),
];

/// Builds the font-size scale.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::{typography::font_sizes, RemConverter};
///
/// let sizes = font_sizes(&RemConverter::default());
/// assert_eq!(sizes.get("0").unwrap().to_string(), "0");
/// assert_eq!(sizes.get("200").unwrap().to_string(), "1rem");
/// ```
pub fn font_sizes(converter: &RemConverter) -> TokenScale<Length> {
    let mut sizes = TokenScale::new().with("0", Length::Zero);
    for (name, px) in FONT_SIZE_STEPS {
        sizes.insert(name, Length::Rem(converter.convert(Px(px))));
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_have_preferred_face_and_fallbacks() {
        let families = font_families();
        assert_eq!(
            families.names().collect::<Vec<_>>(),
            ["mono", "interVar", "interNormal"]
        );
        for (name, stack) in families.iter() {
            assert!(!stack.preferred().is_empty(), "{name} preferred face");
            assert!(!stack.fallbacks().is_empty(), "{name} fallbacks");
        }
        assert_eq!(families.get("mono").unwrap().preferred(), "Roboto");
        assert_eq!(families.get("interVar").unwrap().preferred(), "\"Inter var\"");
    }

    #[test]
    fn stack_serializes_in_priority_order() {
        let stack = FontStack::new("Inter", ["Arial", "sans-serif"]);
        assert_eq!(
            serde_json::to_string(&stack).unwrap(),
            r#"["Inter","Arial","sans-serif"]"#
        );
    }

    #[test]
    fn font_sizes_convert_every_step() {
        let sizes = font_sizes(&RemConverter::default());
        let rendered: Vec<_> = sizes.iter().map(|(n, l)| (n, l.to_string())).collect();
        let expected = [
            ("0", "0"),
            ("50", "0.75rem"),
            ("100", "0.875rem"),
            ("200", "1rem"),
            ("300", "1.125rem"),
            ("400", "1.25rem"),
            ("500", "1.375rem"),
            ("600", "1.5rem"),
            ("700", "2rem"),
            ("800", "2.375rem"),
            ("900", "2.625rem"),
        ];
        assert_eq!(rendered.len(), expected.len());
        for ((name, value), (want_name, want_value)) in rendered.iter().zip(expected) {
            assert_eq!(*name, want_name);
            assert_eq!(value, want_value);
        }
    }
}
