//! Tests for configuration validation.

use super::*;
use crate::configuration::{ContentPatterns, Safelist};
use crate::units::{Px, RemConverter};

fn root() -> ConfigurationRoot {
    ConfigurationRoot::assemble(&RemConverter::default())
}

#[test]
fn built_in_configuration_is_valid() {
    assert!(validate_configuration(&root()).is_ok());
}

#[test]
fn rejects_screens_out_of_order() {
    let mut root = root();
    root.theme.screens = TokenScale::new()
        .with("sm", Rem::new(30.0))
        .with("md", Rem::new(40.0))
        .with("lg", Rem::new(40.0));
    match validate_configuration(&root) {
        Err(TokenError::ScreensOutOfOrder { previous, next }) => {
            assert_eq!(previous, "md");
            assert_eq!(next, "lg");
        }
        other => panic!("expected ScreensOutOfOrder, got {other:?}"),
    }
}

#[test]
fn rejects_negative_radius() {
    let mut root = root();
    let negative = RemConverter::default().convert(Px(-4.0));
    root.theme.border_radius.insert("sm", negative);
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::InvalidLength { family: "borderRadius", ref token, .. }) if token == "sm"
    ));
}

#[test]
fn rejects_non_finite_font_size() {
    let mut root = root();
    root.theme
        .font_size
        .insert("900", Length::Rem(Rem::new(f64::INFINITY)));
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::InvalidLength { family: "fontSize", .. })
    ));
}

#[test]
fn rejects_empty_font_face_and_fallbacks() {
    let mut root = root();
    root.theme
        .font_family
        .insert("mono", FontStack::new(" ", ["monospace"]));
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::EmptyFontFace(ref name)) if name == "mono"
    ));

    let mut root = self::root();
    root.theme
        .font_family
        .insert("interVar", FontStack::new("Inter", Vec::<String>::new()));
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::EmptyFallbacks(ref name)) if name == "interVar"
    ));
}

#[test]
fn rejects_missing_directives() {
    let mut root = root();
    root.content = ContentPatterns::new(Vec::<String>::new());
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::EmptyContentPatterns)
    ));

    let mut root = self::root();
    root.safelist = Safelist::new(["text-green-600", ""]);
    assert!(matches!(
        validate_configuration(&root),
        Err(TokenError::EmptySafelistEntry)
    ));
}
