//! Tests for theme table assembly.

use super::*;

fn theme() -> ThemeTable {
    ThemeTable::build(&RemConverter::default())
}

#[test]
fn screens_follow_breakpoint_order() {
    let theme = theme();
    assert_eq!(
        theme.screens.names().collect::<Vec<_>>(),
        ["xs", "sm", "md", "lg", "xl", "xxl", "max"]
    );
    let rendered: Vec<_> = theme.screens.iter().map(|(_, r)| r.to_string()).collect();
    assert_eq!(
        rendered,
        ["22.5rem", "30rem", "40rem", "51.25rem", "63.75rem", "85.375rem", "98.75rem"]
    );
}

#[test]
fn breakpoint_widths_strictly_ascend() {
    for pair in Breakpoint::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].width() < pair[1].width(), "{:?} vs {:?}", pair[0], pair[1]);
    }
}

#[test]
fn z_index_layers_are_literal_strings() {
    let theme = theme();
    assert_eq!(
        serde_json::to_string(&theme.z_index).unwrap(),
        r#"{"min":"-1","1":"1","2":"2","100":"100","max":"9999"}"#
    );
}

#[test]
fn container_is_centered_with_padding() {
    let theme = theme();
    assert!(theme.container.center);
    assert_eq!(
        serde_json::to_string(&theme.container).unwrap(),
        r#"{"center":true,"padding":"2.5rem"}"#
    );
}

#[test]
fn border_radius_converts() {
    let theme = theme();
    assert_eq!(theme.border_radius.get("sm").unwrap().to_string(), "0.25rem");
    assert_eq!(theme.border_radius.get("DEFAULT").unwrap().to_string(), "0.3125rem");
}

#[test]
fn theme_keys_are_camel_case() {
    let json = serde_json::to_string(&theme()).unwrap();
    let keys = [
        "\"screens\"",
        "\"zIndex\"",
        "\"container\"",
        "\"borderRadius\"",
        "\"colors\"",
        "\"fontFamily\"",
        "\"fontSize\"",
    ];
    let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn custom_base_scales_converted_families_only() {
    let theme = ThemeTable::build(&RemConverter::new(10.0).unwrap());
    assert_eq!(theme.screens.get("md").unwrap().to_string(), "64rem");
    assert_eq!(theme.container.padding.to_string(), "4rem");
    assert_eq!(theme.z_index.get("max"), Some(&ZLayer(9999)));
    assert_eq!(theme.colors, ThemeTable::build(&RemConverter::default()).colors);
}
