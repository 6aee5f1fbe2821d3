//! End-to-end export of the compiled stylesheet fixture.

use mmds_core::{
    BreakpointName, ColorToken, Error, FontWeightName, ShadeKey, SizeStep, TokenCategory,
    TokenMap, TokenSource, bridge,
};

use crate::common::{fixture_entries_without, fixture_map, fixture_path};

#[test]
fn test_primary_400_value_is_exported_verbatim() {
    let map = fixture_map();
    assert_eq!(
        map.get_key("clr-primary-400").unwrap(),
        "oklch(55.857% 0.1908 256.019)"
    );
    assert_eq!(
        map.get(ColorToken::Primary(ShadeKey::S400)),
        "oklch(55.857% 0.1908 256.019)"
    );
}

#[test]
fn test_breakpoint_medium_and_viewport_comparison() {
    let map = fixture_map();
    assert_eq!(map.get_key("bp-medium").unwrap(), "45em");
    assert_eq!(map.breakpoint_em(BreakpointName::Medium).unwrap(), 45.0);

    assert!(map.is_above_breakpoint(BreakpointName::Medium, 45.0).unwrap());
    assert!(map.is_above_breakpoint(BreakpointName::Medium, 50.5).unwrap());
    assert!(!map.is_above_breakpoint(BreakpointName::Medium, 44.9).unwrap());
}

#[test]
fn test_size_step_4() {
    let map = fixture_map();
    assert_eq!(map.get_key("size-4").unwrap(), "1rem");
    assert_eq!(map.get(SizeStep::Step4), "1rem");
}

#[test]
fn test_font_weight_bold() {
    let map = fixture_map();
    assert_eq!(map.get_key("fw-bold").unwrap(), "700");
    assert_eq!(map.get(FontWeightName::Bold), "700");
}

#[test]
fn test_missing_error_500_is_drift() {
    let source =
        TokenSource::from_entries(fixture_entries_without(|key| key == "clr-error-500")).unwrap();

    let err = bridge::export(&source).unwrap_err();
    assert!(err.is_drift());
    let Error::SourceDrift { missing, extra } = err else {
        unreachable!("Expected SourceDrift error variant");
    };
    assert_eq!(missing, vec!["clr-error-500".to_string()]);
    assert!(extra.is_empty());
}

#[test]
fn test_undeclared_source_key_is_drift() {
    let mut entries = fixture_entries_without(|_| false);
    entries.push(("clr-primary-white".to_string(), "#fff".to_string()));
    let source = TokenSource::from_entries(entries).unwrap();

    let err = bridge::export(&source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Source drift: 0 missing, 1 undeclared (undeclared: clr-primary-white)"
    );
}

#[test]
fn test_unknown_string_lookup_fails() {
    let map = fixture_map();
    let err = map.get_key("clr-primary-999").unwrap_err();
    assert!(matches!(err, Error::UnknownTokenKey { ref key } if key == "clr-primary-999"));
}

#[test]
fn test_quoted_font_stack_is_kept() {
    let map = fixture_map();
    assert_eq!(
        map.get_key("ff-accent").unwrap(),
        "\"Playfair Display\", Georgia, serif"
    );
    assert_eq!(map.get_key("ff-base").unwrap(), "Inter, system-ui, sans-serif");
}

#[test]
fn test_json_transport_matches_css() {
    let css_map = fixture_map();
    let json = css_map.to_json_pretty().unwrap();

    let json_map = bridge::export(&TokenSource::from_json(&json).unwrap()).unwrap();
    assert_eq!(json_map, css_map);
}

#[test]
fn test_deserialize_rejects_incomplete_map() {
    let json = r#"{"bp-medium": "45em"}"#;
    let err = serde_json::from_str::<TokenMap>(json).unwrap_err();
    assert!(err.to_string().contains("Source drift"));
}

#[test]
fn test_grouped_view() {
    let grouped = fixture_map().to_design_tokens();
    assert_eq!(grouped.colors["primary-400"], "oklch(55.857% 0.1908 256.019)");
    assert_eq!(grouped.breakpoints["medium"], "45em");
    assert_eq!(grouped.sizes["4"], "1rem");
    assert_eq!(grouped.font_sizes["400"], "1rem");
    assert_eq!(grouped.font_weights["bold"], "700");
    assert_eq!(grouped.font_families["base"], "Inter, system-ui, sans-serif");
    assert_eq!(
        grouped.group(TokenCategory::Color).len(),
        TokenCategory::Color.token_count()
    );
}

#[test]
fn test_css_custom_properties() {
    let css = fixture_map().to_css_custom_properties(":root");
    assert!(css.starts_with(":root {\n  --clr-neutral-white: oklch(100% 0 0);\n"));
    assert!(css.contains("  --fs-400: 1rem;\n"));
    assert!(css.ends_with("  --ff-accent: \"Playfair Display\", Georgia, serif;\n}\n"));

    // The rendered block is itself a valid stylesheet for the CSS transport
    // once wrapped in :export.
    let reparsed = TokenSource::from_css_export(&css.replace(":root", ":export")).unwrap();
    let names: Vec<&str> = reparsed.keys().collect();
    assert!(names.iter().all(|name| name.starts_with("--")));
    assert_eq!(names.len(), TokenCategory::total_token_count());
}

#[test]
fn test_export_file_from_fixture() {
    let map = bridge::export_file(&fixture_path(), None).unwrap();
    assert_eq!(map.len(), TokenCategory::total_token_count());
}
