//! Closure and boundary-shade properties of the exported map.

use mmds_core::naming::{flatten, unflatten};
use mmds_core::{
    ColorGroupName, ColorToken, NeutralShadeKey, Token, TokenCategory, TokenSource, TypeContract,
    bridge,
};
use strum::IntoEnumIterator;

use crate::common::{fixture_map, synthetic_entries};

#[test]
fn test_every_declared_pair_appears_exactly_once() {
    let map = fixture_map();
    assert_eq!(map.len(), TokenCategory::total_token_count());

    for category in TokenCategory::iter() {
        for token in category.tokens() {
            let key = flatten(category, &token.sub_key()).unwrap();
            assert_eq!(map.keys().filter(|k| **k == key).count(), 1, "{key}");
        }
    }
}

#[test]
fn test_every_exported_key_decomposes() {
    let map = fixture_map();
    for key in map.keys() {
        let (category, sub_key) = unflatten(key.as_str()).unwrap();
        assert!(Token::parse(category, sub_key).is_ok(), "{key}");
    }
}

#[test]
fn test_closure_holds_for_arbitrary_values() {
    let source = TokenSource::from_entries(synthetic_entries()).unwrap();
    let map = bridge::export(&source).unwrap();
    for token in Token::all() {
        assert_eq!(map.get(token), format!("value-of-{token}"));
    }
}

#[test]
fn test_neutral_boundary_shades() {
    let map = fixture_map();
    assert!(map.contains_key("clr-neutral-white"));
    assert!(map.contains_key("clr-neutral-black"));
    assert_eq!(map.get(ColorToken::Neutral(NeutralShadeKey::White)), "oklch(100% 0 0)");
    assert_eq!(map.get(ColorToken::Neutral(NeutralShadeKey::Black)), "oklch(0% 0 0)");

    let declared = TypeContract::keys(TokenCategory::Color);
    assert!(declared.contains(&"clr-neutral-white"));
    assert!(declared.contains(&"clr-neutral-black"));

    for group in ColorGroupName::iter().filter(|g| *g != ColorGroupName::Neutral) {
        for shade in ["white", "black"] {
            let key = format!("clr-{group}-{shade}");
            assert!(!map.contains_key(&key), "{key}");
            assert!(!declared.contains(&key.as_str()), "{key}");
        }
    }
}
