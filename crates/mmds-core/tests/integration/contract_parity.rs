//! Type contract against the exported map.

use std::collections::BTreeSet;

use mmds_core::{TokenCategory, TypeContract, contract, flat_key};
use strum::IntoEnumIterator;

use crate::common::fixture_map;

#[test]
fn test_contract_keys_equal_exported_keys() {
    let map = fixture_map();
    let exported: Vec<&str> = map.keys().map(|key| key.as_str()).collect();

    let mut declared: Vec<&str> = TypeContract::all().to_vec();
    declared.sort_unstable();

    assert_eq!(exported, declared);
}

#[test]
fn test_per_category_parity() {
    let map = fixture_map();
    for category in TokenCategory::iter() {
        let declared: BTreeSet<&str> = TypeContract::keys(category).iter().copied().collect();
        let exported: BTreeSet<&str> = map
            .keys()
            .filter(|key| key.token().unwrap().category() == category)
            .map(|key| key.as_str())
            .collect();
        assert_eq!(declared, exported, "{category}");
    }
}

#[test]
fn test_contract_verifies() {
    TypeContract::verify().unwrap();
}

#[test]
fn test_macro_keys_resolve_in_map() {
    let map = fixture_map();
    assert_eq!(map.get_key(flat_key!("size-4").as_str()).unwrap(), "1rem");
    assert_eq!(map.get_key(flat_key!("fw-bold").as_str()).unwrap(), "700");
}

#[test]
fn test_typescript_contract_lists_boundary_shades() {
    let ts = contract::typescript::render();
    assert!(ts.contains("export type NeutralShadeKey = 'white' | ShadeKey | 'black';"));
    assert!(ts.contains("export type FlatKey ="));
}
