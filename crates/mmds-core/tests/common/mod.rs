//! Shared fixtures for the core integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mmds_core::{Token, TokenMap, TokenSource, bridge};

/// Path of the compiled stylesheet fixture.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tokens.module.css")
}

/// The fixture stylesheet as a token source.
pub fn fixture_source() -> TokenSource {
    TokenSource::load(&fixture_path(), None).expect("fixture should parse")
}

/// The fixture stylesheet bridged into a token map.
pub fn fixture_map() -> TokenMap {
    bridge::export(&fixture_source()).expect("fixture should satisfy the model")
}

/// The fixture's pairs, minus any key for which `drop` returns true.
pub fn fixture_entries_without(drop: impl Fn(&str) -> bool) -> Vec<(String, String)> {
    fixture_source()
        .iter()
        .filter(|(key, _)| !drop(key))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Placeholder values for every declared token.
pub fn synthetic_entries() -> Vec<(String, String)> {
    Token::all()
        .map(|token| (token.flat_key().to_string(), format!("value-of-{token}")))
        .collect()
}
