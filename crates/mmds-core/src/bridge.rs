//! The token bridge: canonical source in, complete [`TokenMap`] out.
//!
//! The bridge walks the category model rather than the source, so the
//! result is exhaustive by construction. It keeps no state between calls;
//! every invocation re-derives the map from the source it is given.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Token, TokenCategory};
use crate::naming;
use crate::source::{SourceFormat, TokenSource};
use crate::token_map::TokenMap;

/// Produces the token map for `source`.
///
/// A declared key is *missing* when the source lacks it or holds only
/// whitespace for it; a source key is *undeclared* when the category model
/// does not name it. Either condition fails the whole export.
///
/// # Examples
///
/// ```
/// use mmds_core::{Error, Token, TokenSource, bridge};
///
/// // Every declared key except the last error shade
/// let source = TokenSource::from_entries(
///     Token::all()
///         .map(|t| t.flat_key().to_string())
///         .filter(|k| k != "clr-error-500")
///         .map(|k| (k, "x".to_string())),
/// ).unwrap();
///
/// let err = bridge::export(&source).unwrap_err();
/// assert!(matches!(
///     err,
///     Error::SourceDrift { ref missing, .. } if missing == &["clr-error-500".to_string()]
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::SourceDrift`] listing every missing and undeclared key.
pub fn export(source: &TokenSource) -> Result<TokenMap> {
    log::debug!(
        "Bridging {} source entries against {} declared tokens",
        source.len(),
        TokenCategory::total_token_count()
    );

    let mut entries = BTreeMap::new();
    let mut missing: Vec<String> = Vec::new();

    for token in Token::all() {
        let key = token.flat_key();
        match source.get(key.as_str()) {
            Some(value) if !value.trim().is_empty() => {
                entries.insert(key, value.to_string());
            }
            Some(_) => {
                log::warn!("Token {key} has an empty value");
                missing.push(key.into());
            }
            None => {
                log::warn!("Token {key} is missing from the source");
                missing.push(key.into());
            }
        }
    }

    let extra: Vec<String> = source
        .keys()
        .filter(|key| naming::parse_token(key).is_err())
        .map(str::to_string)
        .collect();
    for key in &extra {
        log::warn!("Source key {key} is not declared by the category model");
    }

    if !missing.is_empty() || !extra.is_empty() {
        missing.sort();
        return Err(Error::SourceDrift { missing, extra });
    }

    log::debug!("Bridged {} tokens", entries.len());
    Ok(TokenMap::from_checked(entries))
}

/// Loads a source file and exports it.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn export_file(path: &Path, format: Option<SourceFormat>) -> Result<TokenMap> {
    let source = TokenSource::load(path, format)?;
    export(&source)
}
