//! The flattening/naming convention.
//!
//! A flat key is `<category-prefix>-<sub-key>`. Prefixes never contain the
//! separator, so splitting at the first separator recovers the category and
//! leaves hyphenated sub-keys (`semi-bold`, `primary-400`) intact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Token, TokenCategory};

/// Separator between the category prefix and the sub-key.
pub const SEPARATOR: char = '-';

/// A namespaced token identifier such as `clr-primary-400`.
///
/// A `FlatKey` always names a token of the category model: it is produced
/// by [`Token::flat_key`], by [`flatten`], by parsing, or by the
/// compile-time checked [`flat_key!`](crate::flat_key) macro.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlatKey(String);

impl FlatKey {
    pub(crate) fn from_token(token: &Token) -> Self {
        Self(token.to_string())
    }

    /// Builds a key from a literal already checked against the type
    /// contract. Use [`flat_key!`](crate::flat_key) instead of calling this.
    ///
    /// Debug builds panic on an undeclared key.
    #[doc(hidden)]
    pub fn from_declared(key: &'static str) -> Self {
        debug_assert!(
            crate::contract::is_declared(key),
            "undeclared design token key `{key}`"
        );
        Self(key.to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the typed token this key names.
    pub fn token(&self) -> Result<Token> {
        parse_token(&self.0)
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlatKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FlatKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_token(s).map(|token| token.flat_key())
    }
}

impl TryFrom<String> for FlatKey {
    type Error = Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        parse_token(&s)?;
        Ok(Self(s))
    }
}

impl From<FlatKey> for String {
    fn from(key: FlatKey) -> Self {
        key.0
    }
}

impl From<Token> for FlatKey {
    fn from(token: Token) -> Self {
        token.flat_key()
    }
}

/// Joins a category prefix and a sub-key into a flat key.
///
/// The sub-key is kept verbatim; it must already be legal for the
/// category.
///
/// # Examples
///
/// ```
/// use mmds_core::TokenCategory;
/// use mmds_core::naming::flatten;
///
/// let key = flatten(TokenCategory::FontWeight, "semi-bold").unwrap();
/// assert_eq!(key.as_str(), "fw-semi-bold");
///
/// assert!(flatten(TokenCategory::Color, "primary-999").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownTokenKey`] for a pair outside the model.
pub fn flatten(category: TokenCategory, sub_key: &str) -> Result<FlatKey> {
    Token::parse(category, sub_key).map(|token| token.flat_key())
}

/// Splits a flat key back into its category and sub-key.
///
/// # Examples
///
/// ```
/// use mmds_core::TokenCategory;
/// use mmds_core::naming::unflatten;
///
/// assert_eq!(
///     unflatten("clr-neutral-white").unwrap(),
///     (TokenCategory::Color, "neutral-white")
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownTokenKey`] when the prefix is unknown or the
/// sub-key is not declared for its category.
pub fn unflatten(key: &str) -> Result<(TokenCategory, &str)> {
    let (prefix, sub_key) = key
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::unknown_key(key))?;
    let category = TokenCategory::from_prefix(prefix).ok_or_else(|| Error::unknown_key(key))?;
    Token::parse(category, sub_key)?;
    Ok((category, sub_key))
}

/// Parses a flat key into its typed token.
///
/// # Errors
///
/// Returns [`Error::UnknownTokenKey`] for any key outside the model closure.
pub fn parse_token(key: &str) -> Result<Token> {
    let (category, sub_key) = unflatten(key)?;
    Token::parse(category, sub_key)
}
