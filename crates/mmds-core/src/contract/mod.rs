//! The static type contract.
//!
//! The declared key space lives in `contract/categories.toml`. The build
//! script turns it into the const tables re-exported here, which gives
//! three things:
//!
//! - [`is_declared`], a `const fn` usable at compile time
//! - the [`flat_key!`](crate::flat_key) macro, which refuses undeclared
//!   literals during compilation
//! - [`TypeContract::verify`], which proves the declared tables and the
//!   category model describe the same keys
//!
//! Unknown sub-keys are rejected before the program runs:
//!
//! ```compile_fail
//! let key = mmds_core::flat_key!("clr-primary-999");
//! ```
//!
//! ```compile_fail
//! let shade = mmds_core::ShadeKey::S999;
//! ```
//!
//! ```
//! let key = mmds_core::flat_key!("clr-primary-400");
//! assert_eq!(key.as_str(), "clr-primary-400");
//! ```

pub mod typescript;

mod tables {
    include!(concat!(env!("OUT_DIR"), "/contract_tables.rs"));
}

pub use tables::{
    BREAKPOINT_KEYS, CATEGORIES, COLOR_KEYS, FLAT_KEYS, FONT_FAMILY_KEYS, FONT_SIZE_KEYS,
    FONT_WEIGHT_KEYS, SIZE_KEYS,
};

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{Error, Result};
use crate::model::TokenCategory;
use crate::naming::SEPARATOR;

/// Whether `key` is a declared flat key.
///
/// Usable in const context; [`flat_key!`](crate::flat_key) relies on it.
///
/// # Examples
///
/// ```
/// use mmds_core::contract::is_declared;
///
/// const OK: bool = is_declared("fw-bold");
/// assert!(OK);
/// assert!(!is_declared("fw-heavy"));
/// ```
pub const fn is_declared(key: &str) -> bool {
    let key = key.as_bytes();
    let mut i = 0;
    while i < FLAT_KEYS.len() {
        if bytes_eq(FLAT_KEYS[i].as_bytes(), key) {
            return true;
        }
        i += 1;
    }
    false
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Builds a [`FlatKey`](crate::FlatKey) from a literal, failing compilation
/// if the key is not declared.
///
/// ```
/// use mmds_core::{Token, flat_key};
///
/// let key = flat_key!("bp-medium");
/// assert_eq!(key.token().unwrap(), Token::from(mmds_core::BreakpointName::Medium));
/// ```
#[macro_export]
macro_rules! flat_key {
    ($key:literal) => {{
        const _: () = assert!(
            $crate::contract::is_declared($key),
            "undeclared design token key"
        );
        $crate::FlatKey::from_declared($key)
    }};
}

/// Accessors over the declared key tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeContract;

impl TypeContract {
    /// Declared flat keys of one category, in declaration order.
    pub fn keys(category: TokenCategory) -> &'static [&'static str] {
        match category {
            TokenCategory::Color => COLOR_KEYS,
            TokenCategory::Breakpoint => BREAKPOINT_KEYS,
            TokenCategory::Size => SIZE_KEYS,
            TokenCategory::FontSize => FONT_SIZE_KEYS,
            TokenCategory::FontWeight => FONT_WEIGHT_KEYS,
            TokenCategory::FontFamily => FONT_FAMILY_KEYS,
        }
    }

    /// Every declared flat key.
    pub fn all() -> &'static [&'static str] {
        FLAT_KEYS
    }

    /// Whether `key` is declared.
    pub fn contains(key: &str) -> bool {
        is_declared(key)
    }

    /// Checks the declared tables against the category model.
    ///
    /// Keys the model produces but the tables lack are *missing*; keys the
    /// tables declare but the model cannot produce are *extra*. Category
    /// entries whose name or prefix the model does not know are reported as
    /// extra too, in `category:<name>/<prefix>` form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeContractMismatch`] on any disagreement.
    pub fn verify() -> Result<()> {
        compare(CATEGORIES)?;
        log::debug!("Type contract matches the model ({} keys)", FLAT_KEYS.len());
        Ok(())
    }

    /// A serializable description of the declared key space.
    pub fn describe() -> ContractDescription {
        let categories = CATEGORIES
            .iter()
            .map(|(name, prefix, keys)| CategoryContract {
                name: (*name).to_string(),
                prefix: (*prefix).to_string(),
                sub_keys: keys
                    .iter()
                    .map(|key| strip_prefix(key, prefix).to_string())
                    .collect(),
                flat_keys: keys.iter().map(|key| (*key).to_string()).collect(),
            })
            .collect();

        ContractDescription {
            separator: SEPARATOR,
            total: FLAT_KEYS.len(),
            categories,
        }
    }
}

/// Compares `(name, prefix, flat keys)` category tables with the model.
fn compare(categories: &[(&str, &str, &[&str])]) -> Result<()> {
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    for category in TokenCategory::iter() {
        let declared: BTreeSet<&str> = categories
            .iter()
            .filter(|(name, _, _)| *name == category.name())
            .flat_map(|(_, _, keys)| keys.iter().copied())
            .collect();
        let produced: BTreeSet<String> =
            category.tokens().iter().map(ToString::to_string).collect();

        missing.extend(
            produced
                .iter()
                .filter(|key| !declared.contains(key.as_str()))
                .cloned(),
        );
        extra.extend(
            declared
                .iter()
                .filter(|key| !produced.contains(**key))
                .map(|key| (*key).to_string()),
        );
    }

    for (name, prefix, _) in categories {
        let known =
            TokenCategory::from_str(name).is_ok_and(|category| category.prefix() == *prefix);
        if !known {
            extra.push(format!("category:{name}/{prefix}"));
        }
    }

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(Error::TypeContractMismatch { missing, extra })
    }
}

fn strip_prefix<'a>(key: &'a str, prefix: &str) -> &'a str {
    key.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .unwrap_or(key)
}

/// Serializable form of the declared key space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDescription {
    /// Flat-key separator.
    pub separator: char,
    /// Number of declared keys.
    pub total: usize,
    /// Categories in declaration order.
    pub categories: Vec<CategoryContract>,
}

/// One category of the declared key space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryContract {
    /// Category name.
    pub name: String,
    /// Flat-key prefix.
    pub prefix: String,
    /// Sub-keys, without the prefix.
    pub sub_keys: Vec<String>,
    /// Full flat keys.
    pub flat_keys: Vec<String>,
}
