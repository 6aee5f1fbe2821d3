//! The canonical token source.
//!
//! A [`TokenSource`] is a read-only snapshot of the raw `flat key → value`
//! pairs emitted by the style preprocessor. Parsing here is transport-level
//! only; checking the pairs against the category model is the bridge's job.
//!
//! # Formats
//!
//! - [`SourceFormat::CssExport`]: `:export { … }` blocks from the compiled
//!   stylesheet (`.css`, `.scss`)
//! - [`SourceFormat::Json`]: a flat JSON object of string values (`.json`)

mod css_export;
mod json;

pub(crate) use json::Entries;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Transport format of a token source.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
pub enum SourceFormat {
    /// Flat JSON object.
    #[serde(rename = "json")]
    #[strum(to_string = "json")]
    Json,
    /// CSS-Modules `:export` blocks.
    #[serde(rename = "css")]
    #[strum(to_string = "css")]
    CssExport,
}

impl SourceFormat {
    /// Infers the format from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use mmds_core::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_path(Path::new("tokens.json")), Some(SourceFormat::Json));
    /// assert_eq!(SourceFormat::from_path(Path::new("_tokens.module.scss")), Some(SourceFormat::CssExport));
    /// assert_eq!(SourceFormat::from_path(Path::new("tokens.yaml")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "css" | "scss" => Some(Self::CssExport),
            _ => None,
        }
    }
}

/// Raw `flat key → value` pairs from the canonical source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSource {
    entries: BTreeMap<String, String>,
}

impl TokenSource {
    /// Builds a source from key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a key appears twice.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            match map.entry(key.into()) {
                Entry::Occupied(entry) => {
                    return Err(Error::parse(format!("duplicate key `{}`", entry.key())));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value.into());
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Parses a flat JSON object.
    pub fn from_json(input: &str) -> Result<Self> {
        Self::from_entries(json::parse(input)?)
    }

    /// Parses the `:export` blocks of a compiled stylesheet.
    pub fn from_css_export(input: &str) -> Result<Self> {
        let mut map = BTreeMap::new();
        for decl in css_export::parse(input)? {
            match map.entry(decl.name) {
                Entry::Occupied(entry) => {
                    return Err(Error::parse_at(
                        decl.line,
                        format!("duplicate key `{}`", entry.key()),
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(decl.value);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Parses `input` in the given format.
    pub fn parse(input: &str, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Json => Self::from_json(input),
            SourceFormat::CssExport => Self::from_css_export(input),
        }
    }

    /// Reads and parses a source file.
    ///
    /// When `format` is `None` it is inferred from the file extension.
    pub fn load(path: &Path, format: Option<SourceFormat>) -> Result<Self> {
        let format = format.or_else(|| SourceFormat::from_path(path)).ok_or_else(|| {
            Error::parse(format!(
                "cannot infer source format of {}; expected .json, .css or .scss",
                path.display()
            ))
        })?;
        let input = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loading {format} token source from {}", path.display());
        Self::parse(&input, format)
    }

    /// Looks a raw value up by flat key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of pairs in the source.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
