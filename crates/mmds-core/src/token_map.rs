//! The immutable flat token mapping handed to consuming code.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::bridge;
use crate::error::{Error, Result};
use crate::model::{BreakpointName, Token, TokenCategory};
use crate::naming::{self, FlatKey};
use crate::source::{Entries, TokenSource};
use crate::units::parse_leading_number;

/// Every flat key of the category model mapped to its string value.
///
/// A `TokenMap` is only produced by [`bridge::export`], which guarantees
/// its key set is exactly the model closure. That makes typed lookups
/// infallible: there is no key a [`Token`] can name that the map lacks.
///
/// The map has no mutating API; share it freely across threads.
///
/// # Examples
///
/// ```
/// use mmds_core::{BreakpointName, FontWeightName, Token, TokenSource, bridge};
///
/// let source = TokenSource::from_entries(
///     Token::all().map(|t| (t.flat_key().to_string(), "1".to_string())),
/// ).unwrap();
/// let tokens = bridge::export(&source).unwrap();
///
/// assert_eq!(tokens.get(FontWeightName::Bold), "1");
/// assert!(tokens.get_key("fw-heavy").is_err());
/// assert!(tokens.is_above_breakpoint(BreakpointName::Medium, 2.0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMap {
    entries: BTreeMap<FlatKey, String>,
}

impl TokenMap {
    pub(crate) fn from_checked(entries: BTreeMap<FlatKey, String>) -> Self {
        Self { entries }
    }

    /// Looks up a token's value.
    pub fn get(&self, token: impl Into<Token>) -> &str {
        &self.entries[&token.into().flat_key()]
    }

    /// Looks up a value by flat-key string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTokenKey`] if the key is not in the model.
    pub fn get_key(&self, key: &str) -> Result<&str> {
        naming::parse_token(key).map(|token| self.get(token))
    }

    /// Whether `key` is one of the map's flat keys.
    pub fn contains_key(&self, key: &str) -> bool {
        naming::parse_token(key).is_ok()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in flat-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&FlatKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Iterates over the flat keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &FlatKey> {
        self.entries.keys()
    }

    /// Groups the values by category, with prefixes stripped.
    pub fn to_design_tokens(&self) -> DesignTokens {
        let mut grouped = DesignTokens::default();
        for token in Token::all() {
            let value = self.get(token).to_string();
            grouped
                .group_mut(token.category())
                .insert(token.sub_key().into_owned(), value);
        }
        grouped
    }

    /// Renders every token as a CSS custom property inside `selector`, in
    /// category order.
    ///
    /// # Examples
    ///
    /// ```text
    /// :root {
    ///   --clr-neutral-white: oklch(100% 0 0);
    ///   ...
    /// }
    /// ```
    pub fn to_css_custom_properties(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for token in Token::all() {
            let _ = writeln!(css, "  --{}: {};", token.flat_key(), self.get(token));
        }
        css.push_str("}\n");
        css
    }

    /// Serializes the map as a pretty-printed flat JSON object.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A breakpoint's numeric value, ignoring its unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the value has no leading number.
    pub fn breakpoint_em(&self, breakpoint: BreakpointName) -> Result<f64> {
        let token = Token::from(breakpoint);
        parse_leading_number(self.get(token)).ok_or_else(|| {
            Error::invalid_value(
                token.flat_key().to_string(),
                format!("expected a numeric length, found `{}`", self.get(token)),
            )
        })
    }

    /// Whether a viewport of `viewport_em` is at or above `breakpoint`.
    pub fn is_above_breakpoint(&self, breakpoint: BreakpointName, viewport_em: f64) -> Result<bool> {
        Ok(viewport_em >= self.breakpoint_em(breakpoint)?)
    }
}

impl TryFrom<TokenSource> for TokenMap {
    type Error = Error;

    fn try_from(source: TokenSource) -> std::result::Result<Self, Self::Error> {
        bridge::export(&source)
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a FlatKey, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, FlatKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A previously emitted map is read back through the bridge so the
/// closure invariant still holds.
impl<'de> Deserialize<'de> for TokenMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let Entries(raw) = Entries::<String>::deserialize(deserializer)?;
        TokenSource::from_entries(raw)
            .and_then(|source| bridge::export(&source))
            .map_err(serde::de::Error::custom)
    }
}

/// Token values grouped by category, keyed by sub-key.
///
/// This is the shape of the `DesignTokens` aggregate that consuming code
/// imports: `colors["primary-400"]`, `fontWeights["bold"]`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// `<group>-<shade>` → color
    pub colors: BTreeMap<String, String>,
    /// breakpoint name → `em` length
    pub breakpoints: BTreeMap<String, String>,
    /// size step → `rem` length
    pub sizes: BTreeMap<String, String>,
    /// font size key → `rem` length
    pub font_sizes: BTreeMap<String, String>,
    /// weight name → numeric weight
    pub font_weights: BTreeMap<String, String>,
    /// family role → font stack
    pub font_families: BTreeMap<String, String>,
}

impl DesignTokens {
    fn group_mut(&mut self, category: TokenCategory) -> &mut BTreeMap<String, String> {
        match category {
            TokenCategory::Color => &mut self.colors,
            TokenCategory::Breakpoint => &mut self.breakpoints,
            TokenCategory::Size => &mut self.sizes,
            TokenCategory::FontSize => &mut self.font_sizes,
            TokenCategory::FontWeight => &mut self.font_weights,
            TokenCategory::FontFamily => &mut self.font_families,
        }
    }

    /// The group holding `category`'s values.
    pub fn group(&self, category: TokenCategory) -> &BTreeMap<String, String> {
        match category {
            TokenCategory::Color => &self.colors,
            TokenCategory::Breakpoint => &self.breakpoints,
            TokenCategory::Size => &self.sizes,
            TokenCategory::FontSize => &self.font_sizes,
            TokenCategory::FontWeight => &self.font_weights,
            TokenCategory::FontFamily => &self.font_families,
        }
    }
}
