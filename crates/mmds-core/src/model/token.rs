//! The typed token union.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::{
    BreakpointName, ColorToken, FontFamilyName, FontSizeKey, FontWeightName, SizeStep,
    TokenCategory,
};
use crate::error::{Error, Result};
use crate::naming::{FlatKey, SEPARATOR};

/// One token of the category model: a category together with a sub-key
/// that is legal for it.
///
/// Because each variant carries its category's own sub-key type, an
/// invalid pairing cannot be constructed.
///
/// # Examples
///
/// ```
/// use mmds_core::{FontWeightName, Token};
///
/// let token = Token::from(FontWeightName::SemiBold);
/// assert_eq!(token.flat_key().as_str(), "fw-semi-bold");
/// assert_eq!(token.css_var(), "var(--fw-semi-bold)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// `clr-<group>-<shade>`
    Color(ColorToken),
    /// `bp-<name>`
    Breakpoint(BreakpointName),
    /// `size-<step>`
    Size(SizeStep),
    /// `fs-<key>`
    FontSize(FontSizeKey),
    /// `fw-<name>`
    FontWeight(FontWeightName),
    /// `ff-<name>`
    FontFamily(FontFamilyName),
}

impl Token {
    /// The full model closure: every category, every sub-key, in
    /// enumeration order.
    pub fn all() -> impl Iterator<Item = Token> {
        TokenCategory::iter().flat_map(TokenCategory::tokens)
    }

    /// Resolves a (category, sub-key) pair against the model.
    ///
    /// Sub-keys are matched verbatim; there is no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTokenKey`] when the sub-key is not declared
    /// for the category.
    pub fn parse(category: TokenCategory, sub_key: &str) -> Result<Self> {
        let token = match category {
            TokenCategory::Color => ColorToken::parse(sub_key).map(Self::Color),
            TokenCategory::Breakpoint => BreakpointName::from_str(sub_key).ok().map(Self::Breakpoint),
            TokenCategory::Size => SizeStep::from_str(sub_key).ok().map(Self::Size),
            TokenCategory::FontSize => FontSizeKey::from_str(sub_key).ok().map(Self::FontSize),
            TokenCategory::FontWeight => {
                FontWeightName::from_str(sub_key).ok().map(Self::FontWeight)
            }
            TokenCategory::FontFamily => {
                FontFamilyName::from_str(sub_key).ok().map(Self::FontFamily)
            }
        };
        token.ok_or_else(|| {
            Error::unknown_key(format!("{}{SEPARATOR}{sub_key}", category.prefix()))
        })
    }

    /// The category this token belongs to.
    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Color(_) => TokenCategory::Color,
            Self::Breakpoint(_) => TokenCategory::Breakpoint,
            Self::Size(_) => TokenCategory::Size,
            Self::FontSize(_) => TokenCategory::FontSize,
            Self::FontWeight(_) => TokenCategory::FontWeight,
            Self::FontFamily(_) => TokenCategory::FontFamily,
        }
    }

    /// The sub-key, exactly as it appears after the category prefix.
    pub fn sub_key(&self) -> Cow<'static, str> {
        match self {
            Self::Color(color) => Cow::Owned(color.to_string()),
            Self::Breakpoint(name) => Cow::Borrowed(name.as_str()),
            Self::Size(step) => Cow::Borrowed(step.as_str()),
            Self::FontSize(key) => Cow::Borrowed(key.as_str()),
            Self::FontWeight(name) => Cow::Borrowed(name.as_str()),
            Self::FontFamily(name) => Cow::Borrowed(name.as_str()),
        }
    }

    /// The namespaced flat key for this token.
    pub fn flat_key(&self) -> FlatKey {
        FlatKey::from_token(self)
    }

    /// A CSS `var()` reference to the custom property named after the flat
    /// key.
    pub fn css_var(&self) -> String {
        format!("var(--{})", self.flat_key())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}",
            self.category().prefix(),
            self.sub_key()
        )
    }
}

impl From<ColorToken> for Token {
    fn from(color: ColorToken) -> Self {
        Self::Color(color)
    }
}

impl From<BreakpointName> for Token {
    fn from(name: BreakpointName) -> Self {
        Self::Breakpoint(name)
    }
}

impl From<SizeStep> for Token {
    fn from(step: SizeStep) -> Self {
        Self::Size(step)
    }
}

impl From<FontSizeKey> for Token {
    fn from(key: FontSizeKey) -> Self {
        Self::FontSize(key)
    }
}

impl From<FontWeightName> for Token {
    fn from(name: FontWeightName) -> Self {
        Self::FontWeight(name)
    }
}

impl From<FontFamilyName> for Token {
    fn from(name: FontFamilyName) -> Self {
        Self::FontFamily(name)
    }
}
