//! The token category model.
//!
//! Every category and every legal sub-key is a closed enumeration, so
//! adding a token is a compiler-checked change rather than a new string.
//!
//! # Categories
//!
//! | Category     | Prefix | Sub-keys                                    |
//! |--------------|--------|---------------------------------------------|
//! | Color        | `clr`  | [`ColorToken`] (`primary-400`, `neutral-white`) |
//! | Breakpoint   | `bp`   | [`BreakpointName`]                          |
//! | Size         | `size` | [`SizeStep`]                                |
//! | FontSize     | `fs`   | [`FontSizeKey`]                             |
//! | FontWeight   | `fw`   | [`FontWeightName`]                          |
//! | FontFamily   | `ff`   | [`FontFamilyName`]                          |

mod color;
mod proptests;
mod scales;
mod token;

pub use color::{ColorGroupName, ColorToken, NeutralShadeKey, ShadeKey};
pub use scales::{BreakpointName, FontFamilyName, FontSizeKey, FontWeightName, SizeStep};
pub use token::Token;

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A category of design tokens.
///
/// Each category owns a fixed prefix; prefixes never collide and never
/// contain the flat-key separator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenCategory {
    /// Palette colors.
    Color,
    /// Responsive breakpoints.
    Breakpoint,
    /// Spacing/size scale.
    Size,
    /// Font sizes.
    FontSize,
    /// Font weights.
    FontWeight,
    /// Font families.
    FontFamily,
}

impl TokenCategory {
    /// The flat-key prefix for this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Color => "clr",
            Self::Breakpoint => "bp",
            Self::Size => "size",
            Self::FontSize => "fs",
            Self::FontWeight => "fw",
            Self::FontFamily => "ff",
        }
    }

    /// The category name (`color`, `font-size`, ...).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks a category up by its flat-key prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use mmds_core::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::from_prefix("fw"), Some(TokenCategory::FontWeight));
    /// assert_eq!(TokenCategory::from_prefix("color"), None);
    /// ```
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::iter().find(|category| category.prefix() == prefix)
    }

    /// Every token of this category, in enumeration order.
    pub fn tokens(self) -> Vec<Token> {
        match self {
            Self::Color => ColorToken::all().into_iter().map(Token::Color).collect(),
            Self::Breakpoint => BreakpointName::iter().map(Token::Breakpoint).collect(),
            Self::Size => SizeStep::iter().map(Token::Size).collect(),
            Self::FontSize => FontSizeKey::iter().map(Token::FontSize).collect(),
            Self::FontWeight => FontWeightName::iter().map(Token::FontWeight).collect(),
            Self::FontFamily => FontFamilyName::iter().map(Token::FontFamily).collect(),
        }
    }

    /// Number of tokens in this category.
    pub fn token_count(self) -> usize {
        match self {
            Self::Color => {
                NeutralShadeKey::COUNT + (ColorGroupName::COUNT - 1) * ShadeKey::COUNT
            }
            Self::Breakpoint => BreakpointName::COUNT,
            Self::Size => SizeStep::COUNT,
            Self::FontSize => FontSizeKey::COUNT,
            Self::FontWeight => FontWeightName::COUNT,
            Self::FontFamily => FontFamilyName::COUNT,
        }
    }

    /// Total number of tokens across every category.
    pub fn total_token_count() -> usize {
        Self::iter().map(Self::token_count).sum()
    }
}
