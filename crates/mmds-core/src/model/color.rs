//! Color groups and their shade scales.

use std::fmt;
use std::str::FromStr;

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The standard shade scale shared by every color group.
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
pub enum ShadeKey {
    /// Lightest shade.
    #[strum(to_string = "100")]
    S100,
    /// Shade 200.
    #[strum(to_string = "200")]
    S200,
    /// Shade 300.
    #[strum(to_string = "300")]
    S300,
    /// Shade 400.
    #[strum(to_string = "400")]
    S400,
    /// Darkest shade.
    #[strum(to_string = "500")]
    S500,
}

impl ShadeKey {
    /// Returns the shade as it appears in a flat key.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Shades of the neutral group: the standard scale bracketed by `white`
/// and `black`.
///
/// The boundary shades exist only here; no other group can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NeutralShadeKey {
    /// Pure white, before the scale.
    White,
    /// A shade on the standard scale.
    Scale(ShadeKey),
    /// Pure black, after the scale.
    Black,
}

impl NeutralShadeKey {
    /// Number of neutral shades (scale plus the two boundaries).
    pub const COUNT: usize = ShadeKey::COUNT + 2;

    /// All neutral shades in order: `white`, `100`…`500`, `black`.
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::White)
            .chain(ShadeKey::iter().map(Self::Scale))
            .chain(std::iter::once(Self::Black))
            .collect()
    }

    /// Returns the shade as it appears in a flat key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Scale(shade) => shade.as_str(),
            Self::Black => "black",
        }
    }
}

impl From<ShadeKey> for NeutralShadeKey {
    fn from(shade: ShadeKey) -> Self {
        Self::Scale(shade)
    }
}

impl fmt::Display for NeutralShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeutralShadeKey {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            other => ShadeKey::from_str(other).map(Self::Scale),
        }
    }
}

/// Semantic color group names.
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
pub enum ColorGroupName {
    /// Greys, plus the `white`/`black` boundaries.
    Neutral,
    /// Primary brand color.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Accent color.
    Accent,
    /// Positive feedback.
    Success,
    /// Negative feedback.
    Error,
}

impl ColorGroupName {
    /// Returns the group name as it appears in a flat key.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every color token of this group, in shade order.
    pub fn tokens(self) -> Vec<ColorToken> {
        match self {
            Self::Neutral => NeutralShadeKey::all()
                .into_iter()
                .map(ColorToken::Neutral)
                .collect(),
            group => ShadeKey::iter()
                .map(|shade| ColorToken::scaled(group, shade))
                .collect(),
        }
    }
}

/// A single palette entry: a color group paired with one of its shades.
///
/// Only the neutral group carries [`NeutralShadeKey`], so `primary-white`
/// has no representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorToken {
    /// `neutral-<white|100…500|black>`
    Neutral(NeutralShadeKey),
    /// `primary-<100…500>`
    Primary(ShadeKey),
    /// `secondary-<100…500>`
    Secondary(ShadeKey),
    /// `accent-<100…500>`
    Accent(ShadeKey),
    /// `success-<100…500>`
    Success(ShadeKey),
    /// `error-<100…500>`
    Error(ShadeKey),
}

impl ColorToken {
    /// Pairs a group with a standard-scale shade.
    ///
    /// # Examples
    ///
    /// ```
    /// use mmds_core::{ColorGroupName, ColorToken, ShadeKey};
    ///
    /// let token = ColorToken::scaled(ColorGroupName::Primary, ShadeKey::S400);
    /// assert_eq!(token.to_string(), "primary-400");
    /// ```
    pub fn scaled(group: ColorGroupName, shade: ShadeKey) -> Self {
        match group {
            ColorGroupName::Neutral => Self::Neutral(NeutralShadeKey::Scale(shade)),
            ColorGroupName::Primary => Self::Primary(shade),
            ColorGroupName::Secondary => Self::Secondary(shade),
            ColorGroupName::Accent => Self::Accent(shade),
            ColorGroupName::Success => Self::Success(shade),
            ColorGroupName::Error => Self::Error(shade),
        }
    }

    /// Every color token, group by group.
    pub fn all() -> Vec<Self> {
        ColorGroupName::iter()
            .flat_map(ColorGroupName::tokens)
            .collect()
    }

    /// The group this token belongs to.
    pub fn group(self) -> ColorGroupName {
        match self {
            Self::Neutral(_) => ColorGroupName::Neutral,
            Self::Primary(_) => ColorGroupName::Primary,
            Self::Secondary(_) => ColorGroupName::Secondary,
            Self::Accent(_) => ColorGroupName::Accent,
            Self::Success(_) => ColorGroupName::Success,
            Self::Error(_) => ColorGroupName::Error,
        }
    }

    /// The shade slot as it appears in a flat key (`400`, `white`, ...).
    pub fn shade(self) -> &'static str {
        match self {
            Self::Neutral(shade) => shade.as_str(),
            Self::Primary(shade)
            | Self::Secondary(shade)
            | Self::Accent(shade)
            | Self::Success(shade)
            | Self::Error(shade) => shade.as_str(),
        }
    }

    /// Parses a `<group>-<shade>` sub-key.
    pub fn parse(sub_key: &str) -> Option<Self> {
        let (group, shade) = sub_key.split_once('-')?;
        match ColorGroupName::from_str(group).ok()? {
            ColorGroupName::Neutral => NeutralShadeKey::from_str(shade).ok().map(Self::Neutral),
            group => ShadeKey::from_str(shade)
                .ok()
                .map(|shade| Self::scaled(group, shade)),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.group().as_str(), self.shade())
    }
}
