//! Breakpoint, size and typography sub-key sets.

use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Responsive breakpoint names. Values are `em` lengths.
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
pub enum BreakpointName {
    /// Smallest breakpoint.
    Small,
    /// Medium breakpoint.
    Medium,
    /// Largest breakpoint.
    Large,
}

/// Steps of the spacing/size scale, `0` through `15`. Values are `rem`
/// lengths.
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
#[allow(missing_docs)]
pub enum SizeStep {
    #[strum(to_string = "0")]
    Step0,
    #[strum(to_string = "1")]
    Step1,
    #[strum(to_string = "2")]
    Step2,
    #[strum(to_string = "3")]
    Step3,
    #[strum(to_string = "4")]
    Step4,
    #[strum(to_string = "5")]
    Step5,
    #[strum(to_string = "6")]
    Step6,
    #[strum(to_string = "7")]
    Step7,
    #[strum(to_string = "8")]
    Step8,
    #[strum(to_string = "9")]
    Step9,
    #[strum(to_string = "10")]
    Step10,
    #[strum(to_string = "11")]
    Step11,
    #[strum(to_string = "12")]
    Step12,
    #[strum(to_string = "13")]
    Step13,
    #[strum(to_string = "14")]
    Step14,
    #[strum(to_string = "15")]
    Step15,
}

/// Font size keys, `200` through `900`.
///
/// Values describe the smallest breakpoint; larger breakpoints redefine
/// the matching `--fs-*` custom properties in the stylesheet.
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
#[allow(missing_docs)]
pub enum FontSizeKey {
    #[strum(to_string = "200")]
    Fs200,
    #[strum(to_string = "300")]
    Fs300,
    #[strum(to_string = "400")]
    Fs400,
    #[strum(to_string = "500")]
    Fs500,
    #[strum(to_string = "600")]
    Fs600,
    #[strum(to_string = "700")]
    Fs700,
    #[strum(to_string = "800")]
    Fs800,
    #[strum(to_string = "900")]
    Fs900,
}

/// Semantic font weight names. Values are numeric strings (`"700"`).
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
#[allow(missing_docs)]
pub enum FontWeightName {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

/// Font family roles.
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
pub enum FontFamilyName {
    /// Body text.
    Base,
    /// Headings and highlights.
    Accent,
}

macro_rules! impl_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns the sub-key as it appears in a flat key.
                pub fn as_str(self) -> &'static str {
                    self.into()
                }
            }
        )+
    };
}

impl_as_str!(
    BreakpointName,
    SizeStep,
    FontSizeKey,
    FontWeightName,
    FontFamilyName,
);
