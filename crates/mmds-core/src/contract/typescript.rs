//! TypeScript rendering of the type contract.
//!
//! The output is a `.d.ts` module that consuming code imports instead of
//! hand-maintaining key unions. Sub-key unions come straight from the
//! category model; composite keys are template literal types, so the
//! TypeScript compiler enforces the same closure as the Rust model.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::model::{
    BreakpointName, ColorGroupName, FontFamilyName, FontSizeKey, FontWeightName, NeutralShadeKey,
    ShadeKey, SizeStep, TokenCategory,
};
use crate::naming::SEPARATOR;

const HEADER: &str = "// @generated by mmds. Do not edit.\n";

/// Renders the contract as a TypeScript declaration module.
///
/// # Examples
///
/// ```
/// let ts = mmds_core::contract::typescript::render();
/// assert!(ts.contains("export type TokenMap = Readonly<Record<FlatKey, string>>;"));
/// ```
pub fn render() -> String {
    let mut out = String::from(HEADER);

    literal_union(
        &mut out,
        "Shade scale shared by every color group.",
        "ShadeKey",
        ShadeKey::iter().map(ShadeKey::as_str),
    );

    let _ = writeln!(
        out,
        "\n/** Neutral shades: the standard scale bracketed by white and black. */"
    );
    let _ = writeln!(
        out,
        "export type NeutralShadeKey = '{}' | ShadeKey | '{}';",
        NeutralShadeKey::White.as_str(),
        NeutralShadeKey::Black.as_str()
    );

    literal_union(
        &mut out,
        "Color groups of the palette.",
        "ColorGroupName",
        ColorGroupName::iter().map(ColorGroupName::as_str),
    );

    let color_arms = ColorGroupName::iter().map(|group| {
        let shade = match group {
            ColorGroupName::Neutral => "NeutralShadeKey",
            _ => "ShadeKey",
        };
        format!("`{}{SEPARATOR}${{{shade}}}`", group.as_str())
    });
    union(
        &mut out,
        "A palette entry, `<group>-<shade>`.",
        "ColorToken",
        color_arms,
    );

    literal_union(
        &mut out,
        "Responsive breakpoints.",
        "BreakpointName",
        BreakpointName::iter().map(<&'static str>::from),
    );
    literal_union(
        &mut out,
        "Steps of the spacing/size scale.",
        "SizeStep",
        SizeStep::iter().map(<&'static str>::from),
    );
    literal_union(
        &mut out,
        "Font size keys.",
        "FontSizeKey",
        FontSizeKey::iter().map(<&'static str>::from),
    );
    literal_union(
        &mut out,
        "Font weight names.",
        "FontWeightName",
        FontWeightName::iter().map(<&'static str>::from),
    );
    literal_union(
        &mut out,
        "Font family roles.",
        "FontFamilyName",
        FontFamilyName::iter().map(<&'static str>::from),
    );

    let key_arms = TokenCategory::iter().map(|category| {
        format!(
            "`{}{SEPARATOR}${{{}}}`",
            category.prefix(),
            sub_key_type(category)
        )
    });
    union(
        &mut out,
        "Every flat key the token bridge exports.",
        "FlatKey",
        key_arms,
    );

    out.push_str("\n/** The bridge's flat `key → value` map. */\n");
    out.push_str("export type TokenMap = Readonly<Record<FlatKey, string>>;\n");

    out.push_str("\n/** Token values grouped by category. */\n");
    out.push_str("export interface DesignTokens {\n");
    for category in TokenCategory::iter() {
        let _ = writeln!(
            out,
            "  readonly {}: Readonly<Record<{}, string>>;",
            group_field(category),
            sub_key_type(category)
        );
    }
    out.push_str("}\n");

    out
}

/// TypeScript name of a category's sub-key union.
fn sub_key_type(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => "ColorToken",
        TokenCategory::Breakpoint => "BreakpointName",
        TokenCategory::Size => "SizeStep",
        TokenCategory::FontSize => "FontSizeKey",
        TokenCategory::FontWeight => "FontWeightName",
        TokenCategory::FontFamily => "FontFamilyName",
    }
}

// Must match the serde names of `DesignTokens`.
fn group_field(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => "colors",
        TokenCategory::Breakpoint => "breakpoints",
        TokenCategory::Size => "sizes",
        TokenCategory::FontSize => "fontSizes",
        TokenCategory::FontWeight => "fontWeights",
        TokenCategory::FontFamily => "fontFamilies",
    }
}

fn literal_union<'a>(
    out: &mut String,
    doc: &str,
    name: &str,
    members: impl Iterator<Item = &'a str>,
) {
    union(out, doc, name, members.map(|m| format!("'{m}'")));
}

fn union(out: &mut String, doc: &str, name: &str, arms: impl Iterator<Item = String>) {
    let _ = writeln!(out, "\n/** {doc} */");
    let _ = writeln!(out, "export type {name} =");
    for arm in arms {
        let _ = writeln!(out, "  | {arm}");
    }
    // Replace the trailing newline with the terminator.
    out.pop();
    out.push_str(";\n");
}
