//! Parser for CSS-Modules `:export` blocks.
//!
//! The style preprocessor compiles its token maps into one or more
//!
//! ```css
//! :export {
//!   clr-primary-400: oklch(55.857% 0.1908 256.019);
//!   bp-medium: 45em;
//! }
//! ```
//!
//! blocks. Only those blocks are read; everything else in the stylesheet
//! is ignored. Values are kept verbatim apart from surrounding whitespace.

use crate::error::{Error, Result};

const EXPORT_SELECTOR: &str = ":export";

/// One `name: value` declaration found in an `:export` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub name: String,
    pub value: String,
    /// 1-based line of the declaration name.
    pub line: usize,
}

/// Extracts every declaration from every `:export` block, in source order.
pub(crate) fn parse(input: &str) -> Result<Vec<Declaration>> {
    let text = strip_comments(input)?;
    let mut declarations = Vec::new();
    let mut offset = 0;
    let mut blocks = 0;

    while let Some(found) = text[offset..].find(EXPORT_SELECTOR) {
        let selector_at = offset + found;
        let after_selector = selector_at + EXPORT_SELECTOR.len();
        let rest = &text[after_selector..];
        let open = after_selector + (rest.len() - rest.trim_start().len());

        if !text[open..].starts_with('{') {
            return Err(Error::parse_at(
                line_of(&text, selector_at),
                "expected `{` after :export",
            ));
        }

        let close = scan_block(&text, open, &mut declarations)?;
        blocks += 1;
        offset = close + 1;
    }

    if blocks == 0 {
        return Err(Error::parse("no :export block found"));
    }
    log::debug!(
        "Parsed {} declarations from {blocks} :export block(s)",
        declarations.len()
    );
    Ok(declarations)
}

/// Reads declarations from the block opened at `open` and returns the
/// offset of its closing brace.
fn scan_block(text: &str, open: usize, declarations: &mut Vec<Declaration>) -> Result<usize> {
    let body_start = open + 1;
    let mut decl_start = body_start;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text[body_start..].char_indices() {
        let at = body_start + i;
        match (quote, c) {
            (Some(_), _) if escaped => escaped = false,
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ';') => {
                push_declaration(text, decl_start, at, declarations)?;
                decl_start = at + 1;
            }
            (None, '}') => {
                push_declaration(text, decl_start, at, declarations)?;
                return Ok(at);
            }
            (None, '{') => {
                return Err(Error::parse_at(
                    line_of(text, at),
                    "nested block inside :export",
                ));
            }
            (None, _) => {}
        }
    }

    Err(Error::parse_at(
        line_of(text, open),
        "unterminated :export block",
    ))
}

fn push_declaration(
    text: &str,
    start: usize,
    end: usize,
    declarations: &mut Vec<Declaration>,
) -> Result<()> {
    let segment = &text[start..end];
    let trimmed = segment.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(());
    }
    let line = line_of(text, start + (segment.len() - trimmed.len()));

    let (name, value) = trimmed
        .split_once(':')
        .ok_or_else(|| Error::parse_at(line, "expected `name: value` declaration"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::parse_at(line, "declaration has an empty name"));
    }

    declarations.push(Declaration {
        name: name.to_string(),
        value: value.trim().to_string(),
        line,
    });
    Ok(())
}

/// Blanks out `/* ... */` comments, keeping newlines so line numbers stay
/// accurate. Comment markers inside quoted strings are left alone.
fn strip_comments(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    let mut quote: Option<char> = None;

    while let Some((at, c)) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                out.push(c);
            }
            None if c == '/' && chars.next_if(|&(_, next)| next == '*').is_some() => {
                out.push_str("  ");
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    if c == '*' && chars.next_if(|&(_, next)| next == '/').is_some() {
                        out.push_str("  ");
                        closed = true;
                        break;
                    }
                    out.push(if c == '\n' { '\n' } else { ' ' });
                }
                if !closed {
                    return Err(Error::parse_at(line_of(input, at), "unterminated comment"));
                }
            }
            None => out.push(c),
        }
    }
    Ok(out)
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
