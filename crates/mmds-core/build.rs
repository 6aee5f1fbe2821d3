//! Generates the static type contract tables from `contract/categories.toml`.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

const MANIFEST: &str = "contract/categories.toml";
const SEPARATOR: char = '-';

#[derive(Deserialize)]
struct Manifest {
    category: Vec<Category>,
}

#[derive(Deserialize)]
struct Category {
    name: String,
    prefix: String,
    sub_keys: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={MANIFEST}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let text = fs::read_to_string(manifest_dir.join(MANIFEST))?;
    let manifest: Manifest = toml::from_str(&text)?;
    validate(&manifest)?;

    let out = PathBuf::from(env::var("OUT_DIR")?).join("contract_tables.rs");
    fs::write(out, render(&manifest))?;
    Ok(())
}

fn validate(manifest: &Manifest) -> Result<(), String> {
    if manifest.category.is_empty() {
        return Err(format!("{MANIFEST}: no categories declared"));
    }

    let mut names = HashSet::new();
    let mut prefixes = HashSet::new();
    for category in &manifest.category {
        if !names.insert(category.name.as_str()) {
            return Err(format!("{MANIFEST}: duplicate category `{}`", category.name));
        }
        if category.prefix.is_empty() || category.prefix.contains(SEPARATOR) {
            return Err(format!(
                "{MANIFEST}: prefix `{}` of `{}` must be non-empty and free of `{SEPARATOR}`",
                category.prefix, category.name
            ));
        }
        if !prefixes.insert(category.prefix.as_str()) {
            return Err(format!("{MANIFEST}: prefix `{}` used twice", category.prefix));
        }
        if category.sub_keys.is_empty() {
            return Err(format!("{MANIFEST}: `{}` declares no sub-keys", category.name));
        }

        let mut seen = HashSet::new();
        for sub_key in &category.sub_keys {
            let malformed = sub_key.is_empty()
                || sub_key
                    .chars()
                    .any(|c| c.is_whitespace() || c == '"' || c == '\\');
            if malformed {
                return Err(format!(
                    "{MANIFEST}: `{}` has malformed sub-key {sub_key:?}",
                    category.name
                ));
            }
            if !seen.insert(sub_key.as_str()) {
                return Err(format!(
                    "{MANIFEST}: `{}` declares `{sub_key}` twice",
                    category.name
                ));
            }
        }
    }
    Ok(())
}

fn render(manifest: &Manifest) -> String {
    let mut out = format!("// @generated by build.rs from {MANIFEST}. Do not edit.\n\n");

    for category in &manifest.category {
        let _ = writeln!(out, "/// Flat keys of the `{}` category.", category.name);
        let _ = writeln!(out, "pub const {}: &[&str] = &[", const_name(&category.name));
        for sub_key in &category.sub_keys {
            let _ = writeln!(out, "    \"{}{SEPARATOR}{sub_key}\",", category.prefix);
        }
        out.push_str("];\n\n");
    }

    out.push_str("/// Every declared flat key, category by category.\n");
    out.push_str("pub const FLAT_KEYS: &[&str] = &[\n");
    for category in &manifest.category {
        for sub_key in &category.sub_keys {
            let _ = writeln!(out, "    \"{}{SEPARATOR}{sub_key}\",", category.prefix);
        }
    }
    out.push_str("];\n\n");

    out.push_str("/// `(name, prefix, flat keys)` for every category, in declaration order.\n");
    out.push_str("pub const CATEGORIES: &[(&str, &str, &[&str])] = &[\n");
    for category in &manifest.category {
        let _ = writeln!(
            out,
            "    (\"{}\", \"{}\", {}),",
            category.name,
            category.prefix,
            const_name(&category.name)
        );
    }
    out.push_str("];\n");

    out
}

fn const_name(category: &str) -> String {
    format!("{}_KEYS", category.to_uppercase().replace('-', "_"))
}
