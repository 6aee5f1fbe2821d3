//! Handlers for the token commands.
//!
//! Rendering is kept separate from writing so every artifact can be
//! checked without touching stdout.

use std::path::{Path, PathBuf};

use mmds_core::contract::{CATEGORIES, typescript};
use mmds_core::{TokenCategory, TokenMap, TypeContract, bridge};

use crate::cli::{Cli, Command, ContractLang, ExportFormat, SourceArgs};
use crate::config::MmdsConfig;
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};

/// Artifacts written by `mmds build`, relative to the output directory.
pub const BUILD_ARTIFACTS: &[(&str, Artifact)] = &[
    ("tokens.json", Artifact::Export(ExportFormat::Json)),
    ("design-tokens.json", Artifact::Export(ExportFormat::Grouped)),
    ("tokens.css", Artifact::Export(ExportFormat::Css)),
    ("tokens.d.ts", Artifact::Contract(ContractLang::Ts)),
    ("contract.json", Artifact::Contract(ContractLang::Json)),
];

/// One generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// A rendering of the token map
    Export(ExportFormat),
    /// A rendering of the type contract
    Contract(ContractLang),
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => handle_config_command(config_path, action),
        Command::Keys { category } => {
            for key in declared_keys(category) {
                println!("{key}");
            }
            Ok(())
        }
        Command::Contract { lang, out } => write_output(out.as_deref(), &render_contract(lang)?),
        Command::Check(source) => cmd_check(&MmdsConfig::load(config_path)?, &source).map(|_| ()),
        Command::Export { source, shape, out } => {
            cmd_export(&MmdsConfig::load(config_path)?, &source, shape, out.as_deref())
        }
        Command::Build { source, out_dir } => {
            let config = MmdsConfig::load(config_path)?;
            cmd_build(&config, &source, out_dir.as_deref()).map(|_| ())
        }
    }
}

/// Bridges the configured source into a token map.
///
/// Command-line arguments override the `[source]` section.
pub fn load_tokens(config: &MmdsConfig, args: &SourceArgs) -> Result<TokenMap> {
    let path = args.source.as_deref().unwrap_or(&config.source.path);
    let format = args.format.or(config.source.format);
    tracing::info!(source = %path.display(), "Bridging design tokens");

    // Per-key drift records come from the core's `log` output.
    Ok(bridge::export_file(path, format)?)
}

/// `mmds check`: bridges the source and reports the token count.
pub fn cmd_check(config: &MmdsConfig, args: &SourceArgs) -> Result<usize> {
    let map = load_tokens(config, args)?;
    println!(
        "{} tokens across {} categories, no drift",
        map.len(),
        CATEGORIES.len()
    );
    Ok(map.len())
}

/// `mmds export`: renders the token map in the requested shape.
pub fn cmd_export(
    config: &MmdsConfig,
    args: &SourceArgs,
    shape: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let map = load_tokens(config, args)?;
    write_output(out, &render_export(&map, shape, &config.output.css_selector)?)
}

/// `mmds build`: writes every artifact into the output directory and
/// returns the written paths.
pub fn cmd_build(
    config: &MmdsConfig,
    args: &SourceArgs,
    out_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let map = load_tokens(config, args)?;
    let dir = out_dir.unwrap_or(&config.output.dir);

    let mut written = Vec::with_capacity(BUILD_ARTIFACTS.len());
    for (name, artifact) in BUILD_ARTIFACTS {
        let content = match artifact {
            Artifact::Export(format) => {
                render_export(&map, *format, &config.output.css_selector)?
            }
            Artifact::Contract(lang) => render_contract(*lang)?,
        };
        let path = dir.join(name);
        write_file(&path, &content)?;
        written.push(path);
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "Build complete");
    Ok(written)
}

/// Renders the token map as flat JSON, grouped JSON or CSS.
pub fn render_export(map: &TokenMap, format: ExportFormat, css_selector: &str) -> Result<String> {
    let mut text = match format {
        ExportFormat::Json => map.to_json_pretty()?,
        ExportFormat::Grouped => serde_json::to_string_pretty(&map.to_design_tokens())?,
        ExportFormat::Css => return Ok(map.to_css_custom_properties(css_selector)),
    };
    text.push('\n');
    Ok(text)
}

/// Renders the static type contract.
pub fn render_contract(lang: ContractLang) -> Result<String> {
    match lang {
        ContractLang::Ts => Ok(typescript::render()),
        ContractLang::Json => {
            let mut text = serde_json::to_string_pretty(&TypeContract::describe())?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Declared flat keys, optionally limited to one category.
pub fn declared_keys(category: Option<TokenCategory>) -> &'static [&'static str] {
    match category {
        Some(category) => TypeContract::keys(category),
        None => TypeContract::all(),
    }
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => write_file(path, content),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io_with_path(e, path))?;
    tracing::debug!(path = %path.display(), "Wrote artifact");
    Ok(())
}
