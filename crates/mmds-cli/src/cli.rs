//! Command-line surface of the `mmds` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mmds_core::{SourceFormat, TokenCategory};

/// MM Design System token bridge
#[derive(Parser, Debug)]
#[command(name = "mmds")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MMDS_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bridge the token source and report drift
    Check(SourceArgs),

    /// Emit the token map
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output shape
        #[arg(id = "shape", long = "as", value_enum, default_value_t = ExportFormat::Json)]
        shape: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write every artifact into the output directory
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Override `[output] dir`
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Emit the static type contract
    Contract {
        /// Contract language
        #[arg(long, value_enum, default_value_t = ContractLang::Ts)]
        lang: ContractLang,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List declared flat keys
    Keys {
        /// Only this category (`color`, `font-size`, ...)
        #[arg(long, value_parser = parse_category)]
        category: Option<TokenCategory>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where to read tokens from, overriding `[source]`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Token source file
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Source format (`json` or `css`); inferred from the extension when omitted
    #[arg(long, value_parser = parse_format)]
    pub format: Option<SourceFormat>,
}

/// `mmds config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `output.dir`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to ./mmds.toml)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Shapes `mmds export` can emit.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Flat `key → value` JSON object
    Json,
    /// Values grouped by category
    Grouped,
    /// CSS custom properties
    Css,
}

/// Languages `mmds contract` can emit.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractLang {
    /// TypeScript declarations
    Ts,
    /// JSON description of the key space
    Json,
}

fn parse_format(s: &str) -> Result<SourceFormat, String> {
    s.parse()
        .map_err(|_| format!("unknown source format `{s}` (expected json or css)"))
}

fn parse_category(s: &str) -> Result<TokenCategory, String> {
    s.parse().map_err(|_| format!("unknown token category `{s}`"))
}
