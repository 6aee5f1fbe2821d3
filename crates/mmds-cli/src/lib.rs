//! # mmds-cli
//!
//! Build tooling around the design-token bridge:
//! - bridge checks that fail on source drift
//! - token map export as flat JSON, grouped JSON or CSS custom properties
//! - type contract emission (TypeScript, JSON)
//! - `mmds.toml` configuration management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::Cli;
pub use commands::run;
pub use config::MmdsConfig;
pub use error::{Error, Result};
