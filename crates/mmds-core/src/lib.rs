#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! MM Design System core
//!
//! Category model, flat-key naming, token bridge and type contract.

pub mod bridge;
pub mod contract;
pub mod error;
pub mod model;
pub mod naming;
pub mod source;
pub mod token_map;
pub mod units;

// Re-exports for convenience
pub use contract::TypeContract;
pub use error::{Error, Result};
pub use model::{
    BreakpointName, ColorGroupName, ColorToken, FontFamilyName, FontSizeKey, FontWeightName,
    NeutralShadeKey, ShadeKey, SizeStep, Token, TokenCategory,
};
pub use naming::FlatKey;
pub use source::{SourceFormat, TokenSource};
pub use token_map::{DesignTokens, TokenMap};
