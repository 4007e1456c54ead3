//! Configuration types
//!
//! Board-agnostic configuration, loaded from a small TOML file.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
