//! Parsing and validation of `portico.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`ProjectConfig`] describing the foreign compiler
//! command line and cache behavior.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
