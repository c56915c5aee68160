//! Parsing and validation of `lbv.toml` analysis configuration.
//!
//! Every field has a default matching the two-line pixel buffer testbench,
//! so an empty file (or no file) yields a usable [`AnalysisConfig`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
