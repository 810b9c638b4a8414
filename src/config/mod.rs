//! Configuration model for sst-report.
//!
//! This module defines the Config struct loaded from an optional YAML file.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod defaults;
mod model;
mod operations;


// Re-export public API
pub use model::Config;
