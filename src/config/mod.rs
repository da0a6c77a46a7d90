//! Layered configuration for findmatch
//!
//! Embedded defaults, then user and repository files in TOML, JSON or YAML,
//! then `FINDMATCH_` environment variables.

pub mod core;

pub use self::core::{ConfigFormat, FindMatchConfig, Settings};
