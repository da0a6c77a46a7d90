//! # findmatch - file discovery and glob matching
//!
//! Walks directory trees without recursion limits or symlink cycles, and
//! selects paths with ordered include/exclude glob patterns.
//!
//! ## Features
//!
//! - **Symlink-safe walks**: cycle detection on canonical paths, optional
//!   tolerance for dangling links and entries that vanish mid-walk
//! - **Ordered patterns**: `!` excludes, `#` comments, brace expansion,
//!   `**` globstar and basename matching
//! - **Planned searches**: fully literal patterns cost a single stat; others
//!   walk only the deepest literal directory
//! - **Legacy dialect**: `+:include;-:exclude` pattern strings
//!
//! ## Quick Start
//!
//! ```no_run
//! use findmatch::find::{self, MatchOptions, WalkOptions};
//!
//! let patterns = vec!["src/**/*.rs".to_string(), "!**/tests/**".to_string()];
//! let found = find::find_match(Some("/my/project"), &patterns, &WalkOptions::default(), &MatchOptions::default())?;
//! # Ok::<(), findmatch::FindError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod find;

pub use cli::{Cli, Output};
pub use config::FindMatchConfig;
pub use error::{FindError, Result};
pub use find::Finder;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
