//! Command implementations for the findmatch CLI
//!
//! Each command is organized into its own module. Flags shared by several
//! commands live here and are layered over the configured defaults.

use super::{OutputFormat, Output};
use crate::config::{FindMatchConfig, Settings};
use crate::find::{MatchOptions, WalkOptions};
use anyhow::Result;
use clap::Args;

pub mod config;
pub mod find;
pub mod legacy;
pub mod matching;
pub mod walk;

/// Global settings every command receives
pub struct Context<'a> {
    pub custom_config: Option<&'a str>,
    pub format: OutputFormat,
    pub output: &'a Output,
}

impl Context<'_> {
    pub fn settings(&self) -> Result<Settings> {
        FindMatchConfig::load_with_custom_config(self.custom_config)?.settings()
    }

    /// Print result paths to stdout in the selected format
    pub fn print_paths(&self, paths: &[String]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for path in paths {
                    println!("{path}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(paths)?),
        }
        self.output.verbose_summary("❯", "matched paths", paths.len());
        Ok(())
    }
}

/// Walk flags; each one only moves its option away from the default
#[derive(Args, Debug, Clone, Default)]
pub struct WalkFlags {
    /// Do not descend through symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Do not follow the start path when it is itself a symbolic link
    #[arg(long)]
    pub no_follow_root: bool,

    /// List dangling symbolic links instead of failing
    #[arg(long)]
    pub allow_broken_links: bool,

    /// Warn and continue when an entry disappears during the walk
    #[arg(long)]
    pub skip_missing: bool,
}

impl WalkFlags {
    pub fn apply(&self, mut options: WalkOptions) -> WalkOptions {
        if self.no_follow_links {
            options.follow_symbolic_links = false;
        }
        if self.no_follow_root {
            options.follow_specified_symbolic_link = false;
        }
        if self.allow_broken_links {
            options.allow_broken_symbolic_links = true;
        }
        if self.skip_missing {
            options.skip_missing_files = true;
        }
        options
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct MatchFlags {
    /// Match case-insensitively
    #[arg(long, conflicts_with = "case_sensitive")]
    pub nocase: bool,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Expand {a,b} and {1..3} brace groups
    #[arg(long)]
    pub braces: bool,

    /// Treat ** as a plain *
    #[arg(long)]
    pub no_globstar: bool,

    /// Keep wildcards from matching names that start with a dot
    #[arg(long)]
    pub no_dot: bool,

    /// Match slash-free patterns against the file name only
    #[arg(long)]
    pub match_base: bool,

    /// Do not treat a leading # as a comment
    #[arg(long)]
    pub no_comment: bool,

    /// Do not treat a leading ! as negation
    #[arg(long)]
    pub no_negate: bool,

    /// Swap the meaning of ! between include and exclude
    #[arg(long)]
    pub flip_negate: bool,
}

impl MatchFlags {
    pub fn apply(&self, mut options: MatchOptions) -> MatchOptions {
        if self.nocase {
            options.nocase = true;
        }
        if self.case_sensitive {
            options.nocase = false;
        }
        if self.braces {
            options.nobrace = false;
        }
        if self.no_globstar {
            options.noglobstar = true;
        }
        if self.no_dot {
            options.dot = false;
        }
        if self.match_base {
            options.match_base = true;
        }
        if self.no_comment {
            options.nocomment = true;
        }
        if self.no_negate {
            options.nonegate = true;
        }
        if self.flip_negate {
            options.flip_negate = true;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_flags_override_configured_options() {
        let flags = WalkFlags {
            no_follow_links: true,
            skip_missing: true,
            ..WalkFlags::default()
        };
        let options = flags.apply(WalkOptions::default());
        assert!(!options.follow_symbolic_links);
        assert!(options.follow_specified_symbolic_link);
        assert!(options.skip_missing_files);
    }

    #[test]
    fn test_unset_flags_keep_configured_options() {
        let configured = MatchOptions {
            match_base: true,
            nocase: true,
            ..MatchOptions::default()
        };
        assert_eq!(MatchFlags::default().apply(configured.clone()), configured);
    }

    #[test]
    fn test_match_flags() {
        let flags = MatchFlags {
            case_sensitive: true,
            braces: true,
            no_dot: true,
            ..MatchFlags::default()
        };
        let options = flags.apply(MatchOptions {
            nocase: true,
            ..MatchOptions::default()
        });
        assert!(!options.nocase);
        assert!(!options.nobrace);
        assert!(!options.dot);
    }
}
