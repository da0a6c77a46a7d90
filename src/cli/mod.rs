//! Command-line interface for findmatch
//!
//! Thin layer over [`crate::find`]: each subcommand merges configuration with
//! its flags, calls one engine operation and prints the resulting paths.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

pub mod commands;
mod output;

pub use output::Output;

/// findmatch - find files with ordered include/exclude glob patterns
#[derive(Parser)]
#[command(name = "findmatch", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for result paths
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    Text,
    /// A JSON array of paths
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List every path below a directory
    Walk(commands::walk::WalkArgs),
    /// Filter a list of paths through glob patterns
    Match(commands::matching::MatchArgs),
    /// Find paths on disk selected by glob patterns
    Find(commands::find::FindArgs),
    /// Find paths with a legacy "+:include;-:exclude" pattern string
    Legacy(commands::legacy::LegacyArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let context = commands::Context {
            custom_config: self.config.as_deref(),
            format: self.format,
            output: &output,
        };

        match self.command {
            Some(Commands::Walk(args)) => commands::walk::execute(args, &context),
            Some(Commands::Match(args)) => commands::matching::execute(args, &context),
            Some(Commands::Find(args)) => commands::find::execute(args, &context),
            Some(Commands::Legacy(args)) => commands::legacy::execute(args, &context),
            Some(Commands::Config(args)) => commands::config::execute(args, &context),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins; otherwise map -v counts, keeping globset quiet below -vvv
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
