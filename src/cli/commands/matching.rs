use super::{Context, MatchFlags};
use anyhow::{Context as _, Result};
use clap::Args;
use std::io::BufRead;

#[derive(Args)]
pub struct MatchArgs {
    /// Pattern to apply, in order; prefix with ! to exclude
    #[arg(short, long = "pattern", value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Root for unrooted patterns
    #[arg(short, long)]
    pub root: Option<String>,

    /// Candidate paths; read from stdin, one per line, when omitted
    pub paths: Vec<String>,

    #[command(flatten)]
    pub flags: MatchFlags,
}

pub fn execute(args: MatchArgs, context: &Context<'_>) -> Result<()> {
    let options = args.flags.apply(context.settings()?.matching);

    let candidates = if args.paths.is_empty() {
        context.output.verbose("Reading candidate paths from stdin");
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .context("Failed to read candidate paths from stdin")?
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        args.paths
    };

    let matched = crate::find::match_paths(&candidates, &args.patterns, args.root.as_deref(), &options)?;
    context.print_paths(&matched)
}
