use super::Context;
use crate::find::orchestrator::resolve_default_root;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct LegacyArgs {
    /// Semicolon-separated patterns, e.g. "+:**/*.json;-:**/node_modules/**"
    pub pattern: String,

    /// Directory unrooted patterns are joined onto
    #[arg(short, long)]
    pub root: Option<String>,

    /// Include files (the default when neither kind is requested)
    #[arg(long)]
    pub files: bool,

    /// Include directories
    #[arg(long)]
    pub directories: bool,
}

pub fn execute(args: LegacyArgs, context: &Context<'_>) -> Result<()> {
    let root = match args.root.or(context.settings()?.default_root) {
        Some(root) => root,
        None => resolve_default_root(None)?,
    };

    let found = crate::find::legacy_find_files(&root, &args.pattern, args.files, args.directories)?;
    context.print_paths(&found)
}
