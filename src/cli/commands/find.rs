use super::{Context, MatchFlags, WalkFlags};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct FindArgs {
    /// Patterns applied in order; prefix with ! to exclude
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Root for unrooted patterns [default: configured root, then
    /// $SYSTEM_DEFAULTWORKINGDIRECTORY, then the working directory]
    #[arg(short, long)]
    pub root: Option<String>,

    #[command(flatten)]
    pub walk: WalkFlags,

    #[command(flatten)]
    pub matching: MatchFlags,
}

pub fn execute(args: FindArgs, context: &Context<'_>) -> Result<()> {
    let settings = context.settings()?;
    let walk_options = args.walk.apply(settings.walk);
    let match_options = args.matching.apply(settings.matching);
    let root = args.root.or(settings.default_root);

    let found = crate::find::find_match(root.as_deref(), &args.patterns, &walk_options, &match_options)?;
    if found.is_empty() {
        context.output.warning("No paths matched");
    }
    context.print_paths(&found)
}
