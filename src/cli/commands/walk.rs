use super::{Context, WalkFlags};
use anyhow::{Context as _, Result};
use clap::Args;

#[derive(Args)]
pub struct WalkArgs {
    /// Directory (or file) to start from
    #[arg(default_value = ".")]
    pub root: String,

    #[command(flatten)]
    pub flags: WalkFlags,
}

pub fn execute(args: WalkArgs, context: &Context<'_>) -> Result<()> {
    let options = args.flags.apply(context.settings()?.walk);
    let paths = crate::find::walk(&args.root, &options).with_context(|| format!("Failed to walk '{}'", args.root))?;
    if paths.is_empty() {
        context.output.warning(&format!("Nothing found at '{}'", args.root));
    }
    context.print_paths(&paths)
}
