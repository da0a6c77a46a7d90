use anyhow::Result;
use clap::Parser;
use findmatch::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
