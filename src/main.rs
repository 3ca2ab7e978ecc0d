//! weave-tools - build helpers for the weave site.

mod cli;
mod config;
mod hook;
mod icons;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::WeaveConfig;
use hook::{CopyOutcome, on_post_build};
use icons::pack_icons;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WeaveConfig::load(&cli)?;

    match &cli.command {
        Commands::PostBuild { .. } => post_build(&config),
        Commands::PackIcons { .. } => {
            let report = pack_icons(&config.icons)?;
            log!("icons"; "packed {} icons into {}", report.total(), report.sprite.display());
            Ok(())
        }
    }
}

/// Run the docs post-build hook and summarize what was copied.
fn post_build(config: &WeaveConfig) -> Result<()> {
    let outcomes = on_post_build(&config.hook)?;
    let copied = outcomes
        .iter()
        .filter(|o| matches!(o, CopyOutcome::Copied { .. }))
        .count();

    log!("hook"; "{copied} of {} file(s) copied into {}", outcomes.len(), config.hook.site_dir.display());
    Ok(())
}
