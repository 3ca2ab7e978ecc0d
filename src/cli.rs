//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build helpers for the weave site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; relative paths in the config resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: weave.toml)
    #[arg(short = 'C', long, default_value = "weave.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy site verification files into the built docs site
    PostBuild {
        /// Built site directory
        #[arg(short, long)]
        site_dir: Option<PathBuf>,

        /// Docs source directory; verification files live in its parent
        #[arg(short, long)]
        docs_dir: Option<PathBuf>,
    },

    /// Clone heroicons and pack the solid and outline sets into one SVG sprite
    PackIcons {
        /// Git repository to clone icons from
        #[arg(long)]
        repo: Option<String>,

        /// Directory the sprite is written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sprite file name
        #[arg(short, long)]
        name: Option<String>,
    },
}

impl Cli {
    pub const fn is_post_build(&self) -> bool {
        matches!(self.command, Commands::PostBuild { .. })
    }
    pub const fn is_pack_icons(&self) -> bool {
        matches!(self.command, Commands::PackIcons { .. })
    }
}
