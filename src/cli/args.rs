//! CLI argument definitions using clap.
//!
//! ```text
//! sol-env [PATH] --env <NAME> [--silent] [--verbose] [--dry-run] [--ext <EXT>]... [--delimiter <DELIM>]
//! sol-env init
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::delimiter::CommentDelimiter;
use crate::report::Verbosity;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Switch between environments in Solidity and other languages.",
    long_about = None,
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub switch: SwitchArgs,
}

/// Arguments of the default (switch) command.
#[derive(Debug, Clone, Args)]
pub struct SwitchArgs {
    /// A file, or the root of a directory containing a `contracts` (immediate) subdirectory.
    /// A directory named `init` must be written as `./init`
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Environment to switch to
    #[arg(long, env = "SOL_ENV", required = true)]
    pub env: Option<String>,

    /// Don't print anything
    #[arg(long)]
    pub silent: bool,

    /// Print every file opened and written, and the new content of switched lines
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// File extension to collect in directory mode (overrides config file)
    /// Can be specified multiple times: --ext sol --ext vy
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Comment delimiter to use for every file instead of inferring it from the extension
    #[arg(long, value_name = "DELIM")]
    pub delimiter: Option<CommentDelimiter>,
}

impl SwitchArgs {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.silent, self.verbose)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .solenvrc.json configuration file
    Init,
}
