//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage the attribution of machine-generated code changes
#[derive(Parser, Debug)]
#[command(name = "blaim")]
#[command(about = "Correlate accepted AI suggestions with git diffs and annotate source files")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the root of the git checkout
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for blaim
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a .blaim stream from git diff output on stdin and the accept log
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Produce a line-by-line annotation of source files that contain
    /// machine-generated code changes (.blaim stream on stdin)
    #[command(visible_alias = "a")]
    Annotate,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the accepted.suggestions.log file
    #[arg(long = "accept-log", value_name = "PATH", env = "BLAIM_ACCEPT_LOG")]
    pub accept_log: PathBuf,
}
