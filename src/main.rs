//! blaim CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blaim::cli::{Cli, Commands};
use blaim::commands::{run_annotate, run_generate, CommandContext};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> blaim::Result<()> {
    let cli = Cli::parse();
    let ctx = CommandContext {
        root: cli.root.clone(),
        verbose: cli.verbose,
    };

    match &cli.command {
        Commands::Generate(args) => run_generate(args, &ctx),
        Commands::Annotate => run_annotate(&ctx),
    }
}
