//! pagebuild CLI
//!
//! Usage: pagebuild [COMMAND]
//!
//! Commands:
//!   build    Run the pipeline: stage, optimize, rewrite, publish
//!   targets  List the targets and bundles a build would process

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use pagebuild::logging::{init_logging, Verbosity};

use cli::{BuildArgs, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let config = cli.config.as_deref();

    let code = match &cli.command {
        Some(Commands::Build(args)) => commands::cmd_build(config, args, cli.json, &cwd)?,
        Some(Commands::Targets(args)) => {
            commands::cmd_targets(config, args, cli.json, &cwd)?;
            0
        }
        None => commands::cmd_build(config, &BuildArgs::default(), cli.json, &cwd)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
