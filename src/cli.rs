use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pagebuild::domain::value_objects::{FailurePolicy, Platform};

/// pagebuild - stage bundles, optimize page modules, rewrite HTML, publish
#[derive(Parser, Debug)]
#[command(name = "pagebuild")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pagebuild' without a command to build with defaults.")]
pub struct Cli {
    /// Configuration file (default: ./pagebuild.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline: stage, optimize, rewrite, publish
    Build(BuildArgs),

    /// List the targets and bundles a build would process
    Targets(TargetArgs),
}

/// Where the target list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Target list document (overrides paths.targets_file)
    #[arg(long)]
    pub targets: Option<PathBuf>,

    /// Target group to build (overrides optimizer.target_group)
    #[arg(long)]
    pub group: Option<String>,

    /// Staging directory (overrides paths.staging_dir)
    #[arg(long)]
    pub staging_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Directory holding one subdirectory per bundle
    #[arg(long)]
    pub bundles_root: Option<PathBuf>,

    /// Copy command family
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// What a failed step means for the run
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,

    /// Check every optimizer output exists and is non-empty
    #[arg(long)]
    pub verify_outputs: bool,

    /// Log commands without running them; no files are written
    #[arg(long)]
    pub dry_run: bool,

    /// Skip copying bundle web folders into staging
    #[arg(long)]
    pub skip_stage: bool,

    /// Skip running the optimizer
    #[arg(long)]
    pub skip_optimize: bool,

    /// Skip rewriting staged HTML
    #[arg(long)]
    pub skip_rewrite: bool,

    /// Skip copying results back into bundles
    #[arg(long)]
    pub skip_publish: bool,
}
