//! Command entry points

mod build;
mod targets;

pub use build::cmd_build;
pub use targets::cmd_targets;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pagebuild::config::{load_or_default, LoadedConfig};
use pagebuild::infrastructure::{TargetList, TomlTargetLoader};
use tracing::{info, warn};

use crate::cli::TargetArgs;

/// Load configuration and report unknown keys
pub(crate) fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let loaded = load_or_default(explicit, cwd).context("failed to load configuration")?;
    match &loaded.source {
        Some(path) => info!("using configuration {}", path.display()),
        None => info!("no configuration file found, using defaults"),
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    Ok(loaded)
}

/// Staging directory after CLI override; relative CLI paths are cwd-based
pub(crate) fn staging_dir(args: &TargetArgs, loaded: &LoadedConfig, cwd: &Path) -> PathBuf {
    match &args.staging_dir {
        Some(dir) => cwd.join(dir),
        None => loaded.config.resolve_paths(&loaded.base_dir).staging_dir,
    }
}

/// Load the target group named by the CLI or config
pub(crate) fn load_targets(
    args: &TargetArgs,
    loaded: &LoadedConfig,
    staging_dir: &Path,
    cwd: &Path,
) -> Result<TargetList> {
    let path = match &args.targets {
        Some(path) => cwd.join(path),
        None => loaded.config.resolve_paths(&loaded.base_dir).targets_file,
    };
    let group = args
        .group
        .clone()
        .unwrap_or_else(|| loaded.config.optimizer.target_group.clone());

    let list = TomlTargetLoader::new(group, staging_dir)
        .load(&path)
        .with_context(|| format!("failed to load targets from {}", path.display()))?;
    for warning in &list.warnings {
        warn!("{}: {}", path.display(), warning);
    }
    Ok(list)
}
