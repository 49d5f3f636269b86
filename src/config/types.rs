//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{RewriteRule, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER};
use crate::domain::value_objects::{FailurePolicy, Platform};
use crate::error::PipelineResult;
use crate::infrastructure::targets::DEFAULT_TARGET_GROUP;

use super::loader::{self, ConfigWarning};

/// File and directory locations
///
/// Relative paths resolve against the directory holding the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Optimizer build configuration (`-o` argument)
    #[serde(default = "default_build_file")]
    pub build_file: PathBuf,

    /// Optimizer entry script
    #[serde(default = "default_optimizer_script")]
    pub optimizer_script: PathBuf,

    /// Target list document
    #[serde(default = "default_targets_file")]
    pub targets_file: PathBuf,

    /// Directory holding one subdirectory per bundle
    #[serde(default = "default_bundles_root")]
    pub bundles_root: PathBuf,

    /// Staging directory
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,

    /// Web assets folder inside each bundle
    #[serde(default = "default_web_folder")]
    pub web_folder: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            build_file: default_build_file(),
            optimizer_script: default_optimizer_script(),
            targets_file: default_targets_file(),
            bundles_root: default_bundles_root(),
            staging_dir: default_staging_dir(),
            web_folder: default_web_folder(),
        }
    }
}

fn default_build_file() -> PathBuf {
    PathBuf::from("orion.build.js")
}

fn default_optimizer_script() -> PathBuf {
    PathBuf::from("r.js")
}

fn default_targets_file() -> PathBuf {
    PathBuf::from("customTargets.toml")
}

fn default_bundles_root() -> PathBuf {
    PathBuf::from("../bundles")
}

fn default_staging_dir() -> PathBuf {
    PathBuf::from(".temp")
}

fn default_web_folder() -> String {
    "web".to_string()
}

/// Optimizer invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Interpreter that runs the entry script
    #[serde(default = "default_optimizer_command")]
    pub command: String,

    /// Name of the target group to read from the target list
    #[serde(default = "default_target_group")]
    pub target_group: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            command: default_optimizer_command(),
            target_group: default_target_group(),
        }
    }
}

fn default_optimizer_command() -> String {
    "node".to_string()
}

fn default_target_group() -> String {
    DEFAULT_TARGET_GROUP.to_string()
}

/// HTML rewrite settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_loader")]
    pub loader: String,

    #[serde(default = "default_minified_loader")]
    pub minified_loader: String,

    /// Extra literal rules applied after the built-in ones
    #[serde(default)]
    pub rules: Vec<RewriteRule>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            loader: default_loader(),
            minified_loader: default_minified_loader(),
            rules: Vec::new(),
        }
    }
}

fn default_loader() -> String {
    DEFAULT_LOADER.to_string()
}

fn default_minified_loader() -> String {
    DEFAULT_MINIFIED_LOADER.to_string()
}

/// Pipeline behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub on_failure: FailurePolicy,

    /// Check that each optimizer output exists and is non-empty
    #[serde(default)]
    pub verify_outputs: bool,

    /// Force a copy command family; detected from the host when unset
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub optimizer: OptimizerConfig,

    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> PipelineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve every configured path against `base_dir`
    pub fn resolve_paths(&self, base_dir: &Path) -> ResolvedPaths {
        let paths = &self.paths;
        ResolvedPaths {
            build_file: base_dir.join(&paths.build_file),
            optimizer_script: base_dir.join(&paths.optimizer_script),
            targets_file: base_dir.join(&paths.targets_file),
            bundles_root: base_dir.join(&paths.bundles_root),
            staging_dir: base_dir.join(&paths.staging_dir),
        }
    }

    /// Platform to use: configured override or the host's
    pub fn platform(&self) -> Platform {
        self.pipeline.platform.unwrap_or_else(Platform::detect)
    }
}

/// Configured paths made absolute (or relative to the working directory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub build_file: PathBuf,
    pub optimizer_script: PathBuf,
    pub targets_file: PathBuf,
    pub bundles_root: PathBuf,
    pub staging_dir: PathBuf,
}
