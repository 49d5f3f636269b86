//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::suggest_key;
use crate::domain::value_objects::FailurePolicy;
use crate::error::{PipelineError, PipelineResult};

use super::types::Config;

/// Default project config file name
pub const CONFIG_FILE_NAME: &str = "pagebuild.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A loaded configuration with the directory its relative paths resolve against
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
    /// File the configuration came from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PipelineResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)
        .map_err(|e| PipelineError::configuration(path, format!("cannot read: {}", e)))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PipelineError::configuration(path, e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key, CONFIG_KEYS).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration to use
///
/// An explicit path must exist. Otherwise `<cwd>/pagebuild.toml`, then the
/// user config (`<config dir>/pagebuild/config.toml`), then built-in defaults
/// rooted at `cwd`. Environment overrides apply on top in every case.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> PipelineResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => [
            Some(cwd.join(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|d| d.join("pagebuild").join("config.toml")),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            let base_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            LoadedConfig {
                config,
                base_dir,
                source: Some(path),
                warnings,
            }
        }
        None => {
            LoadedConfig {
                config: Config::default(),
                base_dir: cwd.to_path_buf(),
                source: None,
                warnings: Vec::new(),
            }
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// Apply environment variable overrides (PAGEBUILD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // PAGEBUILD_ON_FAILURE
    if let Some(policy) = lookup("PAGEBUILD_ON_FAILURE").and_then(|v| FailurePolicy::parse(&v)) {
        config.pipeline.on_failure = policy;
    }

    // PAGEBUILD_OPTIMIZER
    if let Some(command) = lookup("PAGEBUILD_OPTIMIZER").filter(|v| !v.trim().is_empty()) {
        config.optimizer.command = command;
    }

    // PAGEBUILD_STAGING_DIR
    if let Some(dir) = lookup("PAGEBUILD_STAGING_DIR").filter(|v| !v.trim().is_empty()) {
        config.paths.staging_dir = PathBuf::from(dir);
    }

    // PAGEBUILD_VERIFY_OUTPUTS
    if let Some(val) = lookup("PAGEBUILD_VERIFY_OUTPUTS") {
        config.pipeline.verify_outputs = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const CONFIG_KEYS: &[&str] = &[
    "paths",
    "build_file",
    "optimizer_script",
    "targets_file",
    "bundles_root",
    "staging_dir",
    "web_folder",
    "optimizer",
    "command",
    "target_group",
    "rewrite",
    "loader",
    "minified_loader",
    "rules",
    "pattern",
    "replacement",
    "pipeline",
    "on_failure",
    "verify_outputs",
    "platform",
];
