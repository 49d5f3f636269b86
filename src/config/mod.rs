//! Configuration module for pagebuild
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAGEBUILD_*)
//! 3. Project config (`--config`, or ./pagebuild.toml)
//! 4. User config (<config dir>/pagebuild/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    LoadedConfig, CONFIG_FILE_NAME,
};
pub use types::{
    Config, OptimizerConfig, PathsConfig, PipelineConfig, ResolvedPaths, RewriteConfig,
};
