//! Build Options
//!
//! Everything the pipeline needs from the environment, passed explicitly to
//! each component instead of being read from process state.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::{RewriteRule, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER};
use crate::domain::value_objects::{FailurePolicy, Phase, Platform};

/// Phases to skip entirely
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseSkips {
    pub stage: bool,
    pub optimize: bool,
    pub rewrite: bool,
    pub publish: bool,
}

impl PhaseSkips {
    pub fn skips(&self, phase: Phase) -> bool {
        match phase {
            Phase::Stage => self.stage,
            Phase::Optimize => self.optimize,
            Phase::Rewrite => self.rewrite,
            Phase::Publish => self.publish,
        }
    }
}

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Merged staging directory
    pub staging_dir: PathBuf,
    /// Directory holding one subdirectory per bundle
    pub bundles_root: PathBuf,
    /// Web assets folder inside each bundle
    pub web_folder: String,
    /// Optimizer build configuration; its directory is the optimizer's cwd
    pub build_file: PathBuf,
    /// Optimizer entry script
    pub optimizer_script: PathBuf,
    /// Interpreter running the entry script
    pub optimizer_command: String,
    /// Copy command family
    pub platform: Platform,
    pub failure_policy: FailurePolicy,
    /// Check optimizer outputs before rewriting/publishing
    pub verify_outputs: bool,
    /// Log commands instead of running them; no file writes
    pub dry_run: bool,
    pub skip: PhaseSkips,
    /// Loader script reference to minify
    pub loader: String,
    pub minified_loader: String,
    /// Extra rewrite rules applied after the built-ins
    pub extra_rules: Vec<RewriteRule>,
}

impl BuildOptions {
    pub fn new(staging_dir: impl Into<PathBuf>, bundles_root: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            bundles_root: bundles_root.into(),
            web_folder: "web".to_string(),
            build_file: PathBuf::from("orion.build.js"),
            optimizer_script: PathBuf::from("r.js"),
            optimizer_command: "node".to_string(),
            platform: Platform::detect(),
            failure_policy: FailurePolicy::default(),
            verify_outputs: false,
            dry_run: false,
            skip: PhaseSkips::default(),
            loader: DEFAULT_LOADER.to_string(),
            minified_loader: DEFAULT_MINIFIED_LOADER.to_string(),
            extra_rules: Vec::new(),
        }
    }

    /// Build options from a configuration whose relative paths resolve against `base_dir`
    pub fn from_config(config: &Config, base_dir: &std::path::Path) -> Self {
        let paths = config.resolve_paths(base_dir);
        Self {
            staging_dir: paths.staging_dir,
            bundles_root: paths.bundles_root,
            web_folder: config.paths.web_folder.clone(),
            build_file: paths.build_file,
            optimizer_script: paths.optimizer_script,
            optimizer_command: config.optimizer.command.clone(),
            platform: config.platform(),
            failure_policy: config.pipeline.on_failure,
            verify_outputs: config.pipeline.verify_outputs,
            dry_run: false,
            skip: PhaseSkips::default(),
            loader: config.rewrite.loader.clone(),
            minified_loader: config.rewrite.minified_loader.clone(),
            extra_rules: config.rewrite.rules.clone(),
        }
    }

    pub fn with_build_file(mut self, build_file: impl Into<PathBuf>) -> Self {
        self.build_file = build_file.into();
        self
    }

    pub fn with_optimizer(
        mut self,
        command: impl Into<String>,
        script: impl Into<PathBuf>,
    ) -> Self {
        self.optimizer_command = command.into();
        self.optimizer_script = script.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_verify_outputs(mut self, verify: bool) -> Self {
        self.verify_outputs = verify;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_skip(mut self, skip: PhaseSkips) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_extra_rules(mut self, rules: Vec<RewriteRule>) -> Self {
        self.extra_rules = rules;
        self
    }
}
