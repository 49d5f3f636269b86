//! Isolated project directory for running the pagebuild binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{page_html, CONFIG_TOML, FAKE_OPTIMIZER, TARGETS_TOML};

/// Result of running a pagebuild CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Project with `bundles/{core,extra}/web`, a build directory holding the
/// fake optimizer, a target list and a config file
pub struct TestEnv {
    pub root: TempDir,
    extra_env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().unwrap(),
            extra_env: Vec::new(),
        };

        env.write("bundles/core/web/home/main.html", &page_html("main"));
        env.write("bundles/core/web/home/main.js", "define([], function () {});\n");
        env.write("bundles/core/web/about/about.html", &page_html("about"));
        env.write("bundles/core/web/about/about.js", "define([], function () {});\n");
        env.write("bundles/core/web/requirejs/require.js", "// loader\n");
        env.write("bundles/extra/web/shop/cart.html", &page_html("cart"));
        env.write("bundles/extra/web/shop/cart.js", "define([], function () {});\n");
        env.write("build/orion.build.js", "({})\n");
        env.write("build/fake-r.sh", FAKE_OPTIMIZER);
        env.write("customTargets.toml", TARGETS_TOML);
        env.write("pagebuild.toml", CONFIG_TOML);
        env
    }

    /// Make the fake optimizer fail for one `page_dir/name` module
    pub fn failing_module(mut self, module: &str) -> Self {
        self.extra_env
            .push(("PAGEBUILD_TEST_FAIL".to_string(), module.to_string()));
        self
    }

    /// Make the fake optimizer succeed with an empty output for one module
    pub fn empty_output_module(mut self, module: &str) -> Self {
        self.extra_env
            .push(("PAGEBUILD_TEST_EMPTY".to_string(), module.to_string()));
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run the binary from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_pagebuild");
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .current_dir(self.root.path())
            .env_remove("PAGEBUILD_ON_FAILURE")
            .env_remove("PAGEBUILD_OPTIMIZER")
            .env_remove("PAGEBUILD_STAGING_DIR")
            .env_remove("PAGEBUILD_VERIFY_OUTPUTS")
            .env_remove("PAGEBUILD_LOG")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.root.path().join(".config"));
        for (key, value) in &self.extra_env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
