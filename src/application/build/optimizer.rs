//! Optimizer invoker
//!
//! Runs the external optimizer once per target:
//!
//! ```text
//! <command> <script> -o <build file> name=<pageDir>/<name> out=<staged built js> baseUrl=<staging>/
//! ```
//!
//! The working directory is the build file's directory so relative paths in
//! the build file resolve.

use std::ffi::OsString;
use std::path::Path;

use crate::domain::entities::TargetDescriptor;
use crate::domain::ports::CommandSpec;
use crate::error::{PipelineError, PipelineResult};

use super::command::run_command;
use super::context::BuildContext;

pub struct OptimizerInvoker<'a> {
    ctx: BuildContext<'a>,
}

impl<'a> OptimizerInvoker<'a> {
    pub fn new(ctx: BuildContext<'a>) -> Self {
        Self { ctx }
    }

    /// The optimizer command for `target`
    pub fn command_for(&self, target: &TargetDescriptor) -> CommandSpec {
        let options = self.ctx.options;
        let cwd = options
            .build_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        CommandSpec::new(&options.optimizer_command, cwd)
            .path_arg(&options.optimizer_script)
            .arg("-o")
            .path_arg(&options.build_file)
            .arg(format!("name={}", target.module_name()))
            .keyed_path_arg("out", target.staged_minified_path.as_os_str())
            .keyed_path_arg("baseUrl", &with_trailing_slash(&options.staging_dir))
    }

    pub fn optimize(&self, target: &TargetDescriptor) -> PipelineResult<()> {
        run_command(self.ctx.runner, &self.command_for(target)).map(|_| ())
    }

    /// Check the optimizer left a non-empty output file
    pub fn verify_output(&self, target: &TargetDescriptor) -> PipelineResult<()> {
        match self.ctx.fs.file_len(&target.staged_minified_path) {
            Ok(len) if len > 0 => Ok(()),
            _ => Err(PipelineError::MissingOutput {
                path: target.staged_minified_path.clone(),
            }),
        }
    }
}

fn with_trailing_slash(dir: &Path) -> OsString {
    let mut s = dir.as_os_str().to_os_string();
    let lossy = dir.to_string_lossy();
    if !(lossy.ends_with('/') || lossy.ends_with('\\')) {
        s.push("/");
    }
    s
}
