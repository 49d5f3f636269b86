//! Dry-run process runner
//!
//! Logs each command and reports success without executing anything.

use std::io;

use tracing::info;

use crate::domain::ports::{CommandResult, CommandSpec, ProcessRunner};

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunProcessRunner;

impl ProcessRunner for DryRunProcessRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandResult> {
        info!(cwd = %spec.working_dir.display(), "[dry-run] {}", spec);
        Ok(CommandResult::success())
    }
}
