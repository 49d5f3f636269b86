//! System process runner
//!
//! Spawns the command directly (no intermediate shell) and captures its
//! output. Blocks until the child exits; there is no timeout.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandResult, CommandSpec, ProcessRunner};

/// Runs commands on the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandResult> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandResult {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
