//! Command runner
//!
//! Runs one external command through the `ProcessRunner` port, logs it, and
//! turns a spawn failure or non-zero exit into `CommandExecution`.

use tracing::{error, info};

use crate::domain::ports::{CommandResult, CommandSpec, ProcessRunner};
use crate::error::{PipelineError, PipelineResult};

/// Run `spec`, logging the command line and its output
pub fn run_command(runner: &dyn ProcessRunner, spec: &CommandSpec) -> PipelineResult<CommandResult> {
    info!(cwd = %spec.working_dir.display(), "{}", spec);

    let result = match runner.run(spec) {
        Ok(result) => result,
        Err(e) => {
            error!("failed to start `{}`: {}", spec, e);
            return Err(PipelineError::CommandExecution {
                command: spec.to_string(),
                status: format!("could not start: {}", e),
                stderr: String::new(),
            });
        }
    };

    let stdout = result.stdout.trim_end();
    if !stdout.is_empty() {
        info!("{}", stdout);
    }

    if result.is_success() {
        return Ok(result);
    }

    error!(
        status = %result.status_display(),
        stderr = %result.stderr.trim_end(),
        "command failed: {}",
        spec
    );
    Err(PipelineError::CommandExecution {
        command: spec.to_string(),
        status: result.status_display(),
        stderr: result.stderr,
    })
}
