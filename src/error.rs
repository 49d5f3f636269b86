//! Error types for pagebuild
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Main error type for pipeline operations
///
/// Only `Configuration` and `StagingLock` abort a run. Every other variant is
/// absorbed by the driver and recorded in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Target list or tool configuration is missing, unreadable or malformed
    #[error("configuration error in {file}: {message}")]
    Configuration { file: PathBuf, message: String },

    /// Staging directory could not be created (other than "already exists")
    #[error("cannot create staging directory {path}: {message}")]
    StagingDirectory { path: PathBuf, message: String },

    /// Another run holds the staging directory
    #[error("cannot lock staging directory {path}: {message}")]
    StagingLock { path: PathBuf, message: String },

    /// External command failed to spawn or exited non-zero
    #[error("command `{command}` failed ({status}){}", format_stderr(.stderr))]
    CommandExecution {
        command: String,
        status: String,
        stderr: String,
    },

    /// Staged HTML could not be read or written
    #[error("cannot rewrite {path}: {message}")]
    HtmlRewrite { path: PathBuf, message: String },

    /// Optimizer produced no (or an empty) output file
    #[error("optimizer output missing or empty: {path}")]
    MissingOutput { path: PathBuf },
}

impl PipelineError {
    pub fn configuration(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PipelineError::Configuration {
            file: file.into(),
            message: message.into(),
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_configuration() {
        let err = PipelineError::configuration(
            "customTargets.toml",
            "no target group named 'requirejs'",
        );
        assert_eq!(
            err.to_string(),
            "configuration error in customTargets.toml: no target group named 'requirejs'"
        );
    }

    #[test]
    fn test_error_display_command_includes_stderr() {
        let err = PipelineError::CommandExecution {
            command: "node r.js -o build.js".to_string(),
            status: "exit code 1".to_string(),
            stderr: "  module not found\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command `node r.js -o build.js` failed (exit code 1): module not found"
        );
    }

    #[test]
    fn test_error_display_command_without_stderr() {
        let err = PipelineError::CommandExecution {
            command: "cp a b".to_string(),
            status: "exit code 1".to_string(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "command `cp a b` failed (exit code 1)");
    }
}
