//! ProcessRunner port - runs one external command
//!
//! The pipeline only ever describes commands as a program, its arguments and
//! a working directory. How (or whether) they are executed is up to the
//! implementation: the system runner spawns them, the dry-run runner only
//! logs them, tests record them.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An external command to execute
///
/// Arguments are `OsString`s so paths reach the child byte for byte, even
/// when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// `<key>=<path>` without going through a lossy string conversion
    pub fn keyed_path_arg(self, key: &str, path: &OsStr) -> Self {
        let mut arg = OsString::from(key);
        arg.push("=");
        arg.push(path);
        self.arg(arg)
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-like rendering for logs; arguments with spaces are quoted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Outcome of one command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code; `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            status: Some(0),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Human-readable status for error messages
    pub fn status_display(&self) -> String {
        match self.status {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external commands
///
/// `Err` means the command could not be started at all; a command that ran
/// and failed is an `Ok` result with a non-zero status.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandResult>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for Box<T> {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandResult> {
        (**self).run(spec)
    }
}
