//! Copy Strategy
//!
//! Defines how filesystem copies are expressed as external commands on each
//! platform. Strategies only build commands; running them is the
//! ProcessRunner's job.

use std::path::Path;

use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::Platform;

/// Platform-specific copy command builder
pub trait CopyStrategy: Send + Sync {
    /// Get the name of this copy method (for logging)
    fn name(&self) -> &'static str;

    /// Command copying the contents of `src_dir` into `dest_dir`, recursively,
    /// overwriting existing files
    fn copy_tree(&self, src_dir: &Path, dest_dir: &Path, cwd: &Path) -> CommandSpec;

    /// Commands copying `files` into `dest_dir`, overwriting existing files
    ///
    /// When more than one command is returned they are independent and may run
    /// concurrently.
    fn copy_files(&self, files: &[&Path], dest_dir: &Path, cwd: &Path) -> Vec<CommandSpec>;
}

/// Select the copy strategy for a platform
pub fn strategy_for(platform: Platform) -> Box<dyn CopyStrategy> {
    match platform {
        Platform::Posix => Box::new(super::posix::PosixCopy),
        Platform::Windows => Box::new(super::windows::WindowsCopy),
    }
}
