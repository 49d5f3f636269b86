//! POSIX copy commands (`cp`)

use std::path::Path;

use super::strategy::CopyStrategy;
use crate::domain::ports::CommandSpec;

/// Copies with `cp`
///
/// `cp -R <src>/. <dest>` copies the directory's contents (hidden files
/// included) into an existing destination without needing shell globbing.
pub struct PosixCopy;

impl CopyStrategy for PosixCopy {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn copy_tree(&self, src_dir: &Path, dest_dir: &Path, cwd: &Path) -> CommandSpec {
        CommandSpec::new("cp", cwd)
            .arg("-R")
            .path_arg(&src_dir.join("."))
            .path_arg(dest_dir)
    }

    fn copy_files(&self, files: &[&Path], dest_dir: &Path, cwd: &Path) -> Vec<CommandSpec> {
        let mut spec = CommandSpec::new("cp", cwd);
        for file in files {
            spec = spec.path_arg(file);
        }
        vec![spec.path_arg(dest_dir)]
    }
}
