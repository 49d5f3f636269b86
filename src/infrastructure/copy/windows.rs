//! Windows copy commands (`xcopy`)

use std::path::Path;

use super::strategy::CopyStrategy;
use crate::domain::ports::CommandSpec;

/// Copies with `xcopy`
///
/// Tree copies use `/e /i /h /q /y`: subdirectories (including empty ones),
/// destination treated as a directory, hidden files, quiet, no overwrite
/// prompt. Single-file copies use `/q /y`, one command per file.
pub struct WindowsCopy;

impl CopyStrategy for WindowsCopy {
    fn name(&self) -> &'static str {
        "xcopy"
    }

    fn copy_tree(&self, src_dir: &Path, dest_dir: &Path, cwd: &Path) -> CommandSpec {
        CommandSpec::new("xcopy", cwd)
            .args(["/e", "/i", "/h", "/q", "/y"])
            .path_arg(src_dir)
            .path_arg(dest_dir)
    }

    fn copy_files(&self, files: &[&Path], dest_dir: &Path, cwd: &Path) -> Vec<CommandSpec> {
        files
            .iter()
            .map(|file| {
                CommandSpec::new("xcopy", cwd)
                    .args(["/q", "/y"])
                    .path_arg(file)
                    .path_arg(dest_dir)
            })
            .collect()
    }
}
