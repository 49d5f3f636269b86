//! Staging Lock
//!
//! Advisory exclusive lock guarding a staging directory against concurrent
//! runs. The lock file sits next to the staging directory
//! (`.temp` -> `.temp.lock`) so it never ends up in staged content.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};

/// Held lock; released on drop
#[derive(Debug)]
pub struct StagingLock {
    file: File,
    path: PathBuf,
}

impl StagingLock {
    /// Path of the lock file guarding `staging_dir`
    pub fn lock_path(staging_dir: &Path) -> PathBuf {
        let mut name = staging_dir
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| ".pagebuild".into());
        name.push(".lock");
        staging_dir.with_file_name(name)
    }

    /// Try to take the lock for `staging_dir` without blocking.
    ///
    /// Returns `Ok(None)` when the lock file cannot be created at all; the
    /// caller proceeds unlocked. Contention with another run is an error.
    pub fn acquire(staging_dir: &Path) -> PipelineResult<Option<StagingLock>> {
        let path = Self::lock_path(staging_dir);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("cannot create {}: {}; running without lock", parent.display(), e);
                    return Ok(None);
                }
            }
        }

        let file = match OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) => {
                warn!("cannot open {}: {}; running without lock", path.display(), e);
                return Ok(None);
            }
        };

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("locked {}", path.display());
                Ok(Some(StagingLock { file, path }))
            }
            Err(e) if is_contended(&e) => Err(PipelineError::StagingLock {
                path: staging_dir.to_path_buf(),
                message: format!("another run holds {}", path.display()),
            }),
            Err(e) => {
                warn!("cannot lock {}: {}; running without lock", path.display(), e);
                Ok(None)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn is_contended(err: &std::io::Error) -> bool {
    let contended = fs2::lock_contended_error();
    match (err.raw_os_error(), contended.raw_os_error()) {
        (Some(a), Some(b)) => a == b,
        _ => err.kind() == contended.kind(),
    }
}
