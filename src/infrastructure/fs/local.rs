//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory and are
/// renamed into place, so a crash never leaves a half-written page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        fs::create_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    fn file_len(&self, path: &Path) -> FsResult<u64> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsError::from_io(path, e))
    }
}

/// Write content to a file atomically (tempfile + persist)
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
    temp.write_all(content)
        .map_err(|e| FsError::from_io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}
