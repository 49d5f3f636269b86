//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the staging lock.

mod local;
mod lock;

pub use local::{atomic_write, LocalFs};
pub use lock::StagingLock;
