//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system, staging lock
//! - `process/` - Process runners (system, dry-run)
//! - `copy/` - Platform copy command builders (cp, xcopy)
//! - `targets/` - Target list loading

pub mod copy;
pub mod fs;
pub mod process;
pub mod targets;

pub use copy::{strategy_for, CopyStrategy};
pub use fs::{LocalFs, StagingLock};
pub use process::{DryRunProcessRunner, SystemProcessRunner};
pub use targets::{TargetList, TomlTargetLoader};
