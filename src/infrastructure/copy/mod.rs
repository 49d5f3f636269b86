//! Platform Copy Adapters
//!
//! - `posix` - `cp`
//! - `windows` - `xcopy`

mod posix;
mod strategy;
mod windows;

pub use posix::PosixCopy;
pub use strategy::{strategy_for, CopyStrategy};
pub use windows::WindowsCopy;
