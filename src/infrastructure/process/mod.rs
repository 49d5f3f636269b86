//! Process Runner Implementations
//!
//! Concrete implementations of the ProcessRunner port.

mod dry_run;
mod system;

pub use dry_run::DryRunProcessRunner;
pub use system::SystemProcessRunner;
