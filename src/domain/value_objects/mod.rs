//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod bundle;
mod failure_policy;
mod phase;
mod platform;

pub use bundle::{BundleList, BundleName};
pub use failure_policy::FailurePolicy;
pub use phase::Phase;
pub use platform::Platform;
