//! pagebuild - multi-phase page optimization pipeline
//!
//! Copies every bundle's web folder into one staging directory, runs the
//! module optimizer once per page target, points each staged page at its
//! optimized bundle, and copies the results back into the owning bundle.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildUseCase, PhaseSkips};
pub use config::Config;
pub use domain::entities::TargetDescriptor;
pub use domain::value_objects::{BundleList, BundleName, FailurePolicy, Phase, Platform};
pub use error::{PipelineError, PipelineResult};
pub use infrastructure::{TargetList, TomlTargetLoader};
