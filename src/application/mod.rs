//! Application Layer
//!
//! Use cases that coordinate domain objects and infrastructure ports.
//!
//! ## Structure
//!
//! - `build/` - The page optimization pipeline (stage, optimize, rewrite, publish)

pub mod build;

pub use build::{BuildOptions, BuildReport, BuildUseCase, PhaseSkips, StepReport};
