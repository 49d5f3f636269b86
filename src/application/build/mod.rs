//! Build Module
//!
//! Runs the page optimization pipeline.
//!
//! ## Structure
//!
//! - `options` - `BuildOptions`, `PhaseSkips`
//! - `result` - `BuildReport`, `StepReport`
//! - `command` - runs one external command and classifies its outcome
//! - `staging` / `optimizer` / `rewrite` / `publish` - one component per phase
//! - `use_case` - `BuildUseCase`, the phase driver
//!
//! ## Usage
//!
//! ```ignore
//! use pagebuild::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(SystemProcessRunner::new(), LocalFs::new());
//! let report = use_case.execute(&targets.descriptors, &targets.bundles, &options);
//! ```

mod command;
mod context;
mod optimizer;
mod options;
mod publish;
mod result;
mod rewrite;
mod staging;
mod use_case;

pub use command::run_command;
pub use context::BuildContext;
pub use optimizer::OptimizerInvoker;
pub use options::{BuildOptions, PhaseSkips};
pub use publish::ResultPublisher;
pub use result::{BuildReport, StepReport};
pub use rewrite::HtmlRewriter;
pub use staging::StagingManager;
pub use use_case::BuildUseCase;
