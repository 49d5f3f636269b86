//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! Argument parsing lives in the binary (`src/cli.rs`).
//!
//! ## Usage
//!
//! ```ignore
//! use pagebuild::presentation::{factory, output};
//!
//! let use_case = factory::create_build_use_case(options.dry_run);
//! let report = use_case.execute(&targets.descriptors, &targets.bundles, &options);
//! print!("{}", output::render_report(&report, OutputFormat::Text));
//! ```

pub mod factory;
pub mod output;

pub use factory::create_build_use_case;
pub use output::{render_report, render_targets, OutputFormat};
