//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::BuildUseCase;
use crate::domain::ports::ProcessRunner;
use crate::infrastructure::{DryRunProcessRunner, LocalFs, SystemProcessRunner};

/// Build use case as wired by the CLI
pub type ConcreteBuildUseCase = BuildUseCase<Box<dyn ProcessRunner>, LocalFs>;

/// Create a build use case; a dry run gets a runner that only logs commands
pub fn create_build_use_case(dry_run: bool) -> ConcreteBuildUseCase {
    BuildUseCase::new(process_runner(dry_run), LocalFs::new())
}

fn process_runner(dry_run: bool) -> Box<dyn ProcessRunner> {
    if dry_run {
        Box::new(DryRunProcessRunner)
    } else {
        Box::new(SystemProcessRunner::new())
    }
}
