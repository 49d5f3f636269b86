//! Result publisher
//!
//! Copies the optimized bundle and rewritten page from staging back into the
//! target's own bundle. When the copy adapter produces several commands they
//! run concurrently and are all awaited.

use std::thread;

use tracing::error;

use crate::domain::entities::TargetDescriptor;
use crate::domain::ports::CommandSpec;
use crate::error::{PipelineError, PipelineResult};

use super::command::run_command;
use super::context::BuildContext;

pub struct ResultPublisher<'a> {
    ctx: BuildContext<'a>,
}

impl<'a> ResultPublisher<'a> {
    pub fn new(ctx: BuildContext<'a>) -> Self {
        Self { ctx }
    }

    /// Copy commands publishing `target`
    pub fn commands_for(&self, target: &TargetDescriptor) -> Vec<CommandSpec> {
        let options = self.ctx.options;
        let destination = target.original_folder(&options.bundles_root, &options.web_folder);
        self.ctx.copy.copy_files(
            &[
                target.staged_minified_path.as_path(),
                target.staged_html_path.as_path(),
            ],
            &destination,
            &options.staging_dir,
        )
    }

    /// Publish `target`; the first failing command's error is returned
    pub fn publish(&self, target: &TargetDescriptor) -> PipelineResult<()> {
        let commands = self.commands_for(target);
        let runner = self.ctx.runner;

        let results: Vec<PipelineResult<()>> = if commands.len() == 1 {
            vec![run_command(runner, &commands[0]).map(|_| ())]
        } else {
            thread::scope(|scope| {
                let handles: Vec<_> = commands
                    .iter()
                    .map(|spec| scope.spawn(move || run_command(runner, spec).map(|_| ())))
                    .collect();
                handles
                    .into_iter()
                    .zip(&commands)
                    .map(|(handle, spec)| {
                        handle.join().unwrap_or_else(|_| {
                            error!("copy thread panicked: {}", spec);
                            Err(PipelineError::CommandExecution {
                                command: spec.to_string(),
                                status: "panicked".to_string(),
                                stderr: String::new(),
                            })
                        })
                    })
                    .collect()
            })
        };

        results.into_iter().collect()
    }
}
