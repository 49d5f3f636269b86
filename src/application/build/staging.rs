//! Staging manager
//!
//! The bundles' source layout does not match the module layout the optimizer
//! resolves against, so every bundle's web folder is merged into one staging
//! directory first.

use tracing::debug;

use crate::domain::value_objects::BundleName;
use crate::error::{PipelineError, PipelineResult};

use super::command::run_command;
use super::context::BuildContext;

pub struct StagingManager<'a> {
    ctx: BuildContext<'a>,
}

impl<'a> StagingManager<'a> {
    pub fn new(ctx: BuildContext<'a>) -> Self {
        Self { ctx }
    }

    /// Create the staging directory. An existing directory is fine.
    pub fn ensure_staging_directory(&self) -> PipelineResult<()> {
        let dir = &self.ctx.options.staging_dir;
        if self.ctx.options.dry_run {
            debug!("[dry-run] ensure {}", dir.display());
            return Ok(());
        }
        match self.ctx.fs.create_dir(dir) {
            Ok(()) => {
                debug!(path = %dir.display(), "created staging directory");
                Ok(())
            }
            Err(e) if e.is_already_exists() => Ok(()),
            Err(e) => Err(PipelineError::StagingDirectory {
                path: dir.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Copy one bundle's web folder contents into staging, overwriting
    pub fn stage_bundle(&self, bundle: &BundleName) -> PipelineResult<()> {
        let options = self.ctx.options;
        let source = options
            .bundles_root
            .join(bundle.as_str())
            .join(&options.web_folder);
        let spec = self
            .ctx
            .copy
            .copy_tree(&source, &options.staging_dir, &options.staging_dir);
        run_command(self.ctx.runner, &spec).map(|_| ())
    }
}
