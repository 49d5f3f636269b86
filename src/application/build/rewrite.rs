//! HTML rewriter
//!
//! Points each staged page at its optimized bundle and the minified loader.

use tracing::{debug, info};

use crate::domain::entities::TargetDescriptor;
use crate::domain::services::RewriteRules;
use crate::error::{PipelineError, PipelineResult};

use super::context::BuildContext;

pub struct HtmlRewriter<'a> {
    ctx: BuildContext<'a>,
}

impl<'a> HtmlRewriter<'a> {
    pub fn new(ctx: BuildContext<'a>) -> Self {
        Self { ctx }
    }

    /// Built-in rules for `target` followed by configured extras
    pub fn rules_for(&self, target: &TargetDescriptor) -> RewriteRules {
        let options = self.ctx.options;
        RewriteRules::for_target(&target.name, &options.loader, &options.minified_loader)
            .with_extra(&options.extra_rules)
    }

    /// Rewrite the staged HTML in place. Returns whether any rule matched.
    pub fn rewrite_html(&self, target: &TargetDescriptor) -> PipelineResult<bool> {
        let path = &target.staged_html_path;
        info!("updateHTML {}", path.display());

        if self.ctx.options.dry_run {
            debug!("[dry-run] skipping write of {}", path.display());
            return Ok(false);
        }

        let html = self
            .ctx
            .fs
            .read(path)
            .map_err(|e| PipelineError::HtmlRewrite {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let outcome = self.rules_for(target).apply(&html);
        debug!(rules = ?outcome.applied, "applied rewrite rules");

        self.ctx
            .fs
            .write(path, &outcome.text)
            .map_err(|e| PipelineError::HtmlRewrite {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(outcome.changed())
    }
}
