//! Build Use Case
//!
//! Drives the pipeline:
//! 1. Stage - merge every bundle's web folder into the staging directory
//! 2. Optimize - run the optimizer once per target
//! 3. Rewrite - point each staged page at its optimized bundle
//! 4. Publish - copy bundle and page back into the owning bundle
//!
//! Each phase finishes for every bundle/target before the next begins. Step
//! failures are recorded and the run continues, unless the failure policy is
//! `abort`, which stops after the first phase that recorded one.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::domain::entities::TargetDescriptor;
use crate::domain::ports::{FileSystem, ProcessRunner};
use crate::domain::value_objects::{BundleList, Phase};
use crate::infrastructure::copy::strategy_for;

use super::context::BuildContext;
use super::optimizer::OptimizerInvoker;
use super::options::BuildOptions;
use super::publish::ResultPublisher;
use super::result::BuildReport;
use super::rewrite::HtmlRewriter;
use super::staging::StagingManager;

/// Build use case - orchestrates the four phases
///
/// Parameterized by its ports so tests can record commands and keep files in
/// memory.
pub struct BuildUseCase<R, F>
where
    R: ProcessRunner,
    F: FileSystem,
{
    runner: R,
    file_system: F,
}

impl<R, F> BuildUseCase<R, F>
where
    R: ProcessRunner,
    F: FileSystem,
{
    pub fn new(runner: R, file_system: F) -> Self {
        Self {
            runner,
            file_system,
        }
    }

    /// Run every phase for `targets`; `bundles` are the distinct bundles they reference
    pub fn execute(
        &self,
        targets: &[TargetDescriptor],
        bundles: &BundleList,
        options: &BuildOptions,
    ) -> BuildReport {
        let copy = strategy_for(options.platform);
        let ctx = BuildContext {
            runner: &self.runner,
            fs: &self.file_system,
            copy: copy.as_ref(),
            options,
        };

        let mut report = BuildReport::new(options.failure_policy, options.dry_run);
        // Targets whose optimizer output failed verification
        let mut excluded: HashSet<usize> = HashSet::new();

        let ensured = StagingManager::new(ctx).ensure_staging_directory();
        if let Err(e) = &ensured {
            error!("{}", e);
        }
        report.record(
            Phase::Stage,
            options.staging_dir.display().to_string(),
            ensured,
        );

        for phase in Phase::ALL {
            if options.skip.skips(phase) {
                info!("Skipping {}", phase);
                report.skip_phase(phase);
            } else {
                match phase {
                    Phase::Stage => self.stage(ctx, bundles, &mut report),
                    Phase::Optimize => self.optimize(ctx, targets, &mut report, &mut excluded),
                    Phase::Rewrite => self.rewrite(ctx, targets, &mut report, &excluded),
                    Phase::Publish => self.publish(ctx, targets, &mut report, &excluded),
                }
            }

            if options.failure_policy.stops_after_failed_phase() && report.phase_failed(phase) {
                warn!("{} phase had failures, stopping", phase);
                report.aborted_after = Some(phase);
                break;
            }
        }

        let report = report.finish();
        if report.is_success() {
            info!(steps = report.steps.len(), "build finished");
        } else {
            warn!(
                steps = report.steps.len(),
                failures = report.failure_count(),
                "build finished with failures"
            );
        }
        report
    }

    fn stage(&self, ctx: BuildContext<'_>, bundles: &BundleList, report: &mut BuildReport) {
        info!(
            "Copying bundle web content to {}...",
            ctx.options.staging_dir.display()
        );
        let staging = StagingManager::new(ctx);
        for bundle in bundles {
            report.record(Phase::Stage, bundle.as_str(), staging.stage_bundle(bundle));
        }
    }

    fn optimize(
        &self,
        ctx: BuildContext<'_>,
        targets: &[TargetDescriptor],
        report: &mut BuildReport,
        excluded: &mut HashSet<usize>,
    ) {
        info!("Running optimize...");
        let invoker = OptimizerInvoker::new(ctx);
        let verify = ctx.options.verify_outputs && !ctx.options.dry_run;

        for (index, target) in targets.iter().enumerate() {
            let ran = report.record(Phase::Optimize, target.module_name(), invoker.optimize(target));
            if !verify {
                continue;
            }
            if !ran {
                excluded.insert(index);
                continue;
            }
            let verified = invoker.verify_output(target);
            if let Err(e) = &verified {
                warn!("{}", e);
                excluded.insert(index);
            }
            report.record(
                Phase::Optimize,
                format!("{} output", target.module_name()),
                verified,
            );
        }
    }

    fn rewrite(
        &self,
        ctx: BuildContext<'_>,
        targets: &[TargetDescriptor],
        report: &mut BuildReport,
        excluded: &HashSet<usize>,
    ) {
        info!("Running updateHTML...");
        let rewriter = HtmlRewriter::new(ctx);

        for (index, target) in targets.iter().enumerate() {
            if excluded.contains(&index) {
                debug!("skipping rewrite of {}: no optimizer output", target);
                continue;
            }
            let result = rewriter.rewrite_html(target);
            if let Err(e) = &result {
                error!("{}", e);
            }
            report.record(Phase::Rewrite, target.module_name(), result);
        }
    }

    fn publish(
        &self,
        ctx: BuildContext<'_>,
        targets: &[TargetDescriptor],
        report: &mut BuildReport,
        excluded: &HashSet<usize>,
    ) {
        info!(
            "Copy built files to {}...",
            ctx.options.bundles_root.display()
        );
        let publisher = ResultPublisher::new(ctx);

        for (index, target) in targets.iter().enumerate() {
            if excluded.contains(&index) {
                debug!("skipping publish of {}: no optimizer output", target);
                continue;
            }
            report.record(Phase::Publish, target.module_name(), publisher.publish(target));
        }
    }
}
