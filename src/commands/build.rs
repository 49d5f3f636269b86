//! `pagebuild build`

use std::path::Path;

use anyhow::Result;
use pagebuild::application::{BuildOptions, PhaseSkips};
use pagebuild::infrastructure::StagingLock;
use pagebuild::presentation::{create_build_use_case, render_report, OutputFormat};
use tracing::{debug, info};

use crate::cli::BuildArgs;

/// Run the pipeline; returns the process exit code
pub fn cmd_build(config: Option<&Path>, args: &BuildArgs, json: bool, cwd: &Path) -> Result<i32> {
    let loaded = super::load_config(config, cwd)?;
    let mut options = BuildOptions::from_config(&loaded.config, &loaded.base_dir);
    options.staging_dir = super::staging_dir(&args.target, &loaded, cwd);
    apply_args(&mut options, args, cwd);

    let list = super::load_targets(&args.target, &loaded, &options.staging_dir, cwd)?;
    info!(
        targets = list.descriptors.len(),
        bundles = list.bundles.len(),
        "loaded target list"
    );

    let _lock = if options.dry_run {
        None
    } else {
        StagingLock::acquire(&options.staging_dir)?
    };
    debug!(?options, "build options");

    let use_case = create_build_use_case(options.dry_run);
    let report = use_case.execute(&list.descriptors, &list.bundles, &options);

    print!(
        "{}",
        render_report(&report, OutputFormat::from_json_flag(json))
    );
    Ok(report.exit_code())
}

fn apply_args(options: &mut BuildOptions, args: &BuildArgs, cwd: &Path) {
    if let Some(root) = &args.bundles_root {
        options.bundles_root = cwd.join(root);
    }
    if let Some(platform) = args.platform {
        options.platform = platform;
    }
    if let Some(policy) = args.on_failure {
        options.failure_policy = policy;
    }
    if args.verify_outputs {
        options.verify_outputs = true;
    }
    options.dry_run = args.dry_run;
    options.skip = PhaseSkips {
        stage: args.skip_stage,
        optimize: args.skip_optimize,
        rewrite: args.skip_rewrite,
        publish: args.skip_publish,
    };
}
