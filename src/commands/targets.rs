//! `pagebuild targets`

use std::path::Path;

use anyhow::Result;
use pagebuild::presentation::{render_targets, OutputFormat};

use crate::cli::TargetArgs;

pub fn cmd_targets(
    config: Option<&Path>,
    args: &TargetArgs,
    json: bool,
    cwd: &Path,
) -> Result<()> {
    let loaded = super::load_config(config, cwd)?;
    let staging_dir = super::staging_dir(args, &loaded, cwd);
    let list = super::load_targets(args, &loaded, &staging_dir, cwd)?;

    print!("{}", render_targets(&list, OutputFormat::from_json_flag(json)));
    Ok(())
}
