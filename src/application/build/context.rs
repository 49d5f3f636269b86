//! Shared collaborators for the pipeline components

use crate::domain::ports::{FileSystem, ProcessRunner};
use crate::infrastructure::copy::CopyStrategy;

use super::options::BuildOptions;

/// What every component borrows: ports, copy adapter, options
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub runner: &'a dyn ProcessRunner,
    pub fs: &'a dyn FileSystem,
    pub copy: &'a dyn CopyStrategy,
    pub options: &'a BuildOptions,
}
