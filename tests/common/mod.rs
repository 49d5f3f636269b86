#![allow(dead_code)]

//! Common test utilities for pagebuild CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project directory with bundles, a fake optimizer
//!   and a `pagebuild.toml` wired to them
//! - Fixtures: reusable page content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
