//! Logging setup
//!
//! All log output goes to stderr through `tracing-subscriber`; stdout is
//! reserved for the final `Done.` line or the JSON report.
//!
//! The filter comes from `PAGEBUILD_LOG`, then `RUST_LOG`, then the CLI
//! verbosity.

use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a log filter directive
pub const LOG_ENV_VAR: &str = "PAGEBUILD_LOG";

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map `-q` / `-v` counts to a verbosity
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }

    /// Default filter directive when no environment override is set
    pub fn directive(&self) -> String {
        format!("pagebuild={}", self.level())
    }
}

/// Initialize the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: Verbosity) {
    let filter = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.directive()));

    let use_ansi = std::io::stderr().is_terminal();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi);

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if verbosity == Verbosity::Debug {
        registry.with(fmt_layer).try_init()
    } else {
        registry.with(fmt_layer.without_time()).try_init()
    };
}
