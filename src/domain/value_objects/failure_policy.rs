//! Failure policy - how absorbed step failures affect the run

use serde::{Deserialize, Serialize};

/// What the driver does when a step fails
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log and keep going; the run reports success
    #[default]
    Continue,
    /// Keep going, but the run reports failure at the end
    Report,
    /// Stop after the first phase that recorded a failure
    Abort,
}

impl FailurePolicy {
    /// Whether the driver should stop once a phase has failures
    pub fn stops_after_failed_phase(&self) -> bool {
        matches!(self, FailurePolicy::Abort)
    }

    /// Whether step failures turn into a failing exit status
    pub fn fails_run(&self) -> bool {
        !matches!(self, FailurePolicy::Continue)
    }

    /// Parse from an environment/CLI string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Some(FailurePolicy::Continue),
            "report" => Some(FailurePolicy::Report),
            "abort" => Some(FailurePolicy::Abort),
            _ => None,
        }
    }
}
