//! Build Report
//!
//! Every step the driver runs ends up here, successful or not. Failures are
//! absorbed where they happen; the report decides at the end what they mean
//! for the run.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::domain::value_objects::{FailurePolicy, Phase};
use crate::error::{PipelineError, PipelineResult};

/// Outcome of one step (one bundle, one target or one command)
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub phase: Phase,
    /// What the step worked on (bundle name, target module, directory)
    pub subject: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<PipelineError>,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

fn serialize_error<S: Serializer>(
    error: &Option<PipelineError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Result of a build run
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub policy: FailurePolicy,
    pub dry_run: bool,
    pub steps: Vec<StepReport>,
    /// Phases not run because they were skipped by request
    pub skipped_phases: Vec<Phase>,
    /// Set when the abort policy stopped the run after this phase
    pub aborted_after: Option<Phase>,
}

impl BuildReport {
    pub fn new(policy: FailurePolicy, dry_run: bool) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            policy,
            dry_run,
            steps: Vec::new(),
            skipped_phases: Vec::new(),
            aborted_after: None,
        }
    }

    /// Record a step outcome; returns whether it succeeded
    pub fn record<T>(
        &mut self,
        phase: Phase,
        subject: impl Into<String>,
        result: PipelineResult<T>,
    ) -> bool {
        let error = result.err();
        let ok = error.is_none();
        self.steps.push(StepReport {
            phase,
            subject: subject.into(),
            error,
        });
        ok
    }

    pub fn skip_phase(&mut self, phase: Phase) {
        self.skipped_phases.push(phase);
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Steps recorded for a phase
    pub fn steps_in(&self, phase: Phase) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(move |s| s.phase == phase)
    }

    pub fn phase_failed(&self, phase: Phase) -> bool {
        self.steps_in(phase).any(|s| !s.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(StepReport::is_success)
    }

    /// Process exit code under the report's failure policy
    pub fn exit_code(&self) -> i32 {
        if self.policy.fails_run() && !self.is_success() {
            1
        } else {
            0
        }
    }
}
