//! Output Rendering
//!
//! Text output ends with the `Done.` line; JSON output is a single pretty
//! printed document. Both go to stdout, logs go to stderr.

use std::fmt::Write as _;

use serde_json::json;

use crate::application::BuildReport;
use crate::infrastructure::TargetList;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a finished build
pub fn render_report(report: &BuildReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_report_text(report),
        OutputFormat::Json => {
            let value = json!({
                "success": report.is_success(),
                "exit_code": report.exit_code(),
                "failures": report.failure_count(),
                "report": report,
            });
            to_pretty(&value)
        }
    }
}

fn render_report_text(report: &BuildReport) -> String {
    let mut out = String::new();

    if report.failure_count() > 0 {
        let _ = writeln!(out, "Failures ({}):", report.failure_count());
        for step in report.failures() {
            if let Some(err) = &step.error {
                let _ = writeln!(out, "  [{}] {}: {}", step.phase, step.subject, err);
            }
        }
    }

    if !report.skipped_phases.is_empty() {
        let skipped: Vec<&str> = report.skipped_phases.iter().map(|p| p.as_str()).collect();
        let _ = writeln!(out, "Skipped: {}", skipped.join(", "));
    }

    if let Some(phase) = report.aborted_after {
        let _ = writeln!(out, "Stopped after {} phase", phase);
    }

    out.push_str("Done.\n");
    out
}

/// Render a loaded target list (the `targets` command)
pub fn render_targets(list: &TargetList, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Targets ({}):", list.descriptors.len());
            for target in &list.descriptors {
                let _ = writeln!(out, "  {}", target);
            }
            let bundles: Vec<&str> = list.bundles.iter().map(|b| b.as_str()).collect();
            let _ = writeln!(out, "Bundles ({}): {}", bundles.len(), bundles.join(", "));
            for warning in &list.warnings {
                let _ = writeln!(out, "[!] {}", warning);
            }
            out
        }
        OutputFormat::Json => {
            let value = json!({
                "targets": list.descriptors,
                "bundles": list.bundles.iter().map(|b| b.as_str()).collect::<Vec<_>>(),
                "warnings": list.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
            });
            to_pretty(&value)
        }
    }
}

fn to_pretty(value: &serde_json::Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}
