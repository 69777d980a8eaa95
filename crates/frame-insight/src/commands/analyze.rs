//! Analyze command implementation.
//!
//! Loads one session, runs the detectors selected by the focus and emits
//! the ranked issue report.

use super::models::AnalyzeArgs;
use super::utils::{emit_report, timestamp};
use crate::analysis::{analyze_performance, PerformanceReport};
use crate::output::render_performance_report;
use crate::parser::load_session;
use anyhow::{Context, Result};
use log::info;

/// Build the performance report for `args.file`
///
/// **Public** - shared by the CLI and the tool dispatcher
///
/// # Errors
/// * Session file missing or malformed
pub fn run_analyze(args: &AnalyzeArgs) -> Result<PerformanceReport> {
    let session = load_session(&args.file, args.data_dir.as_deref())
        .with_context(|| format!("Failed to load session {}", args.file))?;

    let mut report = analyze_performance(&session, args.focus);
    report.file = Some(args.file.clone());
    report.generated_at = Some(timestamp());

    info!(
        "Analyzed {} ({} focus): {} issues",
        args.file, args.focus, report.issues_found
    );

    Ok(report)
}

/// Execute the analyze command
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let report = run_analyze(&args)?;
    emit_report(&report, args.output.as_ref(), args.summary, render_performance_report)
}
