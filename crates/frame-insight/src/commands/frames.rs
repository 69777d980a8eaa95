//! Frames command implementation.

use super::models::FramesArgs;
use super::utils::{emit_report, timestamp};
use crate::analysis::{analyze_frame_times, FrameTimeReport};
use crate::output::render_frame_report;
use crate::parser::load_session;
use anyhow::{Context, Result};
use log::info;

/// Build the frame-time report for `args.file`
pub fn run_frames(args: &FramesArgs) -> Result<FrameTimeReport> {
    let session = load_session(&args.file, args.data_dir.as_deref())
        .with_context(|| format!("Failed to load session {}", args.file))?;

    let mut report = analyze_frame_times(&session, args.target_fps);
    report.file = Some(args.file.clone());
    report.generated_at = Some(timestamp());

    info!(
        "Estimated {:.1} FPS for {} (target {:.1})",
        report.estimated_fps, args.file, report.target_fps
    );

    Ok(report)
}

/// Execute the frames command
pub fn execute_frames(args: FramesArgs) -> Result<()> {
    let report = run_frames(&args)?;
    emit_report(&report, args.output.as_ref(), args.summary, render_frame_report)
}
