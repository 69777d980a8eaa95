//! Hotspots command implementation.

use super::models::HotspotsArgs;
use super::utils::{emit_report, timestamp};
use crate::hotspots::{find_hotspots, HotspotReport};
use crate::output::render_hotspots;
use crate::parser::load_session;
use anyhow::{Context, Result};
use log::info;

/// Build the hotspot report for `args.file`
pub fn run_hotspots(args: &HotspotsArgs) -> Result<HotspotReport> {
    let session = load_session(&args.file, args.data_dir.as_deref())
        .with_context(|| format!("Failed to load session {}", args.file))?;

    let mut report = find_hotspots(&session, args.top_n);
    report.file = Some(args.file.clone());
    report.generated_at = Some(timestamp());

    info!("Ranked {} hotspots from {}", report.hotspots.len(), args.file);

    Ok(report)
}

/// Execute the hotspots command
pub fn execute_hotspots(args: HotspotsArgs) -> Result<()> {
    let report = run_hotspots(&args)?;
    emit_report(&report, args.output.as_ref(), args.summary, render_hotspots)
}
