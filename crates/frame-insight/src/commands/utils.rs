use crate::output::{report_to_string, write_report};
use crate::parser::load_session;
use crate::utils::config::REPORT_VERSION;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Current time as an RFC 3339 string, stamped on every report
pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Print or write a finished report
///
/// With `output` set the JSON goes to that file. With `summary` set the
/// terminal rendering is printed; otherwise pretty JSON goes to stdout
/// unless it was already written to a file.
pub fn emit_report<T, F>(report: &T, output: Option<&PathBuf>, summary: bool, render: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if let Some(path) = output {
        write_report(report, path).context("Failed to write report JSON")?;
        println!("📊 Report written to {}", path.display().to_string().cyan());
    }

    if summary {
        println!("{}", render(report));
    } else if output.is_none() {
        println!("{}", report_to_string(report)?);
    }

    Ok(())
}

/// Validate a session export and print its shape
pub fn validate_session_file(file: &str, data_dir: Option<&Path>) -> Result<()> {
    println!("Validating session: {}", file);

    let session = load_session(file, data_dir)
        .with_context(|| format!("Failed to load session {}", file))?;

    let main_thread = session.functions.iter().filter(|f| f.is_main_thread).count();
    let mut threads: Vec<i64> = session.functions.iter().map(|f| f.thread_id).collect();
    threads.sort_unstable();
    threads.dedup();

    println!("✓ Valid session JSON");
    println!("  Session: {}", session.session_name);
    println!("  Frames: {}", session.total_frames);
    println!("  Functions: {}", session.functions.len());
    println!("  Threads: {}", threads.len());
    println!("  Main thread functions: {}", main_thread);

    info!("Validated {}", file);
    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Frame Insight v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Format: v{}", REPORT_VERSION);
    println!();
    println!("Performance analysis for FramePro profiling exports.");
}
