//! Compare command implementation.
//! Orchestrates the comparison of two sessions and reports the deltas.

use super::models::CompareArgs;
use super::utils::{emit_report, timestamp};
use crate::diff::{compare_profiles, render_terminal_diff, ComparisonResult};
use crate::parser::load_session;
use anyhow::{Context, Result};
use log::info;

/// Build the comparison of `args.baseline` against `args.current`
pub fn run_compare(args: &CompareArgs) -> Result<ComparisonResult> {
    let data_dir = args.data_dir.as_deref();

    // Step 1: Load sessions
    let baseline = load_session(&args.baseline, data_dir)
        .with_context(|| format!("Failed to load baseline session {}", args.baseline))?;
    let current = load_session(&args.current, data_dir)
        .with_context(|| format!("Failed to load current session {}", args.current))?;

    // Step 2: Compare
    let mut result = compare_profiles(&baseline, &current);
    result.baseline = Some(args.baseline.clone());
    result.current = Some(args.current.clone());
    result.generated_at = Some(timestamp());

    info!("{}", result.summary);

    Ok(result)
}

/// Execute the compare command
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let result = run_compare(&args)?;
    emit_report(&result, args.output.as_ref(), args.summary, render_terminal_diff)
}
