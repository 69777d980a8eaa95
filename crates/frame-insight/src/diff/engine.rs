//! Core comparison engine.
//! Matches functions across two sessions by (name, thread id) and
//! classifies each pairing.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::analysis::issue::Severity;
use crate::parser::schema::{FunctionKey, FunctionRecord, ProfileSession};
use crate::utils::config::NOISE_FLOOR_MS;

use super::normalizer::{classify_change, metric_delta, ChangeKind};
use super::schema::{ComparisonResult, Improvement, NewFunction, Regression, RemovedFunction};

/// **Public** - Compare a baseline session against a current session
///
/// # Arguments
/// * `baseline` - The session to compare against
/// * `current` - The session under test
///
/// # Returns
/// A `ComparisonResult` with regressions sorted most severe first. The
/// `baseline`, `current` and `generated_at` fields are left empty for the
/// caller to fill in.
///
/// # Example
/// ```ignore
/// use frame_insight::diff::compare_profiles;
/// use frame_insight::parser::load_session;
///
/// let baseline = load_session("before.json", None)?;
/// let current = load_session("after.json", None)?;
/// let result = compare_profiles(&baseline, &current);
/// ```
pub fn compare_profiles(baseline: &ProfileSession, current: &ProfileSession) -> ComparisonResult {
    // Duplicate keys in the baseline: the last occurrence wins
    let baseline_map: HashMap<FunctionKey<'_>, &FunctionRecord> =
        baseline.functions.iter().map(|f| (f.key(), f)).collect();

    let mut consumed: HashSet<FunctionKey<'_>> = HashSet::new();
    let mut regressions = Vec::new();
    let mut improvements = Vec::new();
    let mut new_functions = Vec::new();

    for curr in &current.functions {
        let key = curr.key();
        let matched = baseline_map
            .get(&key)
            .filter(|_| !consumed.contains(&key))
            .copied();

        match matched {
            Some(base) => {
                consumed.insert(key);
                match compare_pair(base, curr) {
                    Pairing::Regression(r) => regressions.push(r),
                    Pairing::Improvement(i) => improvements.push(i),
                    Pairing::Unchanged => {}
                }
            }
            None if curr.total_time_ms > NOISE_FLOOR_MS => {
                new_functions.push(NewFunction {
                    function: curr.function_name.clone(),
                    thread_name: curr.thread_name.clone(),
                    thread_id: curr.thread_id,
                    total_ms: curr.total_time_ms,
                    avg_ms: curr.avg_time_per_frame_ms,
                });
            }
            None => {}
        }
    }

    let removed_functions: Vec<RemovedFunction> = baseline
        .functions
        .iter()
        .filter(|f| {
            let key = f.key();
            !consumed.contains(&key)
                && baseline_map
                    .get(&key)
                    .is_some_and(|winner| std::ptr::eq(*winner, *f))
        })
        .filter(|f| f.total_time_ms > NOISE_FLOOR_MS)
        .map(|f| RemovedFunction {
            function: f.function_name.clone(),
            thread_name: f.thread_name.clone(),
            thread_id: f.thread_id,
            total_ms: f.total_time_ms,
        })
        .collect();

    sort_regressions(&mut regressions);

    let summary = generate_comparison_summary(
        &regressions,
        improvements.len(),
        new_functions.len(),
        removed_functions.len(),
    );

    debug!(
        "Compared {} baseline and {} current functions: {}",
        baseline.functions.len(),
        current.functions.len(),
        summary
    );

    ComparisonResult {
        baseline: None,
        baseline_session: baseline.session_name.clone(),
        current: None,
        current_session: current.session_name.clone(),
        regressions,
        improvements,
        new_functions,
        removed_functions,
        summary,
        generated_at: None,
    }
}

enum Pairing {
    Regression(Regression),
    Improvement(Improvement),
    Unchanged,
}

fn compare_pair(base: &FunctionRecord, curr: &FunctionRecord) -> Pairing {
    let total = metric_delta(base.total_time_ms, curr.total_time_ms);
    let avg = metric_delta(base.avg_time_per_frame_ms, curr.avg_time_per_frame_ms);

    match classify_change(total.percent_change, curr) {
        ChangeKind::Regression(severity) => Pairing::Regression(Regression {
            severity,
            function: curr.function_name.clone(),
            thread_name: curr.thread_name.clone(),
            thread_id: curr.thread_id,
            is_main_thread: curr.is_main_thread,
            baseline_total_ms: base.total_time_ms,
            current_total_ms: curr.total_time_ms,
            total_time_diff_ms: total.diff,
            total_percent_change: total.percent_change,
            baseline_avg_ms: base.avg_time_per_frame_ms,
            current_avg_ms: curr.avg_time_per_frame_ms,
            avg_time_diff_ms: avg.diff,
            avg_percent_change: avg.percent_change,
            baseline_utilization: base.thread_utilization_percent,
            current_utilization: curr.thread_utilization_percent,
        }),
        ChangeKind::Improvement => Pairing::Improvement(Improvement {
            function: curr.function_name.clone(),
            thread_name: curr.thread_name.clone(),
            thread_id: curr.thread_id,
            baseline_total_ms: base.total_time_ms,
            current_total_ms: curr.total_time_ms,
            total_time_diff_ms: total.diff,
            total_percent_change: total.percent_change,
            avg_percent_change: avg.percent_change,
        }),
        ChangeKind::Unchanged => Pairing::Unchanged,
    }
}

/// Sort by severity (critical first), then by percent change descending
fn sort_regressions(regressions: &mut [Regression]) {
    regressions.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| b.total_percent_change.total_cmp(&a.total_percent_change))
    });
}

fn generate_comparison_summary(
    regressions: &[Regression],
    improvements: usize,
    new_functions: usize,
    removed_functions: usize,
) -> String {
    let critical = regressions
        .iter()
        .filter(|r| r.severity == Severity::Critical)
        .count();

    format!(
        "Found {} regressions ({} critical), {} improvements, {} new functions, {} removed functions",
        regressions.len(),
        critical,
        improvements,
        new_functions,
        removed_functions
    )
}
