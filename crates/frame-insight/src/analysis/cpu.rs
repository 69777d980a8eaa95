//! CPU issue detection over per-function aggregates.
//!
//! Four independent rules per function: hotspot, call frequency, frame
//! spike and thread saturation. A function may trip several of them.

use super::issue::{IssueCategory, PerformanceIssue, Severity};
use crate::parser::schema::{FunctionRecord, ProfileSession};
use crate::suggestions::issue_suggestion;
use crate::utils::config::{
    FRAME_BUDGET_60FPS_MS, FREQUENT_CALL_COUNT, FREQUENT_CALL_TOTAL_MS, HOTSPOT_CRITICAL_TOTAL_MS,
    HOTSPOT_TOTAL_MS, SATURATION_UTILIZATION_PERCENT, SPIKE_MIN_CALL_COUNT,
};
use log::debug;

/// Scan every function for CPU-side problems
///
/// Order of the result follows the function list; callers sort.
pub fn detect_cpu_issues(session: &ProfileSession) -> Vec<PerformanceIssue> {
    let mut issues = Vec::new();

    for function in &session.functions {
        check_hotspot(function, &mut issues);
        check_call_frequency(function, &mut issues);
        check_frame_spike(function, &mut issues);
        check_saturation(function, &mut issues);
    }

    debug!(
        "CPU detector: {} issues from {} functions",
        issues.len(),
        session.functions.len()
    );
    issues
}

fn check_hotspot(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    if f.total_time_ms <= HOTSPOT_TOTAL_MS {
        return;
    }

    let mut severity = if f.total_time_ms > HOTSPOT_CRITICAL_TOTAL_MS {
        Severity::Critical
    } else {
        Severity::High
    };

    let thread_info = if f.is_main_thread {
        // Main-thread cost always blocks rendering
        severity = Severity::Critical;
        format!("{} (MAIN THREAD - blocks rendering!)", f.thread_name)
    } else if f.is_render_thread {
        format!("{} (RENDER THREAD - affects FPS!)", f.thread_name)
    } else {
        f.thread_name.clone()
    };

    issues.push(PerformanceIssue {
        severity,
        category: IssueCategory::CpuHotspot,
        description: format!(
            "Function '{}' on {} consumes excessive CPU time",
            f.function_name, thread_info
        ),
        impact: format!(
            "{:.2}ms total ({:.2}ms avg/frame), {} total calls, {:.1}% thread utilization",
            f.total_time_ms, f.avg_time_per_frame_ms, f.total_count, f.thread_utilization_percent
        ),
        suggestion: issue_suggestion(f),
        value: f.total_time_ms,
    });
}

fn check_call_frequency(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    if f.total_count > FREQUENT_CALL_COUNT && f.total_time_ms > FREQUENT_CALL_TOTAL_MS {
        issues.push(PerformanceIssue {
            severity: Severity::Medium,
            category: IssueCategory::CallFrequency,
            description: format!(
                "Function '{}' called very frequently on {}",
                f.function_name, f.thread_name
            ),
            impact: format!(
                "{} total calls ({:.1} avg/frame), {:.2}ms total time",
                f.total_count, f.avg_count_per_frame, f.total_time_ms
            ),
            suggestion: "Consider caching results, batching calls, or reducing call frequency"
                .to_string(),
            value: f.total_count as f64,
        });
    }
}

fn check_frame_spike(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    // Longer than one frame at 60 FPS
    if f.max_time_per_frame_ms > FRAME_BUDGET_60FPS_MS && f.total_count > SPIKE_MIN_CALL_COUNT {
        issues.push(PerformanceIssue {
            severity: Severity::High,
            category: IssueCategory::FrameSpike,
            description: format!("Function '{}' causes frame spikes", f.function_name),
            impact: format!(
                "Max {:.2}ms in single frame (avg: {:.2}ms) on {}",
                f.max_time_per_frame_ms, f.avg_time_per_frame_ms, f.thread_name
            ),
            suggestion: "Investigate why this function occasionally takes much longer. Consider spreading work across frames".to_string(),
            value: f.max_time_per_frame_ms,
        });
    }
}

fn check_saturation(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    if f.thread_utilization_percent > SATURATION_UTILIZATION_PERCENT
        && f.total_time_ms > HOTSPOT_TOTAL_MS
    {
        issues.push(PerformanceIssue {
            severity: Severity::Critical,
            category: IssueCategory::ThreadSaturation,
            description: format!("Function '{}' saturates {}", f.function_name, f.thread_name),
            impact: format!(
                "{:.1}% thread utilization, {:.2}ms total time",
                f.thread_utilization_percent, f.total_time_ms
            ),
            suggestion: "Thread is completely saturated. Critical optimization needed or work redistribution to other threads".to_string(),
            value: f.thread_utilization_percent,
        });
    }
}
