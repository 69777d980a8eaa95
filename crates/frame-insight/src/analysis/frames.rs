//! Frame-budget issue detection.
//!
//! Main-thread functions are checked against the 30 and 60 FPS budgets;
//! every function is checked for erratic per-frame cost. Sessions without
//! per-frame data (`total_frames == 0`) or without functions produce nothing.

use super::issue::{IssueCategory, PerformanceIssue, Severity};
use crate::parser::schema::{FunctionRecord, ProfileSession};
use crate::utils::config::{
    FRAME_BUDGET_30FPS_MS, FRAME_BUDGET_60FPS_MS, INCONSISTENT_MIN_AVG_MS,
    INCONSISTENT_VARIANCE_RATIO,
};
use log::debug;

/// Scan a session for frame-budget problems
pub fn detect_frame_issues(session: &ProfileSession) -> Vec<PerformanceIssue> {
    let mut issues = Vec::new();

    if session.total_frames == 0 || session.functions.is_empty() {
        debug!("Frame detector skipped: session has no frame data");
        return issues;
    }

    for function in &session.functions {
        if function.is_main_thread {
            check_frame_budget(function, &mut issues);
        }
        check_consistency(function, &mut issues);
    }

    issues.push(session_info(session));
    issues
}

fn check_frame_budget(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    if f.max_time_per_frame_ms > FRAME_BUDGET_30FPS_MS {
        issues.push(PerformanceIssue {
            severity: Severity::Critical,
            category: IssueCategory::MainThreadFrameSpike,
            description: format!(
                "Function '{}' causes critical frame spikes on main thread",
                f.function_name
            ),
            impact: format!(
                "Max {:.2}ms per frame (target: {}ms for 60fps), avg {:.2}ms",
                f.max_time_per_frame_ms, FRAME_BUDGET_60FPS_MS, f.avg_time_per_frame_ms
            ),
            suggestion: "This blocks the main thread and causes stuttering. Move to worker thread or optimize urgently".to_string(),
            value: f.max_time_per_frame_ms,
        });
    } else if f.max_time_per_frame_ms > FRAME_BUDGET_60FPS_MS {
        issues.push(PerformanceIssue {
            severity: Severity::High,
            category: IssueCategory::FrameBudgetExceeded,
            description: format!(
                "Function '{}' on main thread exceeds 60fps budget",
                f.function_name
            ),
            impact: format!(
                "Max {:.2}ms per frame (target: {}ms), avg {:.2}ms",
                f.max_time_per_frame_ms, FRAME_BUDGET_60FPS_MS, f.avg_time_per_frame_ms
            ),
            suggestion: "Optimize or move to worker thread to maintain 60fps".to_string(),
            value: f.max_time_per_frame_ms,
        });
    }
}

fn check_consistency(f: &FunctionRecord, issues: &mut Vec<PerformanceIssue>) {
    let variance = f.frame_variance();
    if variance > INCONSISTENT_VARIANCE_RATIO && f.avg_time_per_frame_ms > INCONSISTENT_MIN_AVG_MS {
        issues.push(PerformanceIssue {
            severity: Severity::Medium,
            category: IssueCategory::InconsistentPerformance,
            description: format!(
                "Function '{}' has highly variable frame times",
                f.function_name
            ),
            impact: format!(
                "Max/Avg ratio: {:.1}x (max: {:.2}ms, avg: {:.2}ms)",
                variance, f.max_time_per_frame_ms, f.avg_time_per_frame_ms
            ),
            suggestion: "Inconsistent performance causes stuttering. Investigate what causes occasional slowdowns".to_string(),
            value: variance,
        });
    }
}

fn session_info(session: &ProfileSession) -> PerformanceIssue {
    PerformanceIssue {
        severity: Severity::Info,
        category: IssueCategory::SessionInfo,
        description: format!("Profiling session: {}", session.session_name),
        impact: format!(
            "Captured {} frames with {} unique functions",
            session.total_frames,
            session.functions.len()
        ),
        suggestion: "Analysis based on this profiling session".to_string(),
        value: session.total_frames as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_fn(name: &str, max_ms: f64, avg_ms: f64) -> FunctionRecord {
        FunctionRecord {
            function_name: name.to_string(),
            is_main_thread: true,
            max_time_per_frame_ms: max_ms,
            avg_time_per_frame_ms: avg_ms,
            ..Default::default()
        }
    }

    fn session(frames: u64, functions: Vec<FunctionRecord>) -> ProfileSession {
        ProfileSession {
            session_name: "Arena".to_string(),
            total_frames: frames,
            total_functions: Some(999),
            functions,
        }
    }

    #[test]
    fn test_no_frames_no_issues() {
        let s = session(0, vec![main_fn("Tick", 50.0, 20.0)]);
        assert!(detect_frame_issues(&s).is_empty());
    }

    #[test]
    fn test_empty_functions_no_issues() {
        assert!(detect_frame_issues(&session(10, vec![])).is_empty());
    }

    #[test]
    fn test_session_info_appended_last() {
        let issues = detect_frame_issues(&session(10, vec![main_fn("Idle", 1.0, 1.0)]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].impact, "Captured 10 frames with 1 unique functions");
    }

    #[test]
    fn test_budget_checks_are_exclusive() {
        let s = session(
            60,
            vec![main_fn("Heavy", 40.0, 30.0), main_fn("Medium", 20.0, 15.0)],
        );

        let issues = detect_frame_issues(&s);
        assert_eq!(issues[0].category, IssueCategory::MainThreadFrameSpike);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[1].category, IssueCategory::FrameBudgetExceeded);
        assert_eq!(issues[1].severity, Severity::High);
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.description.contains("'Heavy'"))
                .count(),
            1
        );
    }

    #[test]
    fn test_worker_thread_skips_budget_but_not_variance() {
        let worker = FunctionRecord {
            is_main_thread: false,
            ..main_fn("Streaming", 60.0, 2.0)
        };

        let issues = detect_frame_issues(&session(60, vec![worker]));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].category, IssueCategory::InconsistentPerformance);
        assert!((issues[0].value - 60.0 / 2.001).abs() < 1e-9);
    }

    #[test]
    fn test_variance_needs_meaningful_average() {
        let tiny = main_fn("Tiny", 10.0, 0.5);
        let issues = detect_frame_issues(&session(60, vec![tiny]));
        assert!(issues
            .iter()
            .all(|i| i.category != IssueCategory::InconsistentPerformance));
    }

    #[test]
    fn test_session_info_counts_listed_functions() {
        let s = session(120, vec![main_fn("A", 1.0, 1.0), main_fn("B", 1.0, 1.0)]);
        let info = detect_frame_issues(&s).pop().unwrap();

        assert_eq!(info.category, IssueCategory::SessionInfo);
        assert_eq!(info.impact, "Captured 120 frames with 2 unique functions");
        assert_eq!(info.value, 120.0);
    }
}
