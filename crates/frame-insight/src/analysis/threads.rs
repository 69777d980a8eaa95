//! Thread-level issue detection.
//!
//! Functions are rolled up per thread, then each thread is checked for
//! saturation and the main/render pair for imbalance.

use super::issue::{IssueCategory, PerformanceIssue, Severity};
use crate::parser::schema::{FunctionRecord, ProfileSession};
use crate::utils::config::{
    THREAD_BALANCE_MAX_RATIO, THREAD_BALANCE_MIN_RATIO, THREAD_SATURATION_PERCENT,
};
use log::debug;
use std::collections::HashMap;

/// Per-thread rollup, rebuilt on every detector call
#[derive(Debug, Clone)]
pub struct ThreadStats<'a> {
    pub thread_name: String,
    pub thread_id: i64,
    pub is_main_thread: bool,
    pub is_render_thread: bool,

    /// Sum of member functions' total time (ms)
    pub total_time: f64,

    /// Highest utilization among member functions
    pub max_utilization: f64,

    pub functions: Vec<&'a FunctionRecord>,
}

impl<'a> ThreadStats<'a> {
    fn new(first: &'a FunctionRecord) -> Self {
        Self {
            thread_name: first.thread_name.clone(),
            thread_id: first.thread_id,
            is_main_thread: first.is_main_thread,
            is_render_thread: first.is_render_thread,
            total_time: 0.0,
            max_utilization: 0.0,
            functions: Vec::new(),
        }
    }

    fn add(&mut self, function: &'a FunctionRecord) {
        self.total_time += function.total_time_ms;
        if function.thread_utilization_percent > self.max_utilization {
            self.max_utilization = function.thread_utilization_percent;
        }
        self.functions.push(function);
    }
}

/// Group functions by `"{thread_name} (ID:{thread_id})"`, in first-seen order
pub fn collect_thread_stats(session: &ProfileSession) -> Vec<ThreadStats<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut threads: Vec<ThreadStats<'_>> = Vec::new();

    for function in &session.functions {
        let key = format!("{} (ID:{})", function.thread_name, function.thread_id);
        let slot = *index.entry(key).or_insert_with(|| {
            threads.push(ThreadStats::new(function));
            threads.len() - 1
        });
        threads[slot].add(function);
    }

    threads
}

/// Scan a session for thread saturation and main/render imbalance
pub fn detect_thread_issues(session: &ProfileSession) -> Vec<PerformanceIssue> {
    let threads = collect_thread_stats(session);
    debug!("Thread detector: {} distinct threads", threads.len());

    let mut issues = Vec::new();
    let mut main_thread_time = 0.0;
    let mut render_thread_time = 0.0;

    for stats in &threads {
        if stats.is_main_thread {
            main_thread_time = stats.total_time;
        }
        if stats.is_render_thread {
            render_thread_time = stats.total_time;
        }

        if stats.max_utilization > THREAD_SATURATION_PERCENT {
            let severity = if stats.is_main_thread || stats.is_render_thread {
                Severity::High
            } else {
                Severity::Medium
            };

            issues.push(PerformanceIssue {
                severity,
                category: IssueCategory::ThreadSaturation,
                description: format!("Thread '{}' is heavily saturated", stats.thread_name),
                impact: format!(
                    "{:.1}% utilization with {:.2}ms total work across {} functions",
                    stats.max_utilization,
                    stats.total_time,
                    stats.functions.len()
                ),
                suggestion: "Thread is running at capacity. Consider redistributing work or optimizing top functions".to_string(),
                value: stats.max_utilization,
            });
        }
    }

    if main_thread_time > 0.0 && render_thread_time > 0.0 {
        let ratio = main_thread_time / render_thread_time;
        if ratio > THREAD_BALANCE_MAX_RATIO || ratio < THREAD_BALANCE_MIN_RATIO {
            issues.push(PerformanceIssue {
                severity: Severity::Medium,
                category: IssueCategory::ThreadBalance,
                description: "Imbalance between main thread and render thread".to_string(),
                impact: format!(
                    "Main thread: {:.2}ms, Render thread: {:.2}ms (ratio: {:.2}:1)",
                    main_thread_time, render_thread_time, ratio
                ),
                suggestion: "Consider redistributing work between main and render threads for better parallelization".to_string(),
                value: ratio,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_thread(name: &str, thread: &str, id: i64, total_ms: f64, util: f64) -> FunctionRecord {
        FunctionRecord {
            function_name: name.to_string(),
            thread_name: thread.to_string(),
            thread_id: id,
            total_time_ms: total_ms,
            thread_utilization_percent: util,
            ..Default::default()
        }
    }

    fn session(functions: Vec<FunctionRecord>) -> ProfileSession {
        ProfileSession {
            functions,
            ..Default::default()
        }
    }

    #[test]
    fn test_rollup_sums_and_maxes() {
        let s = session(vec![
            on_thread("A", "Worker", 3, 10.0, 20.0),
            on_thread("B", "Worker", 3, 5.0, 60.0),
            on_thread("C", "Worker", 4, 1.0, 99.0),
        ]);

        let threads = collect_thread_stats(&s);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].total_time, 15.0);
        assert_eq!(threads[0].max_utilization, 60.0);
        assert_eq!(threads[0].functions.len(), 2);
        assert_eq!(threads[1].thread_id, 4);
    }

    #[test]
    fn test_saturation_severity_by_role() {
        let mut main = on_thread("Tick", "Game", 1, 10.0, 95.0);
        main.is_main_thread = true;
        let worker = on_thread("Job", "Pool", 2, 10.0, 91.0);

        let issues = detect_thread_issues(&session(vec![main, worker]));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[1].severity, Severity::Medium);
        assert_eq!(issues[1].value, 91.0);
    }

    #[test]
    fn test_balance_ratio_outside_band() {
        let mut main = on_thread("Tick", "Game", 1, 300.0, 10.0);
        main.is_main_thread = true;
        let mut render = on_thread("Draw", "Render", 2, 100.0, 10.0);
        render.is_render_thread = true;

        let issues = detect_thread_issues(&session(vec![main, render]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::ThreadBalance);
        assert_eq!(issues[0].value, 3.0);
    }

    #[test]
    fn test_balance_ratio_below_band() {
        let mut main = on_thread("Tick", "Game", 1, 40.0, 10.0);
        main.is_main_thread = true;
        let mut render = on_thread("Draw", "Render", 2, 100.0, 10.0);
        render.is_render_thread = true;

        let issues = detect_thread_issues(&session(vec![main, render]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::ThreadBalance);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].value, 0.4);
        assert!(issues[0].impact.contains("(ratio: 0.40:1)"));
    }

    #[test]
    fn test_balanced_threads_are_quiet() {
        let mut main = on_thread("Tick", "Game", 1, 150.0, 10.0);
        main.is_main_thread = true;
        let mut render = on_thread("Draw", "Render", 2, 100.0, 10.0);
        render.is_render_thread = true;

        assert!(detect_thread_issues(&session(vec![main, render])).is_empty());
    }

    #[test]
    fn test_missing_render_thread_skips_balance() {
        let mut main = on_thread("Tick", "Game", 1, 500.0, 10.0);
        main.is_main_thread = true;

        assert!(detect_thread_issues(&session(vec![main])).is_empty());
    }

    #[test]
    fn test_empty_session() {
        assert!(detect_thread_issues(&session(vec![])).is_empty());
    }
}
