//! Frame-rate estimation against a caller-supplied target.
//!
//! Unlike the frame detector, which uses the fixed 60/30 FPS budgets, this
//! analysis derives its budget from `target_fps`.

use crate::parser::schema::{FunctionRecord, ProfileSession};
use crate::utils::config::{
    DEFAULT_TARGET_FPS, FPS_SHORTFALL_FRACTION, INCONSISTENT_MIN_AVG_MS,
    INCONSISTENT_VARIANCE_RATIO, MAX_ESTIMATED_FPS,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// A main-thread function whose worst frame exceeds the target frame time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProblem {
    pub function: String,
    pub max_time_per_frame: f64,
    pub avg_time_per_frame: f64,
    pub thread_utilization: f64,
    pub impact: String,
}

/// Output of `analyze_frame_times`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTimeReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    pub session_name: String,
    pub total_frames: u64,
    #[serde(rename = "targetFPS")]
    pub target_fps: f64,
    #[serde(rename = "estimatedFPS")]
    pub estimated_fps: f64,
    pub main_thread_avg_work_ms: f64,
    pub target_frame_time_ms: f64,
    pub problem_functions: Vec<FrameProblem>,
    pub main_thread_function_count: usize,
    pub analysis: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// Replace a non-finite or non-positive target with the default
pub fn sanitize_target_fps(target_fps: f64) -> f64 {
    if target_fps.is_finite() && target_fps > 0.0 {
        target_fps
    } else {
        DEFAULT_TARGET_FPS
    }
}

/// Estimate achievable FPS from main-thread work and list budget offenders
pub fn analyze_frame_times(session: &ProfileSession, target_fps: f64) -> FrameTimeReport {
    let target_fps = sanitize_target_fps(target_fps);
    let target_frame_time_ms = 1000.0 / target_fps;

    let main_thread: Vec<&FunctionRecord> = session
        .functions
        .iter()
        .filter(|f| f.is_main_thread)
        .collect();

    let problem_functions: Vec<FrameProblem> = main_thread
        .iter()
        .filter(|f| f.max_time_per_frame_ms > target_frame_time_ms)
        .map(|f| FrameProblem {
            function: f.function_name.clone(),
            max_time_per_frame: f.max_time_per_frame_ms,
            avg_time_per_frame: f.avg_time_per_frame_ms,
            thread_utilization: f.thread_utilization_percent,
            impact: "Blocks main thread, causes frame drops".to_string(),
        })
        .collect();

    let stutter_prone = main_thread
        .iter()
        .filter(|f| {
            f.frame_variance() > INCONSISTENT_VARIANCE_RATIO
                && f.avg_time_per_frame_ms > INCONSISTENT_MIN_AVG_MS
        })
        .count();

    let main_thread_avg_work_ms: f64 = main_thread.iter().map(|f| f.avg_time_per_frame_ms).sum();
    let estimated_fps = estimate_fps(main_thread_avg_work_ms);

    debug!(
        "Frame times: {:.1} fps estimated vs {:.1} target, {} over budget",
        estimated_fps,
        target_fps,
        problem_functions.len()
    );

    let analysis = describe_frame_issues(
        problem_functions.len(),
        stutter_prone,
        estimated_fps,
        target_fps,
    );

    FrameTimeReport {
        file: None,
        session_name: session.session_name.clone(),
        total_frames: session.total_frames,
        target_fps,
        estimated_fps,
        main_thread_avg_work_ms,
        target_frame_time_ms,
        problem_functions,
        main_thread_function_count: main_thread.len(),
        analysis,
        generated_at: None,
    }
}

/// FPS implied by a per-frame workload, capped at a sane ceiling
fn estimate_fps(work_ms: f64) -> f64 {
    if work_ms <= 0.0 {
        return MAX_ESTIMATED_FPS;
    }
    (1000.0 / work_ms).min(MAX_ESTIMATED_FPS)
}

fn describe_frame_issues(
    over_budget: usize,
    stutter_prone: usize,
    estimated_fps: f64,
    target_fps: f64,
) -> Vec<String> {
    let mut messages = Vec::new();

    if estimated_fps < target_fps * FPS_SHORTFALL_FRACTION {
        messages.push(format!(
            "FPS is {:.1}% below target - significant optimization needed",
            (1.0 - estimated_fps / target_fps) * 100.0
        ));
    }

    if over_budget > 0 {
        messages.push(format!(
            "{} main thread functions exceeded target frame time",
            over_budget
        ));
    }

    if stutter_prone > 0 {
        messages.push(format!(
            "{} main thread functions show stutter spikes (max/avg > {:.0}x) - investigate sudden workload spikes",
            stutter_prone, INCONSISTENT_VARIANCE_RATIO
        ));
    }

    if messages.is_empty() {
        messages.push("Frame performance is within acceptable parameters".to_string());
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_fn(name: &str, avg_ms: f64, max_ms: f64) -> FunctionRecord {
        FunctionRecord {
            function_name: name.to_string(),
            is_main_thread: true,
            avg_time_per_frame_ms: avg_ms,
            max_time_per_frame_ms: max_ms,
            ..Default::default()
        }
    }

    fn session(functions: Vec<FunctionRecord>) -> ProfileSession {
        ProfileSession {
            session_name: "Bench".to_string(),
            total_frames: 500,
            total_functions: None,
            functions,
        }
    }

    #[test]
    fn test_empty_session_is_acceptable() {
        let report = analyze_frame_times(&session(vec![]), 60.0);
        assert_eq!(report.estimated_fps, 1000.0);
        assert_eq!(report.main_thread_avg_work_ms, 0.0);
        assert!(report.problem_functions.is_empty());
        assert_eq!(
            report.analysis,
            vec!["Frame performance is within acceptable parameters".to_string()]
        );
    }

    #[test]
    fn test_estimated_fps_from_main_thread_work() {
        let worker = FunctionRecord {
            is_main_thread: false,
            ..main_fn("Job", 100.0, 100.0)
        };
        let s = session(vec![main_fn("A", 10.0, 12.0), main_fn("B", 15.0, 18.0), worker]);

        let report = analyze_frame_times(&s, 60.0);
        assert_eq!(report.main_thread_function_count, 2);
        assert_eq!(report.main_thread_avg_work_ms, 25.0);
        assert_eq!(report.estimated_fps, 40.0);
        assert!((report.target_frame_time_ms - 16.666_666).abs() < 1e-3);

        assert_eq!(report.problem_functions.len(), 1);
        assert_eq!(report.problem_functions[0].function, "B");
        assert!(report.analysis[0].starts_with("FPS is 33.3% below target"));
        assert_eq!(
            report.analysis[1],
            "1 main thread functions exceeded target frame time"
        );
    }

    #[test]
    fn test_target_fps_changes_budget() {
        let s = session(vec![main_fn("A", 10.0, 20.0)]);

        let at_60 = analyze_frame_times(&s, 60.0);
        let at_30 = analyze_frame_times(&s, 30.0);
        assert_eq!(at_60.problem_functions.len(), 1);
        assert!(at_30.problem_functions.is_empty());
    }

    #[test]
    fn test_stutter_prone_functions_reported() {
        let s = session(vec![main_fn("Loader", 2.0, 15.0)]);

        let report = analyze_frame_times(&s, 60.0);
        assert_eq!(report.analysis.len(), 1);
        assert!(report.analysis[0].starts_with("1 main thread functions show stutter spikes"));
    }

    #[test]
    fn test_invalid_target_falls_back_to_default() {
        let report = analyze_frame_times(&session(vec![]), 0.0);
        assert_eq!(report.target_fps, 60.0);
        assert_eq!(sanitize_target_fps(f64::NAN), 60.0);
        assert_eq!(sanitize_target_fps(144.0), 144.0);
    }
}
