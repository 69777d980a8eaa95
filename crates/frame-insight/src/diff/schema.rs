//! Schema definitions for profile comparisons.
//!
//! Defines the structures that represent differences between two sessions.

use crate::analysis::issue::Severity;
use serde::{Deserialize, Serialize};

/// Complete comparison of a baseline and a current session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Baseline source file, filled in by the command layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,

    pub baseline_session: String,

    /// Current source file, filled in by the command layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    pub current_session: String,

    /// Sorted by severity, then by percent change (largest first)
    pub regressions: Vec<Regression>,
    pub improvements: Vec<Improvement>,
    pub new_functions: Vec<NewFunction>,
    pub removed_functions: Vec<RemovedFunction>,
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// A matched function whose total time grew by more than the noise band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regression {
    pub severity: Severity,
    pub function: String,
    pub thread_name: String,
    pub thread_id: i64,
    pub is_main_thread: bool,
    pub baseline_total_ms: f64,
    pub current_total_ms: f64,
    pub total_time_diff_ms: f64,
    pub total_percent_change: f64,
    pub baseline_avg_ms: f64,
    pub current_avg_ms: f64,
    pub avg_time_diff_ms: f64,
    pub avg_percent_change: f64,
    pub baseline_utilization: f64,
    pub current_utilization: f64,
}

/// A matched function whose total time shrank by more than the noise band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub function: String,
    pub thread_name: String,
    pub thread_id: i64,
    pub baseline_total_ms: f64,
    pub current_total_ms: f64,
    pub total_time_diff_ms: f64,
    pub total_percent_change: f64,
    pub avg_percent_change: f64,
}

/// A function present only in the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFunction {
    pub function: String,
    pub thread_name: String,
    pub thread_id: i64,
    pub total_ms: f64,
    pub avg_ms: f64,
}

/// A function present only in the baseline session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedFunction {
    pub function: String,
    pub thread_name: String,
    pub thread_id: i64,
    pub total_ms: f64,
}
