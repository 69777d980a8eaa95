//! Rank functions by total time and attach per-function advice.
//!
//! Hotspots are the functions that consume the most time across the whole
//! session. These are the primary targets for optimization.

use crate::parser::schema::{FunctionRecord, ProfileSession};
use crate::suggestions::hotspot_suggestions;
use log::debug;
use serde::{Deserialize, Serialize};

/// One ranked hotspot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// 1-indexed rank
    pub rank: usize,
    pub function_name: String,
    pub thread_name: String,
    pub thread_id: i64,
    pub is_main_thread: bool,
    pub is_render_thread: bool,
    pub total_time_ms: f64,
    pub avg_time_per_frame_ms: f64,
    pub max_time_per_frame_ms: f64,
    pub total_count: u64,
    pub avg_count_per_frame: f64,
    pub avg_time_per_call_ms: f64,
    pub thread_utilization: f64,
    pub suggestions: Vec<String>,
}

/// Output of `find_hotspots`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Effective count after clamping to the number of functions
    pub top_n: usize,
    pub hotspots: Vec<Hotspot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// Rank the `top_n` most expensive functions
///
/// # Arguments
/// * `session` - Parsed session
/// * `top_n` - Number of hotspots to return; clamped to the function count
///
/// # Returns
/// Report with hotspots sorted by total time (descending, ties keep input order)
pub fn find_hotspots(session: &ProfileSession, top_n: usize) -> HotspotReport {
    let top_n = top_n.min(session.functions.len());

    debug!(
        "Ranking top {} hotspots from {} functions",
        top_n,
        session.functions.len()
    );

    let hotspots = rank_by_total_time(&session.functions)
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(index, function)| create_hotspot(index + 1, function))
        .collect();

    HotspotReport {
        file: None,
        top_n,
        hotspots,
        generated_at: None,
    }
}

/// Functions ordered by total time, descending; stable for ties
pub fn rank_by_total_time(functions: &[FunctionRecord]) -> Vec<&FunctionRecord> {
    let mut ranked: Vec<&FunctionRecord> = functions.iter().collect();
    ranked.sort_by(|a, b| b.total_time_ms.total_cmp(&a.total_time_ms));
    ranked
}

/// Create a Hotspot from a FunctionRecord
pub fn create_hotspot(rank: usize, f: &FunctionRecord) -> Hotspot {
    Hotspot {
        rank,
        function_name: f.function_name.clone(),
        thread_name: f.thread_name.clone(),
        thread_id: f.thread_id,
        is_main_thread: f.is_main_thread,
        is_render_thread: f.is_render_thread,
        total_time_ms: f.total_time_ms,
        avg_time_per_frame_ms: f.avg_time_per_frame_ms,
        max_time_per_frame_ms: f.max_time_per_frame_ms,
        total_count: f.total_count,
        avg_count_per_frame: f.avg_count_per_frame,
        avg_time_per_call_ms: f.avg_time_per_call_ms(),
        thread_utilization: f.thread_utilization_percent,
        suggestions: hotspot_suggestions(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, total_ms: f64) -> FunctionRecord {
        FunctionRecord {
            function_name: name.to_string(),
            total_time_ms: total_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let functions = vec![func("first", 5.0), func("big", 9.0), func("second", 5.0)];
        let ranked = rank_by_total_time(&functions);
        let names: Vec<&str> = ranked.iter().map(|f| f.function_name.as_str()).collect();
        assert_eq!(names, vec!["big", "first", "second"]);
    }

    #[test]
    fn test_hotspot_with_saturated_call_count() {
        let record = FunctionRecord {
            function_name: "Spin".to_string(),
            total_time_ms: 250.0,
            total_count: u64::MAX,
            ..Default::default()
        };

        let hotspot = create_hotspot(1, &record);
        assert_eq!(hotspot.total_count, u64::MAX);
        assert!(hotspot.avg_time_per_call_ms.is_finite());
        assert!(!hotspot.suggestions.is_empty());
    }
}
