//! Input JSON schema definitions for FramePro session exports.
//!
//! Both `functions_analysis.json` and `frame_analysis.json` exports share the
//! session header and the aggregated `Functions` array. The per-frame `Frames`
//! array of the latter is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::utils::config::RATIO_EPSILON;

/// One profiling capture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileSession {
    /// Session identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_name: String,

    /// Number of frames captured (0 if not a per-frame export)
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_frames: u64,

    /// Advisory function count written by the exporter; never trusted over `functions.len()`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_functions: Option<u64>,

    /// Aggregated per-function records (required, may be empty)
    pub functions: Vec<FunctionRecord>,
}

/// Aggregate behavior of one function on one thread across the whole session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub function_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_time_ms: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_time_per_frame_ms: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_count_per_frame: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_time_per_frame_ms: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_count_per_frame: f64,

    /// Share of the thread's time spent in this function (0-100)
    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_utilization_percent: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_main_thread: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_render_thread: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_worker_thread: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_priority: i32,
}

impl FunctionRecord {
    /// Identity of this record across sessions
    pub fn key(&self) -> FunctionKey<'_> {
        FunctionKey {
            function_name: &self.function_name,
            thread_id: self.thread_id,
        }
    }

    /// Max/avg per-frame time ratio.
    ///
    /// The epsilon in the denominator is part of the formula, not a guard.
    pub fn frame_variance(&self) -> f64 {
        self.max_time_per_frame_ms / (self.avg_time_per_frame_ms + RATIO_EPSILON)
    }

    /// Average time per call; the `+ 1` keeps zero-call records finite.
    ///
    /// The count is widened before adding so `u64::MAX` cannot overflow.
    pub fn avg_time_per_call_ms(&self) -> f64 {
        self.total_time_ms / (self.total_count as f64 + 1.0)
    }
}

/// Missing and `null` fields both read as the type's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `(function name, thread id)` pair identifying a function across sessions.
///
/// The same function name can appear on several threads, so the name alone
/// is not an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionKey<'a> {
    pub function_name: &'a str,
    pub thread_id: i64,
}

impl fmt::Display for FunctionKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function_name, self.thread_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pascal_case_export() {
        let json = r#"{
            "SessionName": "Level01",
            "TotalFrames": 300,
            "TotalFunctions": 1,
            "Functions": [{
                "FunctionName": "World::Tick",
                "ThreadId": 7,
                "ThreadName": "GameThread",
                "TotalTimeMs": 120.5,
                "TotalCount": 300,
                "MaxTimePerFrameMs": 2.1,
                "MaxCountPerFrame": 1,
                "AvgTimePerFrameMs": 0.4,
                "AvgCountPerFrame": 1.0,
                "ThreadUtilizationPercent": 12.5,
                "IsMainThread": true,
                "IsRenderThread": false,
                "IsWorkerThread": false,
                "ThreadPriority": 2
            }]
        }"#;

        let session: ProfileSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_name, "Level01");
        assert_eq!(session.total_frames, 300);
        assert_eq!(session.total_functions, Some(1));
        assert_eq!(session.functions.len(), 1);

        let record = &session.functions[0];
        assert_eq!(record.function_name, "World::Tick");
        assert_eq!(record.thread_id, 7);
        assert!(record.is_main_thread);
        assert_eq!(record.thread_priority, 2);
    }

    #[test]
    fn test_missing_functions_is_rejected() {
        let json = r#"{ "SessionName": "Empty", "TotalFrames": 10 }"#;
        assert!(serde_json::from_str::<ProfileSession>(json).is_err());
    }

    #[test]
    fn test_frames_array_is_ignored() {
        let json = r#"{
            "SessionName": "PerFrame",
            "TotalFrames": 2,
            "Frames": [{ "FrameNumber": 1, "Functions": [] }],
            "Functions": []
        }"#;
        let session: ProfileSession = serde_json::from_str(json).unwrap();
        assert!(session.functions.is_empty());
        assert_eq!(session.total_functions, None);
    }

    #[test]
    fn test_derived_metrics() {
        let record = FunctionRecord {
            function_name: "f".to_string(),
            total_time_ms: 100.0,
            total_count: 99,
            max_time_per_frame_ms: 10.0,
            avg_time_per_frame_ms: 0.0,
            ..Default::default()
        };

        assert_eq!(record.avg_time_per_call_ms(), 1.0);
        assert!((record.frame_variance() - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_avg_time_per_call_saturated_count() {
        let record = FunctionRecord {
            total_time_ms: 100.0,
            total_count: u64::MAX,
            ..Default::default()
        };

        let per_call = record.avg_time_per_call_ms();
        assert!(per_call.is_finite());
        assert!(per_call > 0.0 && per_call < 1e-15);
    }

    #[test]
    fn test_record_without_name_defaults_to_empty() {
        let json = r#"{ "Functions": [{ "ThreadId": 1, "TotalTimeMs": 200.0 }] }"#;
        let session: ProfileSession = serde_json::from_str(json).unwrap();

        assert_eq!(session.functions[0].function_name, "");
        assert_eq!(session.functions[0].thread_id, 1);
        assert_eq!(session.functions[0].total_time_ms, 200.0);
    }

    #[test]
    fn test_null_fields_read_as_zero_values() {
        let json = r#"{
            "SessionName": null,
            "TotalFrames": null,
            "TotalFunctions": null,
            "Functions": [{
                "FunctionName": null,
                "ThreadId": null,
                "ThreadName": null,
                "TotalTimeMs": null,
                "TotalCount": null,
                "IsMainThread": null,
                "ThreadPriority": null
            }]
        }"#;
        let session: ProfileSession = serde_json::from_str(json).unwrap();

        assert_eq!(session.session_name, "");
        assert_eq!(session.total_frames, 0);
        assert_eq!(session.total_functions, None);
        assert_eq!(session.functions[0], FunctionRecord::default());
    }

    #[test]
    fn test_null_functions_is_rejected() {
        let json = r#"{ "Functions": null }"#;
        assert!(serde_json::from_str::<ProfileSession>(json).is_err());
    }

    #[test]
    fn test_key_includes_thread() {
        let a = FunctionRecord {
            function_name: "Tick".to_string(),
            thread_id: 1,
            ..Default::default()
        };
        let b = FunctionRecord {
            thread_id: 2,
            ..a.clone()
        };

        assert_ne!(a.key(), b.key());
        assert_eq!(a.key().to_string(), "Tick:1");
    }
}
