use frame_insight::analysis::Severity;
use frame_insight::commands::{run_compare, CompareArgs};
use frame_insight::diff::compare_profiles;
use frame_insight::parser::schema::{FunctionRecord, ProfileSession};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const BASELINE: &str = r#"{
    "SessionName": "Build 101",
    "TotalFrames": 600,
    "Functions": [
        {"FunctionName": "Draw", "ThreadId": 2, "ThreadName": "Render", "TotalTimeMs": 100.0, "AvgTimePerFrameMs": 0.5},
        {"FunctionName": "Legacy.Cleanup", "ThreadId": 3, "ThreadName": "Worker", "TotalTimeMs": 5.0},
        {"FunctionName": "Audio.Mix", "ThreadId": 4, "ThreadName": "Audio", "TotalTimeMs": 80.0}
    ]
}"#;

const CURRENT: &str = r#"{
    "SessionName": "Build 102",
    "TotalFrames": 600,
    "Functions": [
        {"FunctionName": "Draw", "ThreadId": 2, "ThreadName": "Render", "TotalTimeMs": 160.0, "AvgTimePerFrameMs": 0.8},
        {"FunctionName": "Audio.Mix", "ThreadId": 4, "ThreadName": "Audio", "TotalTimeMs": 40.0}
    ]
}"#;

#[test]
fn test_compare_files_end_to_end() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.json"), BASELINE).unwrap();
    fs::write(dir.path().join("curr.json"), CURRENT).unwrap();

    let result = run_compare(&CompareArgs {
        baseline: "base.json".to_string(),
        current: "curr.json".to_string(),
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(result.baseline_session, "Build 101");
    assert_eq!(result.current_session, "Build 102");
    assert_eq!(result.baseline.as_deref(), Some("base.json"));

    assert_eq!(result.regressions.len(), 1);
    let draw = &result.regressions[0];
    assert_eq!(draw.function, "Draw");
    assert_eq!(draw.severity, Severity::High);
    assert!((draw.total_percent_change - 59.99).abs() < 0.01);

    assert_eq!(result.improvements.len(), 1);
    assert_eq!(result.improvements[0].function, "Audio.Mix");

    // Legacy.Cleanup is under the noise floor
    assert!(result.removed_functions.is_empty());
    assert!(result.new_functions.is_empty());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["regressions"][0]["severity"], "high");
    assert!(json["regressions"][0]["totalPercentChange"].is_f64());
    assert!(json["newFunctions"].as_array().unwrap().is_empty());
    assert!(json["removedFunctions"].as_array().unwrap().is_empty());
}

#[test]
fn test_compare_missing_current_names_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("base.json"), BASELINE).unwrap();

    let err = run_compare(&CompareArgs {
        baseline: "base.json".to_string(),
        current: "missing.json".to_string(),
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("current session"));
    assert!(message.contains("missing.json"));
}

#[test]
fn test_symmetric_inverse() {
    let make = |name: &str, entries: &[(&str, f64)]| ProfileSession {
        session_name: name.to_string(),
        total_frames: 1,
        total_functions: None,
        functions: entries
            .iter()
            .map(|(f, t)| FunctionRecord {
                function_name: f.to_string(),
                thread_id: 7,
                total_time_ms: *t,
                ..Default::default()
            })
            .collect(),
    };

    let a = make("a", &[("Shared", 100.0), ("OnlyA", 55.0), ("Steady", 20.0)]);
    let b = make("b", &[("Shared", 180.0), ("OnlyB", 33.0), ("Steady", 21.0)]);

    let forward = compare_profiles(&a, &b);
    let backward = compare_profiles(&b, &a);

    for regression in &forward.regressions {
        assert!(backward
            .improvements
            .iter()
            .any(|i| i.function == regression.function));
    }
    for new in &forward.new_functions {
        let removed = backward
            .removed_functions
            .iter()
            .find(|r| r.function == new.function)
            .expect("new entry reappears as removed");
        assert_eq!(removed.total_ms, new.total_ms);
    }
    assert_eq!(forward.removed_functions.len(), backward.new_functions.len());
    assert!(forward.improvements.is_empty());
    assert!(backward.regressions.is_empty());
}
