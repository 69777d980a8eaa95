//! Tool dispatcher.
//!
//! Maps a tool name plus a JSON argument object onto one of the four
//! operations and returns the operation's report as a JSON value. This is
//! the surface a request/response transport would sit on.

use super::analyze::run_analyze;
use super::compare::run_compare;
use super::frames::run_frames;
use super::hotspots::run_hotspots;
use super::models::{AnalyzeArgs, CompareArgs, FramesArgs, HotspotsArgs};
use crate::analysis::Focus;
use crate::utils::config::{DEFAULT_TARGET_FPS, DEFAULT_TOP_N};
use crate::utils::error::ArgumentError;
use anyhow::Result;
use log::debug;
use serde_json::{Map, Value};
use std::path::Path;

/// Description of one callable tool
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Every tool the dispatcher accepts
pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "analyze_performance",
        description: "Identify performance bottlenecks, hotspots and optimization opportunities",
        required: &["file_path"],
        optional: &["focus"],
    },
    ToolSpec {
        name: "find_hotspots",
        description: "List the most expensive functions by total time",
        required: &["file_path"],
        optional: &["top_n"],
    },
    ToolSpec {
        name: "analyze_frame_times",
        description: "Estimate frame rate and find main thread budget offenders",
        required: &["file_path"],
        optional: &["target_fps"],
    },
    ToolSpec {
        name: "compare_profiles",
        description: "Find regressions and improvements between two sessions",
        required: &["baseline_path", "current_path"],
        optional: &[],
    },
];

/// **Public** - Invoke a tool by name
///
/// # Arguments
/// * `name` - One of the names in [`TOOLS`]
/// * `args` - JSON argument object
/// * `data_dir` - Directory relative session paths are resolved against
///
/// # Returns
/// The operation's report serialized to a JSON value
///
/// # Errors
/// * `ArgumentError` - Unknown tool, missing or mistyped argument, invalid focus
/// * Session load failures, with the attempted path in the message
pub fn invoke_tool(name: &str, args: &Map<String, Value>, data_dir: Option<&Path>) -> Result<Value> {
    debug!("Invoking tool {} with {} argument(s)", name, args.len());
    let data_dir = data_dir.map(Path::to_path_buf);

    let value = match name {
        "analyze_performance" => {
            let focus = match optional_str(args, "focus")? {
                Some(raw) => raw.parse::<Focus>()?,
                None => Focus::All,
            };
            let report = run_analyze(&AnalyzeArgs {
                file: required_str(args, "file_path")?.to_string(),
                data_dir,
                focus,
                ..Default::default()
            })?;
            serde_json::to_value(report)?
        }
        "find_hotspots" => {
            // Negative counts clamp to an empty list
            let top_n = optional_number(args, "top_n")?
                .map(|n| n.max(0.0) as usize)
                .unwrap_or(DEFAULT_TOP_N);
            let report = run_hotspots(&HotspotsArgs {
                file: required_str(args, "file_path")?.to_string(),
                data_dir,
                top_n,
                ..Default::default()
            })?;
            serde_json::to_value(report)?
        }
        "analyze_frame_times" => {
            let target_fps = optional_number(args, "target_fps")?.unwrap_or(DEFAULT_TARGET_FPS);
            let report = run_frames(&FramesArgs {
                file: required_str(args, "file_path")?.to_string(),
                data_dir,
                target_fps,
                ..Default::default()
            })?;
            serde_json::to_value(report)?
        }
        "compare_profiles" => {
            let result = run_compare(&CompareArgs {
                baseline: required_str(args, "baseline_path")?.to_string(),
                current: required_str(args, "current_path")?.to_string(),
                data_dir,
                ..Default::default()
            })?;
            serde_json::to_value(result)?
        }
        other => return Err(ArgumentError::UnknownTool(other.to_string()).into()),
    };

    Ok(value)
}

fn required_str<'a>(args: &'a Map<String, Value>, name: &'static str) -> Result<&'a str, ArgumentError> {
    optional_str(args, name)?
        .filter(|s| !s.is_empty())
        .ok_or(ArgumentError::MissingArgument(name))
}

fn optional_str<'a>(
    args: &'a Map<String, Value>,
    name: &'static str,
) -> Result<Option<&'a str>, ArgumentError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ArgumentError::InvalidType {
            name,
            expected: "a string",
        }),
    }
}

fn optional_number(args: &Map<String, Value>, name: &'static str) -> Result<Option<f64>, ArgumentError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(ArgumentError::InvalidType {
            name,
            expected: "a number",
        }),
    }
}
