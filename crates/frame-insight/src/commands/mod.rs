//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands load sessions, run the analysis library and emit reports. The
//! `run_*` functions return the stamped report; the `execute_*` functions
//! print or write it.

pub mod analyze;
pub mod compare;
pub mod frames;
pub mod hotspots;
pub mod models;
pub mod tool;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, run_analyze};
pub use compare::{execute_compare, run_compare};
pub use frames::{execute_frames, run_frames};
pub use hotspots::{execute_hotspots, run_hotspots};
pub use models::{AnalyzeArgs, CompareArgs, FramesArgs, HotspotsArgs};
pub use tool::{invoke_tool, ToolSpec, TOOLS};
pub use utils::{display_version, emit_report, timestamp, validate_session_file};
