use crate::analysis::Focus;
use crate::utils::config::{DEFAULT_TARGET_FPS, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeArgs {
    /// Session export to analyze (relative paths try the data dir first)
    pub file: String,

    /// Directory relative session paths are resolved against
    pub data_dir: Option<PathBuf>,

    /// Which detectors to run
    pub focus: Focus,

    /// Path to write the report JSON
    pub output: Option<PathBuf>,

    /// Print a human-readable summary instead of JSON
    pub summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            file: String::new(),
            data_dir: None,
            focus: Focus::All,
            output: None,
            summary: false,
        }
    }
}

/// Arguments for the hotspots command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotsArgs {
    pub file: String,
    pub data_dir: Option<PathBuf>,

    /// Number of hotspots to report
    pub top_n: usize,

    pub output: Option<PathBuf>,
    pub summary: bool,
}

impl Default for HotspotsArgs {
    fn default() -> Self {
        Self {
            file: String::new(),
            data_dir: None,
            top_n: DEFAULT_TOP_N,
            output: None,
            summary: false,
        }
    }
}

/// Arguments for the frames command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramesArgs {
    pub file: String,
    pub data_dir: Option<PathBuf>,

    /// Frame rate the main thread is measured against
    pub target_fps: f64,

    pub output: Option<PathBuf>,
    pub summary: bool,
}

impl Default for FramesArgs {
    fn default() -> Self {
        Self {
            file: String::new(),
            data_dir: None,
            target_fps: DEFAULT_TARGET_FPS,
            output: None,
            summary: false,
        }
    }
}

/// Arguments for the compare command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareArgs {
    /// Baseline session export
    pub baseline: String,

    /// Current session export
    pub current: String,

    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub summary: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            baseline: String::new(),
            current: String::new(),
            data_dir: None,
            output: None,
            summary: true,
        }
    }
}
