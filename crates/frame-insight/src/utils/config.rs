//! Configuration and constants for the analyzer.
//!
//! Detection thresholds live here as named constants so the detectors read
//! like the rules they implement. The optional TOML file only carries CLI
//! defaults, never thresholds.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Environment variable naming the directory relative session paths resolve against
pub const DATA_DIR_ENV: &str = "FRAMEPRO_DATA_DIR";

// Frame budgets (ms). These stay fixed regardless of the caller's target FPS.
pub const FRAME_BUDGET_60FPS_MS: f64 = 16.67;
pub const FRAME_BUDGET_30FPS_MS: f64 = 33.0;

// CPU detector
pub const HOTSPOT_TOTAL_MS: f64 = 100.0;
pub const HOTSPOT_CRITICAL_TOTAL_MS: f64 = 500.0;
pub const FREQUENT_CALL_COUNT: u64 = 10_000;
pub const FREQUENT_CALL_TOTAL_MS: f64 = 50.0;
pub const SPIKE_MIN_CALL_COUNT: u64 = 100;
pub const SATURATION_UTILIZATION_PERCENT: f64 = 95.0;

// Frame detector
pub const INCONSISTENT_VARIANCE_RATIO: f64 = 5.0;
pub const INCONSISTENT_MIN_AVG_MS: f64 = 1.0;

// Thread detector
pub const THREAD_SATURATION_PERCENT: f64 = 90.0;
pub const THREAD_BALANCE_MAX_RATIO: f64 = 2.0;
pub const THREAD_BALANCE_MIN_RATIO: f64 = 0.5;

// Profile differ
pub const REGRESSION_PERCENT: f64 = 10.0;
pub const SEVERE_REGRESSION_PERCENT: f64 = 50.0;
pub const NOISE_FLOOR_MS: f64 = 10.0;

/// Offset added to averages before dividing, so a zero average never divides by zero
pub const RATIO_EPSILON: f64 = 0.001;

// Operation defaults
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_TARGET_FPS: f64 = 60.0;
pub const MAX_ESTIMATED_FPS: f64 = 1000.0;

/// Estimated FPS below this fraction of the target is reported
pub const FPS_SHORTFALL_FRACTION: f64 = 0.8;

/// CLI defaults, loadable from a TOML file
///
/// Every field is optional; missing fields fall back to the constants above.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Directory relative session paths are resolved against
    pub data_dir: Option<PathBuf>,

    /// Default number of hotspots to report
    pub top_n: Option<usize>,

    /// Default target FPS for frame-time analysis
    pub target_fps: Option<f64>,

    /// Default focus for `analyze` ("cpu", "frames", "threads" or "all")
    pub focus: Option<String>,
}

impl CliConfig {
    pub fn top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps.unwrap_or(DEFAULT_TARGET_FPS)
    }

    pub fn focus(&self) -> &str {
        self.focus.as_deref().unwrap_or("all")
    }
}

/// Load CLI defaults from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If the file cannot be read
/// * `ConfigError::ParseFailed` - If the TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<CliConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config: CliConfig = toml::from_str(&contents)?;
    Ok(config)
}
