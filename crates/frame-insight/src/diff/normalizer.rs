//! Delta math for session comparison.
//!
//! Percent changes divide by `baseline + 0.001`, so a zero baseline yields
//! a large but finite change instead of a division by zero.

use crate::analysis::issue::Severity;
use crate::parser::schema::FunctionRecord;
use crate::utils::config::{RATIO_EPSILON, REGRESSION_PERCENT, SEVERE_REGRESSION_PERCENT};

/// How a matched function moved between sessions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeKind {
    Regression(Severity),
    Improvement,
    /// Inside the (-10%, +10%] noise band
    Unchanged,
}

/// Absolute and relative change of one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub diff: f64,
    pub percent_change: f64,
}

/// Calculate the delta between a baseline and current value
pub fn metric_delta(baseline: f64, current: f64) -> MetricDelta {
    let diff = current - baseline;
    MetricDelta {
        diff,
        percent_change: diff / (baseline + RATIO_EPSILON) * 100.0,
    }
}

/// Classify a total-time percent change for the current record
///
/// Main-thread regressions are always critical, overriding the
/// percentage-based escalation.
pub fn classify_change(percent_change: f64, current: &FunctionRecord) -> ChangeKind {
    if percent_change > REGRESSION_PERCENT {
        let severity = if current.is_main_thread {
            Severity::Critical
        } else if percent_change > SEVERE_REGRESSION_PERCENT {
            Severity::High
        } else {
            Severity::Medium
        };
        ChangeKind::Regression(severity)
    } else if percent_change < -REGRESSION_PERCENT {
        ChangeKind::Improvement
    } else {
        ChangeKind::Unchanged
    }
}
