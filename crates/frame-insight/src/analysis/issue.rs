//! Issue types shared by every detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity, ordered from most to least urgent.
///
/// The derived `Ord` follows declaration order, so sorting ascending puts
/// `Critical` first and `Info` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "CPU Hotspot")]
    CpuHotspot,
    #[serde(rename = "Call Frequency")]
    CallFrequency,
    #[serde(rename = "Frame Spike")]
    FrameSpike,
    #[serde(rename = "Thread Saturation")]
    ThreadSaturation,
    #[serde(rename = "Frame Spike - Main Thread")]
    MainThreadFrameSpike,
    #[serde(rename = "Frame Performance")]
    FrameBudgetExceeded,
    #[serde(rename = "Inconsistent Performance")]
    InconsistentPerformance,
    #[serde(rename = "Session Info")]
    SessionInfo,
    #[serde(rename = "Thread Balance")]
    ThreadBalance,
}

impl IssueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::CpuHotspot => "CPU Hotspot",
            IssueCategory::CallFrequency => "Call Frequency",
            IssueCategory::FrameSpike => "Frame Spike",
            IssueCategory::ThreadSaturation => "Thread Saturation",
            IssueCategory::MainThreadFrameSpike => "Frame Spike - Main Thread",
            IssueCategory::FrameBudgetExceeded => "Frame Performance",
            IssueCategory::InconsistentPerformance => "Inconsistent Performance",
            IssueCategory::SessionInfo => "Session Info",
            IssueCategory::ThreadBalance => "Thread Balance",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected performance problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub description: String,
    pub impact: String,
    pub suggestion: String,

    /// The metric that triggered the issue
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        let mut all = vec![
            Severity::Info,
            Severity::Low,
            Severity::Critical,
            Severity::Medium,
            Severity::High,
        ];
        all.sort();
        assert_eq!(
            all,
            vec![
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Info
            ]
        );
    }

    #[test]
    fn test_serialized_labels() {
        let issue = PerformanceIssue {
            severity: Severity::Critical,
            category: IssueCategory::MainThreadFrameSpike,
            description: "d".to_string(),
            impact: "i".to_string(),
            suggestion: "s".to_string(),
            value: 1.5,
        };

        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["category"], "Frame Spike - Main Thread");
        assert_eq!(json["value"], 1.5);
    }
}
