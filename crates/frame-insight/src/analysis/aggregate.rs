//! Issue aggregation: run the selected detectors, rank, summarize.

use super::cpu::detect_cpu_issues;
use super::frames::detect_frame_issues;
use super::issue::{PerformanceIssue, Severity};
use super::threads::detect_thread_issues;
use crate::parser::schema::ProfileSession;
use crate::utils::error::ArgumentError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which detectors an analysis runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Cpu,
    Frames,
    Threads,
    #[default]
    All,
}

impl Focus {
    pub fn includes_cpu(self) -> bool {
        matches!(self, Focus::Cpu | Focus::All)
    }

    pub fn includes_frames(self) -> bool {
        matches!(self, Focus::Frames | Focus::All)
    }

    pub fn includes_threads(self) -> bool {
        matches!(self, Focus::Threads | Focus::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Cpu => "cpu",
            Focus::Frames => "frames",
            Focus::Threads => "threads",
            Focus::All => "all",
        }
    }
}

impl FromStr for Focus {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Focus::Cpu),
            "frames" => Ok(Focus::Frames),
            "threads" => Ok(Focus::Threads),
            "all" | "" => Ok(Focus::All),
            _ => Err(ArgumentError::InvalidFocus(s.to_string())),
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of `analyze_performance`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Source file, filled in by the command layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    pub focus: Focus,
    pub issues_found: usize,
    pub issues: Vec<PerformanceIssue>,
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// Run the detectors selected by `focus` and rank their findings
///
/// Detector output is concatenated cpu, frames, threads, then stably sorted
/// by severity so equal severities keep emission order.
pub fn analyze_performance(session: &ProfileSession, focus: Focus) -> PerformanceReport {
    let mut issues = Vec::new();

    if focus.includes_cpu() {
        issues.extend(detect_cpu_issues(session));
    }
    if focus.includes_frames() {
        issues.extend(detect_frame_issues(session));
    }
    if focus.includes_threads() {
        issues.extend(detect_thread_issues(session));
    }

    rank_issues(&mut issues);
    debug!("Aggregated {} issues (focus: {})", issues.len(), focus);

    PerformanceReport {
        file: None,
        focus,
        issues_found: issues.len(),
        summary: generate_summary(&issues),
        issues,
        generated_at: None,
    }
}

/// Stable sort, most severe first
pub fn rank_issues(issues: &mut [PerformanceIssue]) {
    issues.sort_by_key(|issue| issue.severity);
}

/// Count issues of one severity
pub fn count_severity(issues: &[PerformanceIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

/// One-line severity tally with an urgency suffix
pub fn generate_summary(issues: &[PerformanceIssue]) -> String {
    let critical = count_severity(issues, Severity::Critical);
    let high = count_severity(issues, Severity::High);
    let medium = count_severity(issues, Severity::Medium);
    let low = count_severity(issues, Severity::Low);

    let mut summary = format!(
        "Performance Analysis Summary: {} critical, {} high, {} medium, {} low priority issues detected",
        critical, high, medium, low
    );

    if critical > 0 {
        summary.push_str(" - IMMEDIATE ACTION REQUIRED");
    } else if high > 0 {
        summary.push_str(" - Optimization recommended");
    } else if medium > 0 {
        summary.push_str(" - Moderate optimization opportunities");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::issue::IssueCategory;
    use crate::parser::schema::FunctionRecord;

    fn issue(severity: Severity, description: &str) -> PerformanceIssue {
        PerformanceIssue {
            severity,
            category: IssueCategory::CpuHotspot,
            description: description.to_string(),
            impact: String::new(),
            suggestion: String::new(),
            value: 0.0,
        }
    }

    #[test]
    fn test_focus_parsing() {
        assert_eq!("CPU".parse::<Focus>().unwrap(), Focus::Cpu);
        assert_eq!("frames".parse::<Focus>().unwrap(), Focus::Frames);
        assert_eq!("".parse::<Focus>().unwrap(), Focus::All);
        assert_eq!(
            "memory".parse::<Focus>(),
            Err(ArgumentError::InvalidFocus("memory".to_string()))
        );
    }

    #[test]
    fn test_rank_is_stable_and_info_last() {
        let mut issues = vec![
            issue(Severity::Info, "info"),
            issue(Severity::Medium, "m1"),
            issue(Severity::Critical, "c1"),
            issue(Severity::Medium, "m2"),
            issue(Severity::Low, "low"),
            issue(Severity::Critical, "c2"),
        ];

        rank_issues(&mut issues);
        let order: Vec<&str> = issues.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(order, vec!["c1", "c2", "m1", "m2", "low", "info"]);
    }

    #[test]
    fn test_summary_suffixes() {
        assert_eq!(
            generate_summary(&[]),
            "Performance Analysis Summary: 0 critical, 0 high, 0 medium, 0 low priority issues detected"
        );
        assert!(generate_summary(&[issue(Severity::Critical, "")])
            .ends_with(" - IMMEDIATE ACTION REQUIRED"));
        assert!(generate_summary(&[issue(Severity::High, "")])
            .ends_with(" - Optimization recommended"));
        assert!(generate_summary(&[issue(Severity::Medium, "")])
            .ends_with(" - Moderate optimization opportunities"));
        assert!(generate_summary(&[issue(Severity::Low, ""), issue(Severity::Info, "")])
            .ends_with("1 low priority issues detected"));
    }

    #[test]
    fn test_focus_selects_detectors() {
        let session = ProfileSession {
            session_name: "s".to_string(),
            total_frames: 10,
            total_functions: None,
            functions: vec![FunctionRecord {
                function_name: "Hot".to_string(),
                total_time_ms: 200.0,
                ..Default::default()
            }],
        };

        let cpu = analyze_performance(&session, Focus::Cpu);
        assert_eq!(cpu.issues_found, 1);

        let frames = analyze_performance(&session, Focus::Frames);
        assert_eq!(frames.issues_found, 1);
        assert_eq!(frames.issues[0].severity, Severity::Info);

        let threads = analyze_performance(&session, Focus::Threads);
        assert_eq!(threads.issues_found, 0);

        let all = analyze_performance(&session, Focus::All);
        assert_eq!(all.issues_found, 2);
        assert_eq!(all.issues.last().unwrap().severity, Severity::Info);
    }
}
