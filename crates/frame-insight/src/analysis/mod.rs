//! Rule-based performance issue detection.
//!
//! Three detectors (CPU, frame budget, threads) each map a session to a flat
//! list of issues; the aggregator runs the ones selected by a [`Focus`],
//! ranks the result by severity and writes a one-line summary.
//!
//! # Example
//! ```ignore
//! use frame_insight::analysis::{analyze_performance, Focus};
//! use frame_insight::parser::load_session;
//!
//! let session = load_session("capture.json", None)?;
//! let report = analyze_performance(&session, Focus::All);
//! println!("{}", report.summary);
//! ```

pub mod aggregate;
pub mod cpu;
pub mod frame_times;
pub mod frames;
pub mod issue;
pub mod threads;

// Public API exports
pub use aggregate::{analyze_performance, generate_summary, rank_issues, Focus, PerformanceReport};
pub use cpu::detect_cpu_issues;
pub use frame_times::{analyze_frame_times, FrameProblem, FrameTimeReport};
pub use frames::detect_frame_issues;
pub use issue::{IssueCategory, PerformanceIssue, Severity};
pub use threads::{collect_thread_stats, detect_thread_issues, ThreadStats};
