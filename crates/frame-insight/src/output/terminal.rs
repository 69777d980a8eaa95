//! Human-readable terminal summaries for analysis reports.

use crate::analysis::{FrameTimeReport, PerformanceReport, Severity};
use crate::hotspots::HotspotReport;
use colored::*;

const RULE: &str = "---------------------------------------------------\n";

/// Render a performance report as a severity-ordered issue list
pub fn render_performance_report(report: &PerformanceReport) -> String {
    let mut out = String::new();
    out.push_str("\n🔍 ");
    out.push_str(&"Performance Analysis".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    if let Some(file) = &report.file {
        out.push_str(&format!("File:  {}\n", file));
    }
    out.push_str(&format!("Focus: {}\n", report.focus));
    out.push_str(RULE);

    for (i, issue) in report.issues.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{}] {}: {}\n",
            i + 1,
            severity_badge(issue.severity),
            issue.category,
            issue.description
        ));
        out.push_str(&format!("     Impact: {}\n", issue.impact));
        out.push_str(&format!("     💡 {}\n", issue.suggestion.dimmed()));
    }

    out.push_str(RULE);
    out.push_str(&report.summary);
    out.push('\n');
    out
}

/// Render the ranked hotspot table
pub fn render_hotspots(report: &HotspotReport) -> String {
    let mut out = String::new();
    out.push_str("\n🔥 ");
    out.push_str(&format!("Top {} Hotspots", report.top_n).bold().to_string());
    out.push('\n');
    out.push_str(RULE);

    if report.hotspots.is_empty() {
        out.push_str("No functions recorded\n");
        return out;
    }

    for h in &report.hotspots {
        let thread = if h.is_main_thread {
            format!("{} [main]", h.thread_name).red().to_string()
        } else if h.is_render_thread {
            format!("{} [render]", h.thread_name).yellow().to_string()
        } else {
            h.thread_name.clone()
        };
        out.push_str(&format!(
            "{:>3}. {} ({})\n     total {:.2}ms | avg/frame {:.3}ms | max/frame {:.3}ms | calls {} | util {:.1}%\n",
            h.rank,
            h.function_name.bold(),
            thread,
            h.total_time_ms,
            h.avg_time_per_frame_ms,
            h.max_time_per_frame_ms,
            h.total_count,
            h.thread_utilization
        ));
        for s in &h.suggestions {
            out.push_str(&format!("     💡 {}\n", s));
        }
    }
    out
}

/// Render the frame-time analysis
pub fn render_frame_report(report: &FrameTimeReport) -> String {
    let mut out = String::new();
    out.push_str("\n🎞️  ");
    out.push_str(&"Frame Time Analysis".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!(
        "Session: {} ({} frames)\n",
        report.session_name, report.total_frames
    ));

    let fps_line = format!(
        "Estimated FPS: {:.1} (target {:.1}, budget {:.2}ms, main thread work {:.2}ms)",
        report.estimated_fps,
        report.target_fps,
        report.target_frame_time_ms,
        report.main_thread_avg_work_ms
    );
    if report.estimated_fps >= report.target_fps {
        out.push_str(&format!("✅ {}\n", fps_line.green()));
    } else {
        out.push_str(&format!("⚠️  {}\n", fps_line.yellow()));
    }
    out.push_str(RULE);

    if !report.problem_functions.is_empty() {
        out.push_str("Over-budget main thread functions:\n");
        for p in &report.problem_functions {
            out.push_str(&format!(
                "  ⏱️  {}: max {:.2}ms, avg {:.2}ms ({})\n",
                p.function, p.max_time_per_frame, p.avg_time_per_frame, p.impact
            ));
        }
        out.push_str(RULE);
    }

    for line in &report.analysis {
        out.push_str(&format!("• {}\n", line));
    }
    out
}

fn severity_badge(severity: Severity) -> ColoredString {
    let label = severity.as_str().to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.blue(),
        Severity::Info => label.normal(),
    }
}
