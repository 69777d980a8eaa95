//! Terminal output rendering for profile comparisons.
//!
//! Provides human-readable summaries with visual cues (emojis) for
//! regressions and improvements.

use super::schema::ComparisonResult;
use crate::analysis::issue::Severity;
use colored::*;

const MAX_ROWS: usize = 10;

/// Render a human-readable summary of a comparison for the terminal
pub fn render_terminal_diff(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str(&render_header(result));
    out.push_str(&render_regressions(result));
    out.push_str(&render_improvements(result));
    out.push_str(&render_added_removed(result));
    out.push_str(&render_status(result));

    out
}

fn render_header(result: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Profile Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!(
        "Baseline: {}\n",
        describe_side(result.baseline.as_deref(), &result.baseline_session)
    ));
    out.push_str(&format!(
        "Current:  {}\n",
        describe_side(result.current.as_deref(), &result.current_session)
    ));
    out.push_str("---------------------------------------------------\n");
    out
}

fn describe_side(file: Option<&str>, session: &str) -> String {
    match (file, session.is_empty()) {
        (Some(file), false) => format!("{} ({})", session, file),
        (Some(file), true) => file.to_string(),
        (None, false) => session.to_string(),
        (None, true) => "<unnamed session>".to_string(),
    }
}

fn render_regressions(result: &ComparisonResult) -> String {
    let mut out = String::new();
    if result.regressions.is_empty() {
        return out;
    }

    out.push_str("\nRegressions:\n");
    for r in result.regressions.iter().take(MAX_ROWS) {
        out.push_str(&format!(
            "  📈 [{}] {} ({}): {:.2}ms -> {:.2}ms ({:+.2}%)\n",
            severity_label(r.severity),
            r.function,
            r.thread_name,
            r.baseline_total_ms,
            r.current_total_ms,
            r.total_percent_change
        ));
    }
    if result.regressions.len() > MAX_ROWS {
        out.push_str(&format!(
            "  ... and {} more\n",
            result.regressions.len() - MAX_ROWS
        ));
    }
    out
}

fn render_improvements(result: &ComparisonResult) -> String {
    let mut out = String::new();
    if result.improvements.is_empty() {
        return out;
    }

    out.push_str("\nImprovements:\n");
    let mut improvements: Vec<_> = result.improvements.iter().collect();
    improvements.sort_by(|a, b| a.total_percent_change.total_cmp(&b.total_percent_change));

    for i in improvements.iter().take(MAX_ROWS) {
        out.push_str(&format!(
            "  📉 {} ({}): {:.2}ms -> {:.2}ms ({:+.2}%)\n",
            i.function, i.thread_name, i.baseline_total_ms, i.current_total_ms, i.total_percent_change
        ));
    }
    out
}

fn render_added_removed(result: &ComparisonResult) -> String {
    let mut out = String::new();

    if !result.new_functions.is_empty() {
        out.push_str("\nNew functions:\n");
        for f in result.new_functions.iter().take(MAX_ROWS) {
            out.push_str(&format!(
                "  ➕ {} ({}): {:.2}ms\n",
                f.function, f.thread_name, f.total_ms
            ));
        }
    }

    if !result.removed_functions.is_empty() {
        out.push_str("\nRemoved functions:\n");
        for f in result.removed_functions.iter().take(MAX_ROWS) {
            out.push_str(&format!(
                "  ➖ {} ({}): {:.2}ms\n",
                f.function, f.thread_name, f.total_ms
            ));
        }
    }
    out
}

fn render_status(result: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&result.summary);
    out.push('\n');

    let worst = result.regressions.first().map(|r| r.severity);
    let status_msg = match worst {
        Some(Severity::Critical) => "❌ STATUS: CRITICAL REGRESSION DETECTED".red().bold(),
        Some(_) => format!(
            "⚠️  STATUS: {} REGRESSION(S) DETECTED",
            result.regressions.len()
        )
        .yellow()
        .bold(),
        None => "✅ STATUS: NO REGRESSIONS".green().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.as_str().to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low | Severity::Info => label.normal(),
    }
}
