//! Heuristic optimization advice for a single function record.
//!
//! Both the CPU detector and the hotspot ranker draw from the same rule
//! tables in [`rules`]; [`SuggestionStyle`] selects which entries apply and
//! how their text reads.

mod rules;

use crate::parser::schema::FunctionRecord;
use rules::{fallback, KEYWORD_HINTS, METRIC_RULES};

/// Output flavor for suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStyle {
    /// Short hints folded into a single issue suggestion
    Issue,
    /// Longer per-function hints listed on a ranked hotspot
    Hotspot,
}

/// Build the ordered hint list for a function
///
/// Never empty: when nothing fires, a single generic hint is returned.
pub fn suggest(record: &FunctionRecord, style: SuggestionStyle) -> Vec<String> {
    let mut hints: Vec<String> = METRIC_RULES
        .iter()
        .filter(|rule| rule.scope.includes(style) && (rule.when)(record, style))
        .flat_map(|rule| (rule.hints)(record, style))
        .collect();

    let lowered = record.function_name.to_lowercase();
    hints.extend(
        KEYWORD_HINTS
            .iter()
            .filter(|entry| entry.matches(&lowered))
            .filter_map(|entry| entry.text(style))
            .map(str::to_string),
    );

    if hints.is_empty() {
        hints.push(fallback(style).to_string());
    }

    hints
}

/// Suggestion text for a CPU issue (hints joined by `"; "`)
pub fn issue_suggestion(record: &FunctionRecord) -> String {
    suggest(record, SuggestionStyle::Issue).join("; ")
}

/// Suggestion list for a ranked hotspot
pub fn hotspot_suggestions(record: &FunctionRecord) -> Vec<String> {
    suggest(record, SuggestionStyle::Hotspot)
}
