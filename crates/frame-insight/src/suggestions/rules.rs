//! Declarative suggestion tables.
//!
//! Each metric rule pairs a predicate with the hint(s) it contributes; each
//! keyword entry maps function-name substrings to a domain hint. A `None`
//! text means the entry does not participate in that style.

use super::SuggestionStyle;
use crate::parser::schema::FunctionRecord;

const HIGH_CALL_COUNT: u64 = 10_000;
const ISSUE_UTILIZATION_PERCENT: f64 = 80.0;
const HOTSPOT_UTILIZATION_PERCENT: f64 = 90.0;
const MAIN_THREAD_AVG_FRAME_MS: f64 = 5.0;
const VARIANCE_RATIO: f64 = 3.0;
const SLOW_CALL_MS: f64 = 0.1;
const SLOW_CALL_MIN_COUNT: u64 = 1_000;

/// Which styles a metric rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Both,
    IssueOnly,
    HotspotOnly,
}

impl Scope {
    pub(crate) fn includes(self, style: SuggestionStyle) -> bool {
        match self {
            Scope::Both => true,
            Scope::IssueOnly => style == SuggestionStyle::Issue,
            Scope::HotspotOnly => style == SuggestionStyle::Hotspot,
        }
    }
}

/// A metric-driven suggestion
pub(crate) struct SuggestionRule {
    pub(crate) scope: Scope,
    pub(crate) when: fn(&FunctionRecord, SuggestionStyle) -> bool,
    pub(crate) hints: fn(&FunctionRecord, SuggestionStyle) -> Vec<String>,
}

/// A function-name driven suggestion
pub(crate) struct KeywordHint {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) issue_text: Option<&'static str>,
    pub(crate) hotspot_text: Option<&'static str>,
}

impl KeywordHint {
    pub(crate) fn text(&self, style: SuggestionStyle) -> Option<&'static str> {
        match style {
            SuggestionStyle::Issue => self.issue_text,
            SuggestionStyle::Hotspot => self.hotspot_text,
        }
    }

    pub(crate) fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_name.contains(kw))
    }
}

fn utilization_threshold(style: SuggestionStyle) -> f64 {
    match style {
        SuggestionStyle::Issue => ISSUE_UTILIZATION_PERCENT,
        SuggestionStyle::Hotspot => HOTSPOT_UTILIZATION_PERCENT,
    }
}

/// Metric rules, in output order
pub(crate) static METRIC_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        scope: Scope::IssueOnly,
        when: |f, _| f.is_main_thread,
        hints: |_, _| vec!["MAIN THREAD: Move to worker thread if possible".to_string()],
    },
    SuggestionRule {
        scope: Scope::IssueOnly,
        when: |f, _| f.is_render_thread,
        hints: |_, _| vec!["RENDER THREAD: Optimize GPU calls and state changes".to_string()],
    },
    SuggestionRule {
        scope: Scope::Both,
        when: |f, _| f.total_count > HIGH_CALL_COUNT,
        hints: |_, style| match style {
            SuggestionStyle::Issue => {
                vec!["High call count - consider caching or batching".to_string()]
            }
            SuggestionStyle::Hotspot => vec![
                "Consider caching or memoization to reduce repeated calculations".to_string(),
                "Evaluate if call frequency can be reduced through batching".to_string(),
            ],
        },
    },
    SuggestionRule {
        scope: Scope::Both,
        when: |f, style| f.thread_utilization_percent > utilization_threshold(style),
        hints: |f, style| {
            let text = match style {
                SuggestionStyle::Issue => format!(
                    "{:.1}% thread utilization - critical optimization target",
                    f.thread_utilization_percent
                ),
                SuggestionStyle::Hotspot => format!(
                    "Thread {:.1}% saturated - this is a critical optimization target",
                    f.thread_utilization_percent
                ),
            };
            vec![text]
        },
    },
    SuggestionRule {
        scope: Scope::HotspotOnly,
        when: |f, _| f.is_main_thread && f.avg_time_per_frame_ms > MAIN_THREAD_AVG_FRAME_MS,
        hints: |_, _| {
            vec![
                "Main thread function taking significant time - consider moving to worker thread"
                    .to_string(),
            ]
        },
    },
    SuggestionRule {
        scope: Scope::Both,
        when: |f, _| f.frame_variance() > VARIANCE_RATIO,
        hints: |f, style| {
            let text = match style {
                SuggestionStyle::Issue => format!(
                    "High variance ({:.1}x) - investigate occasional slowdowns",
                    f.frame_variance()
                ),
                SuggestionStyle::Hotspot => format!(
                    "Inconsistent performance (max/avg: {:.1}x) - investigate occasional slowdowns",
                    f.frame_variance()
                ),
            };
            vec![text]
        },
    },
    SuggestionRule {
        scope: Scope::HotspotOnly,
        when: |f, _| f.avg_time_per_call_ms() > SLOW_CALL_MS && f.total_count > SLOW_CALL_MIN_COUNT,
        hints: |f, _| {
            vec![format!(
                "High avg time per call ({:.3}ms) - review algorithm complexity",
                f.avg_time_per_call_ms()
            )]
        },
    },
];

/// Function-name keyword hints, in output order
pub(crate) static KEYWORD_HINTS: &[KeywordHint] = &[
    KeywordHint {
        keywords: &["wait", "sleep"],
        issue_text: Some("WAIT/SLEEP detected - may indicate synchronization issues or idle time"),
        hotspot_text: Some("Waiting or sleeping - may indicate thread synchronization overhead or idle time"),
    },
    KeywordHint {
        keywords: &["lock", "mutex"],
        issue_text: Some("Lock contention possible - review synchronization strategy"),
        hotspot_text: None,
    },
    KeywordHint {
        keywords: &["physics"],
        issue_text: Some("Physics calculation - review collision detection and simulation complexity"),
        hotspot_text: Some("Physics - review collision detection, spatial partitioning, and simulation timestep"),
    },
    KeywordHint {
        keywords: &["render", "draw"],
        issue_text: Some("Rendering function - check draw calls, batching, and GPU state changes"),
        hotspot_text: Some("Rendering - optimize draw calls, use instancing, check GPU state changes"),
    },
    KeywordHint {
        keywords: &["audio"],
        issue_text: Some("Audio processing - ensure streaming and buffering are optimized"),
        hotspot_text: None,
    },
    KeywordHint {
        keywords: &["update"],
        issue_text: Some("Update loop - review what systems are being updated and their frequency"),
        hotspot_text: Some("Update function - profile child systems and consider update frequency"),
    },
];

pub(crate) fn fallback(style: SuggestionStyle) -> &'static str {
    match style {
        SuggestionStyle::Issue => "Review algorithm complexity and consider profiling child functions",
        SuggestionStyle::Hotspot => "Profile child functions to identify specific bottlenecks",
    }
}
