//! Profile comparison.
//!
//! Compares a baseline capture against a current capture of the same
//! workload, matching functions by name and thread id, and reports
//! regressions, improvements, new functions and removed functions.
//!
//! # Example
//! ```ignore
//! use frame_insight::diff::{compare_profiles, render_terminal_diff};
//! use frame_insight::parser::load_session;
//!
//! let baseline = load_session("before.json", None)?;
//! let current = load_session("after.json", None)?;
//! let result = compare_profiles(&baseline, &current);
//! println!("{}", render_terminal_diff(&result));
//! ```

mod engine;
mod normalizer;
mod output;
mod schema;

// Public API exports
pub use engine::compare_profiles;
pub use normalizer::{classify_change, metric_delta, ChangeKind, MetricDelta};
pub use output::render_terminal_diff;
pub use schema::{ComparisonResult, Improvement, NewFunction, Regression, RemovedFunction};
