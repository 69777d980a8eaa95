//! Frame Insight library
//!
//! Rule-based performance analysis of FramePro profiling exports: issue
//! detection, hotspot ranking, frame-time estimation and session comparison.

pub mod analysis;
pub mod commands;
pub mod diff;
pub mod hotspots;
pub mod output;
pub mod parser;
pub mod suggestions;
pub mod utils;
