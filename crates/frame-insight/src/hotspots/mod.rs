//! Hotspot ranking.
//!
//! This module turns a session into a ranked hotspot list (most total
//! time first) with suggestions.

pub mod ranker;

// Re-export main types and functions
pub use ranker::{create_hotspot, find_hotspots, rank_by_total_time, Hotspot, HotspotReport};
