//! Session parsing and schema definitions.
//!
//! This module handles:
//! - The in-memory session model
//! - Resolving and reading export files
//! - Rejecting malformed exports as a whole

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{executable_dir, load_session, parse_session, resolve_session_path};
pub use schema::{FunctionKey, FunctionRecord, ProfileSession};
