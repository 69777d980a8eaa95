//! Session file resolution and loading.
//!
//! Relative paths are tried under the data directory first and fall back to
//! the path as given. Loading is all-or-nothing: a read failure or a parse
//! failure aborts the operation with a single error.

use super::schema::ProfileSession;
use crate::utils::error::SessionError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a session path against an optional data directory
///
/// Absolute paths are returned unchanged. A relative path is joined onto
/// `data_dir` when that file exists; otherwise it is used as given.
pub fn resolve_session_path(requested: &str, data_dir: Option<&Path>) -> PathBuf {
    let requested_path = Path::new(requested);
    if requested_path.is_absolute() {
        return requested_path.to_path_buf();
    }

    if let Some(dir) = data_dir {
        let candidate = dir.join(requested_path);
        if candidate.exists() {
            return candidate;
        }
        debug!(
            "{} not found under data dir, trying as given",
            candidate.display()
        );
    }

    requested_path.to_path_buf()
}

/// Directory containing the running executable
///
/// Used as the data directory when none is configured, so exports shipped
/// next to the binary resolve without a path.
pub fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| debug!("Cannot locate executable: {}", e))
        .ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Load a profiling session from disk
///
/// # Errors
/// * `SessionError::Unavailable` - File missing or unreadable
/// * `SessionError::Malformed` - JSON parse failure or missing `Functions`
pub fn load_session(requested: &str, data_dir: Option<&Path>) -> Result<ProfileSession, SessionError> {
    let resolved = resolve_session_path(requested, data_dir);

    debug!("Reading session from: {}", resolved.display());

    let bytes = fs::read(&resolved).map_err(|source| SessionError::Unavailable {
        requested: requested.to_string(),
        resolved: resolved.clone(),
        source,
    })?;

    parse_session(&bytes, &resolved)
}

/// Parse raw export bytes into a session
///
/// `path` is only used for diagnostics.
pub fn parse_session(bytes: &[u8], path: &Path) -> Result<ProfileSession, SessionError> {
    let session: ProfileSession =
        serde_json::from_slice(bytes).map_err(|source| SessionError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Session loaded: '{}', {} frames, {} functions",
        session.session_name,
        session.total_frames,
        session.functions.len()
    );

    if let Some(advertised) = session.total_functions {
        if advertised != session.functions.len() as u64 {
            warn!(
                "TotalFunctions says {} but export lists {}; using the list",
                advertised,
                session.functions.len()
            );
        }
    }

    Ok(session)
}
