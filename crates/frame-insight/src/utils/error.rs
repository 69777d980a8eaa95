//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The analysis core itself never fails; every error here comes from
//! loading input, parsing caller arguments, or writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a profiling session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read file (tried: {requested}, {}): {source}", .resolved.display())]
    Unavailable {
        requested: String,
        resolved: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised for bad operation arguments (tool name, argument map, focus)
#[derive(Error, Debug, PartialEq)]
pub enum ArgumentError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Argument '{name}' must be {expected}")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Invalid focus '{0}': expected one of cpu, frames, threads, all")]
    InvalidFocus(String),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading the CLI config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
