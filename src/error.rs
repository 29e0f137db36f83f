// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for Shotsort

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Shotsort operations
pub type Result<T> = std::result::Result<T, ShotsortError>;

/// Shotsort error types
#[derive(Error, Debug)]
pub enum ShotsortError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Override table unavailable: {0}")]
    ConfigUnavailable(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("No screenshots found in {0:?}")]
    EmptyDirectory(PathBuf),

    #[error("Malformed screenshot filename {path:?}: {reason}")]
    MalformedFilename { path: PathBuf, reason: &'static str },

    #[error("`{0}` is not a valid Steam app id")]
    InvalidIdentifier(String),

    #[error("No Steam store entry for app id `{0}`")]
    NotFound(String),

    #[error("Lookup failed for app id `{app_id}`: {reason}")]
    LookupFailed { app_id: String, reason: String },

    #[error("Destination already exists: {dest:?} (source {src:?} left in place)")]
    DestinationConflict { src: PathBuf, dest: PathBuf },
}
