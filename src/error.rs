//! Error types for next-fingerprint-guard.
//!
//! All operations return `Result<T>` which aliases `Result<T, GuardError>`.

use thiserror::Error;

/// Errors from version-guard operations.
///
/// Only version resolution is fatal; traversal and per-file I/O problems are
/// absorbed where they occur and never surface through this enum.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Neither `dependencies` nor `devDependencies` lists the package.
    #[error("Dependency '{0}' not found in package.json")]
    MissingDependency(String),

    /// A version specifier without a recognizable MAJOR.MINOR.PATCH token.
    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    /// Manifest read failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Manifest is not valid JSON.
    #[error("Manifest parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for next-fingerprint-guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
