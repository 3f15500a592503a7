//! Error types for roster operations.
//!
//! Every error is terminal to the single requested operation; nothing here
//! is retried or recovered internally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Requested category is not part of the closed enumeration
    #[error("Invalid role '{value}'. Available roles: {}", .valid.join(", "))]
    InvalidCategory {
        /// Value supplied by the caller
        value: String,
        /// Display names of every known category, in declaration order
        valid: Vec<String>,
    },

    /// No record matches the requested name
    #[error("Maintainer '{0}' not found")]
    NotFound(String),

    /// The export target could not be created or written
    #[error("Failed to write report to {}", .path.display())]
    WriteFailure {
        /// Target path of the export
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    /// Creates a not-found error for the given name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
