//! Error types for the rating service
//!
//! The trajectory core never fails; these errors only surface at the
//! boundaries (loading data files, reading configuration, store locks).

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for the I/O and configuration boundaries
#[derive(Debug, thiserror::Error)]
pub enum RatingsError {
    #[error("Failed to load data from {path}: {message}")]
    DataLoadFailed { path: String, message: String },

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}
