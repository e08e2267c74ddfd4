use thiserror::Error;

/// Unified error type for semantic version parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in semver-core
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        SemverError::InvalidFormat(msg.into())
    }

    /// Create an argument error with context
    pub fn argument(msg: impl Into<String>) -> Self {
        SemverError::InvalidArgument(msg.into())
    }
}
