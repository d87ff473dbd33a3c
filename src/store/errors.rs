//! Durable store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the durable store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has no header row, so no schema can be established
    ///
    /// Fatal at bootstrap; request-failing if it surfaces later.
    #[error("store has no header row")]
    NoHeader,

    /// Underlying I/O failure
    #[error("store I/O error: {message}")]
    Io {
        /// What the store was doing when the failure occurred
        message: String,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with operation context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}
