//! Generator adapter error types

use thiserror::Error;

/// Result type for generation
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors raised by the generator adapter
///
/// Every variant is terminal for the request that hit it; nothing is
/// cached or persisted after a generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The transport layer failed (connection, timeout, non-2xx)
    #[error("generator transport failed: {0}")]
    Transport(String),

    /// The service answered, but not with a decodable record set
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),

    /// The service answered with a well-formed but empty record set
    #[error("generator returned no records")]
    EmptyResult,

    /// No generator is configured in this process
    #[error("no generator is configured")]
    Unavailable,
}
