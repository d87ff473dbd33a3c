//! Pipeline error types
//!
//! Two surfaces: [`BootstrapError`] is fatal to process startup,
//! [`LookupError`] fails a single request. Row-decode failures during
//! replay appear on neither; they are recovered locally (skip and log).

use thiserror::Error;

use crate::generator::GeneratorError;
use crate::record::CodecError;
use crate::store::StoreError;

/// Result type for lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that abort process startup
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The store has no header row, so the schema cannot be established
    #[error("store has no header row; cannot establish a schema")]
    NoHeader,

    /// The store could not be read at all
    #[error("store replay failed: {0}")]
    Store(StoreError),
}

impl From<StoreError> for BootstrapError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoHeader => Self::NoHeader,
            other => Self::Store(other),
        }
    }
}

/// Errors surfaced to `lookup` callers
#[derive(Debug, Error)]
pub enum LookupError {
    /// The store lost its header row out-of-band
    #[error("store has no header row")]
    NoHeader,

    /// A cell could not be parsed into the kind the schema implies
    #[error("schema mismatch: {0}")]
    SchemaMismatch(#[source] CodecError),

    /// A bound field kind the codec cannot serialize
    #[error("unsupported field kind: {0}")]
    UnsupportedFieldKind(#[source] CodecError),

    /// The generator failed or returned undecodable output
    #[error("generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),

    /// The durable store rejected the append
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[source] StoreError),
}

impl LookupError {
    /// Stable error code for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoHeader => "NO_HEADER",
            Self::SchemaMismatch(_) => "SCHEMA_MISMATCH",
            Self::UnsupportedFieldKind(_) => "UNSUPPORTED_FIELD_KIND",
            Self::GenerationFailed(_) => "GENERATION_FAILED",
            Self::PersistenceFailed(_) => "PERSISTENCE_FAILED",
        }
    }
}

impl From<CodecError> for LookupError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::SchemaMismatch { .. } => Self::SchemaMismatch(e),
            CodecError::UnsupportedFieldKind { .. } => Self::UnsupportedFieldKind(e),
        }
    }
}

impl From<GeneratorError> for LookupError {
    fn from(e: GeneratorError) -> Self {
        Self::GenerationFailed(e)
    }
}

impl From<StoreError> for LookupError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoHeader => Self::NoHeader,
            other => Self::PersistenceFailed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_store_error_maps_to_no_header() {
        let err: LookupError = StoreError::NoHeader.into();
        assert_eq!(err.code(), "NO_HEADER");

        let boot: BootstrapError = StoreError::NoHeader.into();
        assert!(matches!(boot, BootstrapError::NoHeader));
    }

    #[test]
    fn test_io_store_error_maps_to_persistence_failed() {
        let io = StoreError::io("append row", std::io::Error::other("disk full"));
        let err: LookupError = io.into();
        assert_eq!(err.code(), "PERSISTENCE_FAILED");
    }

    #[test]
    fn test_codec_errors_split_by_kind() {
        use crate::record::FieldKind;

        let mismatch: LookupError = CodecError::SchemaMismatch {
            column: "archived".to_string(),
            cell: "x".to_string(),
            expected: FieldKind::Integer,
        }
        .into();
        assert_eq!(mismatch.code(), "SCHEMA_MISMATCH");

        let unsupported: LookupError = CodecError::UnsupportedFieldKind {
            column: "flag".to_string(),
            kind: FieldKind::Boolean,
        }
        .into();
        assert_eq!(unsupported.code(), "UNSUPPORTED_FIELD_KIND");
    }
}
