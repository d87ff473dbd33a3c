//! Codec error types
//!
//! Decode errors never abort a whole replay: callers skip the offending
//! row and log it. Encode errors fail the request that produced them.

use thiserror::Error;

use super::binding::FieldKind;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while translating between records and rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A cell cannot be parsed into the field kind the schema implies
    #[error("column \"{column}\": cannot parse cell \"{cell}\" as {expected}")]
    SchemaMismatch {
        /// Column the cell belongs to
        column: String,
        /// Raw cell contents
        cell: String,
        /// Kind the binding declares for this column
        expected: FieldKind,
    },

    /// A bound field kind the codec does not know how to (en/de)code
    #[error("column \"{column}\": unsupported field kind {kind}")]
    UnsupportedFieldKind {
        /// Column whose binding declares the kind
        column: String,
        /// The offending kind
        kind: FieldKind,
    },
}
