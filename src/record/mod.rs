//! Record model and header-driven row codec
//!
//! Records carry named, typed fields; the durable store carries flat
//! positional rows. This module owns both sides of that boundary:
//!
//! - One declared binding table per record type (column name → field)
//! - Pure encode/decode against the runtime-discovered schema
//! - Key normalization shared by the read and write paths

mod binding;
mod codec;
mod errors;
mod types;

pub use binding::{FieldBinding, FieldKind, FieldValue, RowRecord};
pub use codec::{decode_row, encode_row, EncodedRow, Row, MULTI_VALUE_DELIMITER};
pub use errors::{CodecError, CodecResult};
pub use types::{default_columns, normalize_key, VocabularyEntry};
