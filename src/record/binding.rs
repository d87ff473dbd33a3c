//! Field↔column binding tables
//!
//! The durable store is schema-less at the storage layer (plain rows) but
//! schema-full at the logical layer (named fields). Each record type
//! declares, once, how its fields bind to column names; the codec walks the
//! runtime-discovered schema and resolves columns through this table. No
//! runtime type introspection is involved.

use std::fmt;

/// The kinds of field a binding can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar UTF-8 text
    Text,
    /// Ordered sequence of text values, stored joined in a single cell
    MultiValue,
    /// Scalar 64-bit signed integer
    Integer,
    /// Scalar boolean; declarable but not yet serializable
    Boolean,
}

impl FieldKind {
    /// Returns the kind name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::MultiValue => "multi-value",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A typed field value moving through the codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Scalar text
    Text(String),
    /// Multi-value text
    Multi(Vec<String>),
    /// Scalar integer
    Integer(i64),
    /// Scalar boolean
    Boolean(bool),
}

impl FieldValue {
    /// Returns the kind this value belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Multi(_) => FieldKind::MultiValue,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Boolean(_) => FieldKind::Boolean,
        }
    }
}

/// Binds one column name to one field of a record type
///
/// `get` reads the field out of a record; `set` writes a decoded value back
/// in. Setters ignore values of the wrong variant, so a binding can never
/// corrupt an unrelated field.
pub struct FieldBinding<R> {
    /// Column name this field binds to
    pub column: &'static str,
    /// Declared field kind, used to pick the decode parse
    pub kind: FieldKind,
    /// Field reader
    pub get: fn(&R) -> FieldValue,
    /// Field writer
    pub set: fn(&mut R, FieldValue),
}

/// A record type that can cross the record↔row boundary
///
/// Implementors declare their binding table once; the codec does the rest.
/// The `'static` bound lets the table itself live in a `static`.
pub trait RowRecord: Default + 'static {
    /// The full binding table for this record type
    fn bindings() -> &'static [FieldBinding<Self>]
    where
        Self: Sized;

    /// Resolve a column name to its binding, if any field binds to it
    fn binding_for(column: &str) -> Option<&'static FieldBinding<Self>>
    where
        Self: Sized,
    {
        Self::bindings().iter().find(|b| b.column == column)
    }
}
