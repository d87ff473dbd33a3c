//! Header-driven record↔row codec
//!
//! Pure transformation between structured records and flat positional rows,
//! driven by the session [`Schema`](crate::schema::Schema) rather than a
//! compile-time column order. The codec tolerates header reordering and
//! short rows: the store is edited by humans out-of-band.

use crate::schema::Schema;

use super::binding::{FieldKind, FieldValue, RowRecord};
use super::errors::{CodecError, CodecResult};

/// Delimiter joining multi-value field elements inside a single cell
pub const MULTI_VALUE_DELIMITER: &str = ", ";

/// A flat positional row, cell-aligned to the session schema
pub type Row = Vec<String>;

/// The outcome of encoding one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow {
    /// The encoded row, exactly one cell per schema column
    pub row: Row,
    /// Bound fields whose column is absent from the schema (projected away)
    pub projected: Vec<&'static str>,
}

/// Encode a record into a row aligned to `schema`
///
/// For each column in schema order: the matching field is serialized into
/// one cell (multi-value fields joined with [`MULTI_VALUE_DELIMITER`],
/// scalar text trimmed, integers formatted); a column with no matching
/// field becomes an empty cell. Fields with no matching column are dropped
/// and reported in [`EncodedRow::projected`].
pub fn encode_row<R: RowRecord>(record: &R, schema: &Schema) -> CodecResult<EncodedRow> {
    let mut row = Vec::with_capacity(schema.len());

    for column in schema.columns() {
        let cell = match R::binding_for(column) {
            None => String::new(),
            Some(binding) => match (binding.get)(record) {
                FieldValue::Text(s) => s.trim().to_string(),
                FieldValue::Multi(items) => items.join(MULTI_VALUE_DELIMITER),
                FieldValue::Integer(n) => n.to_string(),
                FieldValue::Boolean(_) => {
                    return Err(CodecError::UnsupportedFieldKind {
                        column: column.clone(),
                        kind: FieldKind::Boolean,
                    })
                }
            },
        };
        row.push(cell);
    }

    let projected = R::bindings()
        .iter()
        .filter(|b| schema.position(b.column).is_none())
        .map(|b| b.column)
        .collect();

    Ok(EncodedRow { row, projected })
}

/// Decode a row aligned to `schema` into a record
///
/// Columns beyond the end of the row are absent, not an error; the matching
/// fields keep their defaults. Cells are parsed according to the declared
/// field kind: integer parse failures surface as
/// [`CodecError::SchemaMismatch`], kinds the codec cannot decode as
/// [`CodecError::UnsupportedFieldKind`]. Columns with no matching field are
/// ignored.
pub fn decode_row<R: RowRecord>(row: &[String], schema: &Schema) -> CodecResult<R> {
    let mut record = R::default();

    for (position, column) in schema.columns().iter().enumerate() {
        let Some(cell) = row.get(position) else {
            continue;
        };
        let Some(binding) = R::binding_for(column) else {
            continue;
        };

        let value = match binding.kind {
            FieldKind::Text => FieldValue::Text(cell.clone()),
            FieldKind::MultiValue => FieldValue::Multi(split_multi_value(cell)),
            FieldKind::Integer => {
                let n = cell.trim().parse::<i64>().map_err(|_| CodecError::SchemaMismatch {
                    column: column.clone(),
                    cell: cell.clone(),
                    expected: FieldKind::Integer,
                })?;
                FieldValue::Integer(n)
            }
            FieldKind::Boolean => {
                return Err(CodecError::UnsupportedFieldKind {
                    column: column.clone(),
                    kind: FieldKind::Boolean,
                })
            }
        };

        (binding.set)(&mut record, value);
    }

    Ok(record)
}

/// Split a multi-value cell into its elements
///
/// An empty cell is an empty list, not a single empty element.
fn split_multi_value(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(MULTI_VALUE_DELIMITER)
        .map(str::to_string)
        .collect()
}
