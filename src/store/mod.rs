//! Durable store adapter
//!
//! The store is a single table: row 1 is the header (column names,
//! order-significant for the session), every later row is one record.
//! From this process's perspective it is an append-only log; no row is
//! ever rewritten.

mod errors;
mod tsv;

pub use errors::{StoreError, StoreResult};
pub use tsv::TsvStore;

use crate::record::Row;

/// The tabular backend consumed by the lookup pipeline
///
/// Implementations are blocking calls with their own timeout policy; the
/// pipeline does not retry on their behalf.
pub trait DurableStore {
    /// Read the header row; fails with [`StoreError::NoHeader`] when the
    /// store is empty
    fn read_header(&self) -> StoreResult<Vec<String>>;

    /// Read every data row (the header excluded), in storage order
    fn read_all(&self) -> StoreResult<Vec<Row>>;

    /// Current physical row count, header included; fresh at call time
    fn row_count(&self) -> StoreResult<usize>;

    /// Append a batch of rows, all-or-nothing
    fn append(&self, rows: &[Row]) -> StoreResult<()>;
}
