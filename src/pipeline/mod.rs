//! Lookup orchestration
//!
//! The pipeline wires the cache, the generator and the durable store into
//! one write-through flow and owns its correctness guarantee: the cache
//! never holds a key whose records are not already durably stored.
//!
//! Concurrent lookups for the same key are not deduplicated: each miss
//! generates and persists independently, so simultaneous misses for one
//! key can append duplicate rows. Replay tolerates that (duplicate rows
//! group under the same key) and whole-key cache writes keep every
//! observable value well-formed.

mod errors;
mod lookup;

pub use errors::{BootstrapError, LookupError, LookupResult};
pub use lookup::LookupPipeline;
