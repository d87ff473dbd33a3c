//! lexicache - a write-through vocabulary lookup cache
//!
//! Lookups hit an in-memory bounded cache; misses are generated by an
//! external chat-completion service, appended to a durable tabular store,
//! and only then cached. At startup the whole store is replayed through
//! the header-driven codec to rebuild the cache.

pub mod cache;
pub mod cli;
pub mod config;
pub mod generator;
pub mod observability;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod store;
