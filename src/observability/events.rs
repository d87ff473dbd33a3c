//! Observability events for lexicache
//!
//! Every observable state transition in the lookup pipeline has an explicit,
//! typed event. Event names are the stable contract for log consumers.

use std::fmt;

/// Observable events in lexicache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete, ready to serve lookups
    BootComplete,
    /// Configuration loaded
    ConfigLoaded,

    // Bootstrap / prefetch
    /// Column schema discovered from the store header
    SchemaDiscovered,
    /// The store has no header row; startup cannot continue
    SchemaDiscoveryFailed,
    /// Full-store replay into the cache begins
    PrefetchStart,
    /// Full-store replay complete
    PrefetchComplete,
    /// A stored row failed to decode and was skipped
    RowSkipped,

    // Lookup pipeline
    /// Lookup served from the cache
    LookupHit,
    /// Lookup not in the cache, full pipeline runs
    LookupMiss,
    /// Generation request sent to the generator adapter
    GenerateStart,
    /// Generator returned a well-formed record set
    GenerateComplete,
    /// Generator failed or returned undecodable output
    GenerateFailed,
    /// Rows appended to the durable store
    PersistComplete,
    /// Durable store append failed
    PersistFailed,
    /// Record fields without a matching column were dropped on encode
    FieldsProjected,

    // Cache
    /// Cache read failed; the lookup proceeds as a miss
    CacheReadFailed,
    /// Cache population after a successful persist failed
    CachePopulateFailed,
    /// An entry was evicted to make room for a new key
    CacheEvict,
}

impl Event {
    /// Returns the event name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::BootComplete => "BOOT_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaDiscovered => "SCHEMA_DISCOVERED",
            Event::SchemaDiscoveryFailed => "SCHEMA_DISCOVERY_FAILED",
            Event::PrefetchStart => "PREFETCH_START",
            Event::PrefetchComplete => "PREFETCH_COMPLETE",
            Event::RowSkipped => "ROW_SKIPPED",
            Event::LookupHit => "LOOKUP_HIT",
            Event::LookupMiss => "LOOKUP_MISS",
            Event::GenerateStart => "GENERATE_START",
            Event::GenerateComplete => "GENERATE_COMPLETE",
            Event::GenerateFailed => "GENERATE_FAILED",
            Event::PersistComplete => "PERSIST_COMPLETE",
            Event::PersistFailed => "PERSIST_FAILED",
            Event::FieldsProjected => "FIELDS_PROJECTED",
            Event::CacheReadFailed => "CACHE_READ_FAILED",
            Event::CachePopulateFailed => "CACHE_POPULATE_FAILED",
            Event::CacheEvict => "CACHE_EVICT",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        let events = [
            Event::BootStart,
            Event::SchemaDiscovered,
            Event::LookupHit,
            Event::PersistFailed,
            Event::CacheEvict,
        ];
        for event in events {
            let name = event.name();
            assert!(!name.is_empty());
            assert!(name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display_matches_name() {
        assert_eq!(Event::LookupMiss.to_string(), "LOOKUP_MISS");
    }
}
