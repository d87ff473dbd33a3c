//! Write-through lookup pipeline
//!
//! Per incoming key: cache check → generate → persist → cache populate.
//! The one ordering that matters: a key enters the cache only after its
//! rows are durably appended. The cache has no durability of its own; a
//! restart must be able to rebuild it wholesale by replaying the store.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::cache::LookupCache;
use crate::config::LexicacheConfig;
use crate::generator::Generator;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::record::{decode_row, encode_row, normalize_key, VocabularyEntry};
use crate::schema::Schema;
use crate::store::DurableStore;

use super::errors::{BootstrapError, LookupError, LookupResult};

/// The lookup/generation/persistence pipeline
///
/// Owns the cache and the session schema; consumes the generator and
/// durable store adapters. One instance serves the whole process; lookups
/// for different keys may run concurrently.
pub struct LookupPipeline<G, S> {
    generator: G,
    store: S,
    cache: LookupCache<Vec<VocabularyEntry>>,
    schema: Schema,
    metrics: Arc<MetricsRegistry>,
}

impl<G: Generator, S: DurableStore> LookupPipeline<G, S> {
    /// Build the pipeline by replaying the durable store into the cache
    ///
    /// Reads the header once to establish the session schema (a missing
    /// header is fatal), then decodes every stored row, groups records by
    /// normalized key preserving row order, and bulk-loads the cache. A
    /// row that fails to decode is skipped and logged; it never aborts
    /// bootstrap. A store with only a header is a valid empty cache.
    pub fn bootstrap(
        generator: G,
        store: S,
        config: &LexicacheConfig,
        metrics: Arc<MetricsRegistry>,
    ) -> Result<Self, BootstrapError> {
        let columns = store.read_header().map_err(|e| {
            let e: BootstrapError = e.into();
            Logger::fatal(
                Event::SchemaDiscoveryFailed.name(),
                &[("error", &e.to_string())],
            );
            e
        })?;
        let schema = Schema::from_header(columns);
        Logger::info(
            Event::SchemaDiscovered.name(),
            &[("columns", &schema.len().to_string())],
        );

        Logger::info(Event::PrefetchStart.name(), &[]);
        let rows = store.read_all()?;

        // Group decoded records by key, preserving row order within a key
        // and first-seen order across keys.
        let mut grouped: HashMap<String, Vec<VocabularyEntry>> = HashMap::new();
        let mut key_order: Vec<String> = Vec::new();
        let mut skipped: u64 = 0;

        for (index, row) in rows.iter().enumerate() {
            // Row numbers are 1-based and include the header line.
            let row_number = (index + 2).to_string();

            let entry: VocabularyEntry = match decode_row(row, &schema) {
                Ok(entry) => entry,
                Err(e) => {
                    Logger::warn(
                        Event::RowSkipped.name(),
                        &[("row", &row_number), ("error", &e.to_string())],
                    );
                    metrics.incr_rows_skipped();
                    skipped += 1;
                    continue;
                }
            };

            let key = entry.key();
            if key.is_empty() {
                Logger::warn(
                    Event::RowSkipped.name(),
                    &[("row", &row_number), ("error", "empty key field")],
                );
                metrics.incr_rows_skipped();
                skipped += 1;
                continue;
            }

            if !grouped.contains_key(&key) {
                key_order.push(key.clone());
            }
            grouped.entry(key).or_default().push(entry);
        }

        let cache = LookupCache::new(config.cache_capacity);
        for key in &key_order {
            if let Some(records) = grouped.remove(key) {
                if let Err(e) = cache.set(key, records) {
                    Logger::error(
                        Event::CachePopulateFailed.name(),
                        &[("key", key), ("error", &e.to_string())],
                    );
                }
            }
        }

        Logger::info(
            Event::PrefetchComplete.name(),
            &[
                ("rows", &rows.len().to_string()),
                ("keys", &key_order.len().to_string()),
                ("skipped", &skipped.to_string()),
            ],
        );

        Ok(Self {
            generator,
            store,
            cache,
            schema,
            metrics,
        })
    }

    /// Look up a key, generating and persisting on a miss
    ///
    /// A hit returns the cached record set without touching the generator
    /// or the store. On a miss the pipeline is strictly sequential:
    /// generate, append every row in one batch, and only then populate
    /// the cache. Generation and persistence failures are terminal for
    /// the request and leave cache and store untouched beyond what had
    /// already completed. A cache populate failure after a successful
    /// append is logged, not surfaced: the store is already correct and
    /// the next lookup re-derives the entry.
    pub fn lookup(&self, raw_key: &str) -> LookupResult<Vec<VocabularyEntry>> {
        let request_id = Uuid::new_v4().to_string();
        let key = normalize_key(raw_key);
        self.metrics.incr_lookups();

        match self.cache.get(&key) {
            Ok(Some(records)) => {
                Logger::info(
                    Event::LookupHit.name(),
                    &[("key", &key), ("request_id", &request_id)],
                );
                self.metrics.incr_cache_hits();
                return Ok(records);
            }
            Ok(None) => {}
            Err(e) => {
                // A failed cache read is just a miss; the pipeline re-derives.
                Logger::warn(
                    Event::CacheReadFailed.name(),
                    &[
                        ("key", &key),
                        ("request_id", &request_id),
                        ("error", &e.to_string()),
                    ],
                );
            }
        }

        Logger::info(
            Event::LookupMiss.name(),
            &[("key", &key), ("request_id", &request_id)],
        );
        self.metrics.incr_cache_misses();

        // GENERATE
        Logger::info(
            Event::GenerateStart.name(),
            &[("key", &key), ("request_id", &request_id)],
        );
        let records = match self.generator.generate(&key) {
            Ok(records) => records,
            Err(e) => {
                Logger::error(
                    Event::GenerateFailed.name(),
                    &[
                        ("key", &key),
                        ("request_id", &request_id),
                        ("error", &e.to_string()),
                    ],
                );
                self.metrics.incr_generation_failures();
                return Err(LookupError::GenerationFailed(e));
            }
        };
        if records.is_empty() {
            // An empty record set is a generation failure; nothing is
            // persisted or cached.
            let e = crate::generator::GeneratorError::EmptyResult;
            Logger::error(
                Event::GenerateFailed.name(),
                &[
                    ("key", &key),
                    ("request_id", &request_id),
                    ("error", &e.to_string()),
                ],
            );
            self.metrics.incr_generation_failures();
            return Err(LookupError::GenerationFailed(e));
        }
        self.metrics.incr_generations();
        Logger::info(
            Event::GenerateComplete.name(),
            &[
                ("key", &key),
                ("request_id", &request_id),
                ("senses", &records.len().to_string()),
            ],
        );

        // PERSIST — the durability boundary; never undone by later failures
        self.persist(&key, &request_id, &records).map_err(|e| {
            Logger::error(
                Event::PersistFailed.name(),
                &[
                    ("key", &key),
                    ("request_id", &request_id),
                    ("error", &e.to_string()),
                ],
            );
            self.metrics.incr_persist_failures();
            e
        })?;

        // CACHE_POPULATE — only after a successful append
        match self.cache.set(&key, records.clone()) {
            Ok(Some(victim)) => {
                Logger::info(
                    Event::CacheEvict.name(),
                    &[("inserted", &key), ("evicted", &victim)],
                );
                self.metrics.incr_evictions();
            }
            Ok(None) => {}
            Err(e) => {
                Logger::error(
                    Event::CachePopulateFailed.name(),
                    &[("key", &key), ("error", &e.to_string())],
                );
            }
        }

        Ok(records)
    }

    /// Encode all records for a key and append them in one batch
    fn persist(
        &self,
        key: &str,
        request_id: &str,
        records: &[VocabularyEntry],
    ) -> LookupResult<()> {
        let mut rows = Vec::with_capacity(records.len());
        let mut projected: Vec<&'static str> = Vec::new();

        for record in records {
            let encoded = encode_row(record, &self.schema)?;
            projected = encoded.projected;
            rows.push(encoded.row);
        }

        if !projected.is_empty() {
            Logger::trace(
                Event::FieldsProjected.name(),
                &[("key", key), ("fields", &projected.join(","))],
            );
        }

        // Fresh row count at append time; rows land starting one past it.
        let start_row = self.store.row_count()? + 1;
        self.store.append(&rows)?;

        Logger::info(
            Event::PersistComplete.name(),
            &[
                ("key", key),
                ("request_id", request_id),
                ("rows", &rows.len().to_string()),
                ("start_row", &start_row.to_string()),
            ],
        );
        self.metrics.add_rows_appended(rows.len() as u64);

        Ok(())
    }

    /// The session schema discovered at bootstrap
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of keys currently cached
    pub fn cached_keys(&self) -> usize {
        self.cache.len().unwrap_or(0)
    }

    /// Whether a normalized form of the key is currently cached
    pub fn is_cached(&self, raw_key: &str) -> bool {
        matches!(self.cache.get(&normalize_key(raw_key)), Ok(Some(_)))
    }

    /// Metrics handle shared with the rest of the process
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }
}
