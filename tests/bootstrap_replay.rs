//! Bootstrap Replay Tests
//!
//! The cache has no durability of its own: startup replays the whole
//! store through the codec. These tests cover:
//! - Schema discovery from the header row (missing header is fatal)
//! - Empty store = valid empty cache
//! - Bad rows are skipped, never abort the replay
//! - Multi-sense grouping preserves row order
//! - Header reordering between sessions

use std::fs;
use std::sync::Arc;

use lexicache::config::LexicacheConfig;
use lexicache::generator::NullGenerator;
use lexicache::observability::MetricsRegistry;
use lexicache::pipeline::{BootstrapError, LookupError, LookupPipeline};
use lexicache::record::default_columns;
use lexicache::store::{DurableStore, TsvStore};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn boot_from(
    temp_dir: &TempDir,
) -> Result<LookupPipeline<NullGenerator, TsvStore>, BootstrapError> {
    let store_path = temp_dir.path().join("deck.tsv");
    let config = LexicacheConfig::with_store_path(&store_path);
    LookupPipeline::bootstrap(
        NullGenerator,
        TsvStore::open(&store_path),
        &config,
        Arc::new(MetricsRegistry::new()),
    )
}

fn write_deck(temp_dir: &TempDir, contents: &str) {
    fs::write(temp_dir.path().join("deck.tsv"), contents).unwrap();
}

// =============================================================================
// Schema discovery
// =============================================================================

#[test]
fn test_bootstrap_discovers_schema_from_header() {
    let temp_dir = TempDir::new().unwrap();
    TsvStore::create(temp_dir.path().join("deck.tsv"), &default_columns()).unwrap();

    let pipeline = boot_from(&temp_dir).unwrap();

    assert_eq!(pipeline.schema().len(), 11);
    assert_eq!(pipeline.schema().columns()[0], "vocabulary");
    assert_eq!(pipeline.cached_keys(), 0);
}

#[test]
fn test_missing_header_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "");

    let result = boot_from(&temp_dir);
    assert!(matches!(result, Err(BootstrapError::NoHeader)));
}

#[test]
fn test_missing_store_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    let result = boot_from(&temp_dir);
    assert!(matches!(result, Err(BootstrapError::Store(_))));
}

// =============================================================================
// Replay
// =============================================================================

#[test]
fn test_replay_loads_rows_into_cache() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(
        &temp_dir,
        "vocabulary\tsynonyms\nrun\tjog, sprint\nwalk\tstroll\n",
    );

    let pipeline = boot_from(&temp_dir).unwrap();

    assert_eq!(pipeline.cached_keys(), 2);
    let records = pipeline.lookup("run").unwrap();
    assert_eq!(records[0].synonyms, vec!["jog", "sprint"]);
}

#[test]
fn test_replay_groups_senses_preserving_row_order() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(
        &temp_dir,
        "vocabulary\tpart_of_speech\nrun\tverb\nwalk\tverb\nrun\tnoun\n",
    );

    let pipeline = boot_from(&temp_dir).unwrap();

    assert_eq!(pipeline.cached_keys(), 2);
    let records = pipeline.lookup("run").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].part_of_speech, "verb");
    assert_eq!(records[1].part_of_speech, "noun");
}

#[test]
fn test_replay_normalizes_stored_keys() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "vocabulary\tsynonyms\nRun \tjog\n");

    let pipeline = boot_from(&temp_dir).unwrap();

    assert!(pipeline.is_cached("run"));
    assert!(pipeline.is_cached("RUN "));
}

#[test]
fn test_bad_row_is_skipped_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    // Middle row has an unparseable archived cell.
    write_deck(
        &temp_dir,
        "vocabulary\tarchived\nrun\t0\nbroken\tnot-a-number\nwalk\t1\n",
    );

    let pipeline = boot_from(&temp_dir).unwrap();

    assert_eq!(pipeline.cached_keys(), 2);
    assert!(pipeline.is_cached("run"));
    assert!(pipeline.is_cached("walk"));
    assert!(!pipeline.is_cached("broken"));
    assert_eq!(pipeline.metrics().rows_skipped(), 1);
}

#[test]
fn test_row_with_empty_key_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "vocabulary\tsynonyms\n \tjog\nwalk\tstroll\n");

    let pipeline = boot_from(&temp_dir).unwrap();

    assert_eq!(pipeline.cached_keys(), 1);
    assert_eq!(pipeline.metrics().rows_skipped(), 1);
}

#[test]
fn test_short_rows_pad_with_absent_values() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "vocabulary\tpart_of_speech\tdefinition\nrun\tverb\n");

    let pipeline = boot_from(&temp_dir).unwrap();

    let records = pipeline.lookup("run").unwrap();
    assert_eq!(records[0].part_of_speech, "verb");
    assert_eq!(records[0].definition, "");
}

#[test]
fn test_reordered_header_still_binds_by_name() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "synonyms\tvocabulary\njog, sprint\trun\n");

    let pipeline = boot_from(&temp_dir).unwrap();

    let records = pipeline.lookup("run").unwrap();
    assert_eq!(records[0].vocabulary, "run");
    assert_eq!(records[0].synonyms, vec!["jog", "sprint"]);
}

// =============================================================================
// Replay equivalence across restarts
// =============================================================================

#[test]
fn test_miss_without_generator_fails_and_store_stays_replayable() {
    let temp_dir = TempDir::new().unwrap();
    write_deck(&temp_dir, "vocabulary\tsynonyms\nrun\tjog\n");

    let pipeline = boot_from(&temp_dir).unwrap();
    let err = pipeline.lookup("absent").unwrap_err();
    assert!(matches!(err, LookupError::GenerationFailed(_)));

    // The failed miss wrote nothing; a restart sees the same store.
    let store = TsvStore::open(temp_dir.path().join("deck.tsv"));
    assert_eq!(store.read_all().unwrap().len(), 1);
    let rebuilt = boot_from(&temp_dir).unwrap();
    assert_eq!(rebuilt.cached_keys(), 1);
}
