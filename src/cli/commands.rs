//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use crate::config::LexicacheConfig;
use crate::generator::NullGenerator;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::pipeline::LookupPipeline;
use crate::record::default_columns;
use crate::store::TsvStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Get { config, word } => get(&config, &word),
        Command::Stats { config } => stats(&config),
    }
}

/// Create the store file with the default header row
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = TsvStore::create(&config.store_path, &default_columns())?;
    println!("initialized store at {}", store.path().display());
    Ok(())
}

/// Bootstrap from the store and look one word up
///
/// The CLI runs without a chat transport, so a miss reports that
/// generation is unavailable rather than filling the store.
pub fn get(config_path: &Path, word: &str) -> CliResult<()> {
    let pipeline = boot(config_path)?;
    let records = pipeline.lookup(word)?;
    println!("{}", serde_json::to_string_pretty(&records).unwrap_or_default());
    Ok(())
}

/// Print store and cache statistics as JSON
pub fn stats(config_path: &Path) -> CliResult<()> {
    let pipeline = boot(config_path)?;
    let stats = serde_json::json!({
        "columns": pipeline.schema().columns(),
        "cached_keys": pipeline.cached_keys(),
        "rows_skipped": pipeline.metrics().rows_skipped(),
    });
    println!("{}", serde_json::to_string_pretty(&stats).unwrap_or_default());
    Ok(())
}

fn load_config(config_path: &Path) -> CliResult<LexicacheConfig> {
    let config = LexicacheConfig::load(config_path)?;
    Logger::info(
        Event::ConfigLoaded.name(),
        &[("store_path", &config.store_path.display().to_string())],
    );
    Ok(config)
}

fn boot(config_path: &Path) -> CliResult<LookupPipeline<NullGenerator, TsvStore>> {
    Logger::info(Event::BootStart.name(), &[]);
    let config = load_config(config_path)?;
    let store = TsvStore::open(&config.store_path);
    let metrics = Arc::new(MetricsRegistry::new());
    let pipeline = LookupPipeline::bootstrap(NullGenerator, store, &config, metrics)?;
    Logger::info(
        Event::BootComplete.name(),
        &[("cached_keys", &pipeline.cached_keys().to_string())],
    );
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir) -> std::path::PathBuf {
        let store_path = temp_dir.path().join("deck.tsv");
        let config_path = temp_dir.path().join("lexicache.json");
        fs::write(
            &config_path,
            format!(r#"{{"store_path": "{}"}}"#, store_path.display()),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_init_creates_store_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);

        init(&config_path).unwrap();

        let contents = fs::read_to_string(temp_dir.path().join("deck.tsv")).unwrap();
        assert!(contents.starts_with("vocabulary\t"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);

        init(&config_path).unwrap();
        assert!(init(&config_path).is_err());
    }

    #[test]
    fn test_get_hits_stored_word() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);
        init(&config_path).unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(temp_dir.path().join("deck.tsv"))
            .and_then(|mut f| {
                use std::io::Write;
                writeln!(f, "run\tverb\t\t\tjog, sprint\t\t\t\t\t\t0")
            })
            .unwrap();

        assert!(get(&config_path, "RUN ").is_ok());
    }

    #[test]
    fn test_get_miss_without_generator_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);
        init(&config_path).unwrap();

        assert!(get(&config_path, "absent").is_err());
    }

    #[test]
    fn test_stats_on_missing_store_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);

        assert!(stats(&config_path).is_err());
    }
}
