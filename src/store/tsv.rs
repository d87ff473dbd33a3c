//! File-backed TSV store
//!
//! One physical row per line, cells joined by tabs, header on line 1.
//! Rows are only ever appended; nothing rewrites an existing line. The
//! file is the same shape the vocabulary deck export uses, so it can be
//! inspected and edited with ordinary tools.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::record::Row;

use super::errors::{StoreError, StoreResult};
use super::DurableStore;

/// Append-only TSV file store
#[derive(Debug)]
pub struct TsvStore {
    path: PathBuf,
}

impl TsvStore {
    /// Open a store at an existing file path
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a new store file with the given header row
    ///
    /// Fails if the file already exists.
    pub fn create(path: impl Into<PathBuf>, columns: &[String]) -> StoreResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::io(format!("create {}", path.display()), e))?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", join_cells(columns))
            .map_err(|e| StoreError::io("write header", e))?;
        writer
            .flush()
            .map_err(|e| StoreError::io("flush header", e))?;

        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let file = File::open(&self.path)
            .map_err(|e| StoreError::io(format!("open {}", self.path.display()), e))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| StoreError::io("read line", e))?;
            lines.push(line);
        }
        Ok(lines)
    }
}

impl DurableStore for TsvStore {
    fn read_header(&self) -> StoreResult<Vec<String>> {
        let lines = self.read_lines()?;
        let header = lines.first().ok_or(StoreError::NoHeader)?;
        if header.trim().is_empty() {
            return Err(StoreError::NoHeader);
        }
        Ok(split_cells(header))
    }

    fn read_all(&self) -> StoreResult<Vec<Row>> {
        let lines = self.read_lines()?;
        if lines.is_empty() {
            return Err(StoreError::NoHeader);
        }
        Ok(lines[1..].iter().map(|line| split_cells(line)).collect())
    }

    fn row_count(&self) -> StoreResult<usize> {
        Ok(self.read_lines()?.len())
    }

    fn append(&self, rows: &[Row]) -> StoreResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(format!("open {} for append", self.path.display()), e))?;

        // One buffered write + flush for the whole batch
        let mut writer = BufWriter::new(file);
        for row in rows {
            writeln!(writer, "{}", join_cells(row))
                .map_err(|e| StoreError::io("append row", e))?;
        }
        writer.flush().map_err(|e| StoreError::io("flush append", e))?;

        Ok(())
    }
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| sanitize_cell(cell))
        .collect::<Vec<_>>()
        .join("\t")
}

fn split_cells(line: &str) -> Row {
    line.split('\t').map(str::to_string).collect()
}

/// Tabs and newlines inside a cell would corrupt the line format
fn sanitize_cell(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn header() -> Vec<String> {
        vec!["vocabulary".to_string(), "synonyms".to_string()]
    }

    fn create_store(temp_dir: &TempDir) -> TsvStore {
        TsvStore::create(temp_dir.path().join("deck.tsv"), &header()).unwrap()
    }

    #[test]
    fn test_create_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        assert_eq!(store.read_header().unwrap(), header());
        assert_eq!(store.row_count().unwrap(), 1);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deck.tsv");
        TsvStore::create(&path, &header()).unwrap();

        let result = TsvStore::create(&path, &header());
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_append_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        let rows = vec![
            vec!["run".to_string(), "jog, sprint".to_string()],
            vec!["walk".to_string(), "stroll".to_string()],
        ];
        store.append(&rows).unwrap();

        assert_eq!(store.read_all().unwrap(), rows);
        assert_eq!(store.row_count().unwrap(), 3);
    }

    #[test]
    fn test_append_is_ordered_across_batches() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        store
            .append(&[vec!["a".to_string(), "".to_string()]])
            .unwrap();
        store
            .append(&[vec!["b".to_string(), "".to_string()]])
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows[0][0], "a");
        assert_eq!(rows[1][0], "b");
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deck.tsv");
        fs::write(&path, "").unwrap();

        let store = TsvStore::open(&path);
        assert!(matches!(store.read_header(), Err(StoreError::NoHeader)));
        assert!(matches!(store.read_all(), Err(StoreError::NoHeader)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = TsvStore::open(temp_dir.path().join("absent.tsv"));
        assert!(matches!(store.read_header(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_cells_are_sanitized_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        store
            .append(&[vec!["run".to_string(), "jog\tsprint\nleap".to_string()]])
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows[0], vec!["run".to_string(), "jog sprint leap".to_string()]);
    }
}
