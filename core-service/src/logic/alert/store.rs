//! Alert Store
//!
//! Append-only JSONL persistence for alert entries.
//! One entry per line; files rotate by size.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Timelike, Utc};

use super::error::StoreResult;
use super::history::AlertLog;
use super::types::AlertLogEntry;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum file size before rotation (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Store file extension
const STORE_EXT: &str = "jsonl";

/// Attempts at finding a free file name within one millisecond
const MAX_NAME_ATTEMPTS: u32 = 1000;

// ============================================================================
// STORE
// ============================================================================

pub struct AlertStore {
    writer: BufWriter<File>,
    current_file: PathBuf,
    current_size: u64,
    base_dir: PathBuf,
    max_file_size: u64,
    entries_written: u64,
}

impl AlertStore {
    /// Open a store in the given directory, creating it if needed.
    /// Appends to the newest existing file while it has room.
    pub fn open(base_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_max_file_size(base_dir, MAX_FILE_SIZE)
    }

    pub fn with_max_file_size(base_dir: impl Into<PathBuf>, max_file_size: u64) -> StoreResult<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;

        let reusable = list_store_files(&base_dir)?
            .pop()
            .filter(|path| path.metadata().map_or(false, |m| m.is_file() && m.len() < max_file_size));

        let (file_path, file) = match reusable {
            Some(path) => {
                let file = Self::open_append(&path)?;
                log::info!("Reusing alert store: {:?}", path);
                (path, file)
            }
            None => Self::open_new_file(&base_dir)?,
        };
        let current_size = file.metadata()?.len();

        Ok(Self {
            writer: BufWriter::new(file),
            current_file: file_path,
            current_size,
            base_dir,
            max_file_size,
            entries_written: 0,
        })
    }

    fn open_append(path: &Path) -> StoreResult<File> {
        Ok(OpenOptions::new().create(true).append(true).open(path)?)
    }

    /// Create a fresh file named after the current time (ms) plus a sequence
    /// number, so two files opened in the same instant never collide.
    fn open_new_file(base_dir: &Path) -> StoreResult<(PathBuf, File)> {
        let now = Utc::now();
        let stem = format!(
            "alerts_{}_{:02}_{:02}_{:02}{:02}{:02}_{:03}",
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis()
        );

        let mut last_err = None;
        for seq in 0..MAX_NAME_ATTEMPTS {
            let file_path = base_dir.join(format!("{}_{:03}.{}", stem, seq, STORE_EXT));
            match OpenOptions::new().create_new(true).append(true).open(&file_path) {
                Ok(file) => {
                    log::info!("Opened alert store: {:?}", file_path);
                    return Ok((file_path, file));
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => last_err = Some(e),
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_err
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::AlreadyExists, "no free store file name"))
            .into())
    }

    /// Append one entry and flush
    pub fn append(&mut self, entry: &AlertLogEntry) -> StoreResult<()> {
        let line = entry.to_jsonl()?;
        let bytes = line.as_bytes();

        // Current file removed behind our back: recreate it at the same path
        if !self.current_file.is_file() {
            self.reopen()?;
        }

        if self.current_size > 0 && self.current_size + bytes.len() as u64 > self.max_file_size {
            self.rotate()?;
        }

        self.writer.write_all(bytes)?;
        self.writer.write_all(b"\n")?;
        self.current_size += bytes.len() as u64 + 1;
        self.writer.flush()?;

        self.entries_written += 1;
        Ok(())
    }

    fn reopen(&mut self) -> StoreResult<()> {
        log::warn!("Alert store file {:?} is missing, recreating", self.current_file);
        let file = Self::open_append(&self.current_file)?;
        self.current_size = file.metadata()?.len();
        self.writer = BufWriter::new(file);
        Ok(())
    }

    fn rotate(&mut self) -> StoreResult<()> {
        self.writer.flush()?;

        let (new_path, new_file) = Self::open_new_file(&self.base_dir)?;
        let new_size = new_file.metadata()?.len();
        self.writer = BufWriter::new(new_file);

        log::info!("Rotated alert store from {:?} to {:?}", self.current_file, new_path);
        self.current_file = new_path;
        self.current_size = new_size;
        Ok(())
    }

    pub fn current_file(&self) -> &Path {
        &self.current_file
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Entries appended through this handle
    pub fn entries_written(&self) -> u64 {
        self.entries_written
    }
}

// ============================================================================
// QUERY API
// ============================================================================

/// Read every entry in one store file, in file order.
/// Lines that fail to parse are skipped.
pub fn read_entries(file_path: &Path) -> StoreResult<Vec<AlertLogEntry>> {
    let reader = BufReader::new(File::open(file_path)?);
    let mut entries = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<AlertLogEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("Skipping malformed alert at {:?}:{}: {}", file_path, n + 1, e),
        }
    }

    Ok(entries)
}

/// All store files in `dir`, sorted by name (which embeds the timestamp)
pub fn list_store_files(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |e| e == STORE_EXT) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Rebuild the newest-first history from every file in `dir`
pub fn load_history(dir: &Path) -> StoreResult<AlertLog> {
    let mut entries = Vec::new();
    for file in list_store_files(dir)? {
        entries.extend(read_entries(&file)?);
    }
    log::info!("Loaded {} alert(s) from {:?}", entries.len(), dir);
    Ok(AlertLog::from_entries(entries))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alert::{build_alert_entry, Audience};
    use crate::logic::telemetry::samples::avalanche_sectors;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    #[test]
    fn test_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let store = AlertStore::open(temp_dir.path()).unwrap();
        assert!(store.current_file().exists());
        assert_eq!(store.entries_written(), 0);
    }

    #[test]
    fn test_append_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();

        let entry = build_alert_entry(&avalanche_sectors(), 75.0, Audience::Researchers, "Slab risk", Utc::now());
        store.append(&entry).unwrap();

        let entries = read_entries(store.current_file()).unwrap();
        assert_eq!(entries, vec![entry]);
        assert_eq!(store.entries_written(), 1);
    }

    #[test]
    fn test_jsonl_format() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();

        for i in 0..3 {
            let entry = build_alert_entry(&[], 50.0, Audience::Public, &format!("Alert {}", i), Utc::now());
            store.append(&entry).unwrap();
        }

        let content = std::fs::read_to_string(store.current_file()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(serde_json::from_str::<AlertLogEntry>(line).is_ok());
        }
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();
        store.append(&build_alert_entry(&[], 50.0, Audience::Public, "ok", Utc::now())).unwrap();

        let mut raw = OpenOptions::new().append(true).open(store.current_file()).unwrap();
        writeln!(raw, "{{not json").unwrap();
        writeln!(raw).unwrap();

        let entries = read_entries(store.current_file()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_load_history_is_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();

        let t0 = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        for i in 0..3 {
            let entry = build_alert_entry(&[], 50.0, Audience::Public, &format!("#{}", i), t0 + Duration::minutes(i));
            store.append(&entry).unwrap();
        }

        let log = load_history(temp_dir.path()).unwrap();
        let messages: Vec<&str> = log.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["#2", "#1", "#0"]);
    }

    #[test]
    fn test_list_ignores_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let _store = AlertStore::open(temp_dir.path()).unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "hi").unwrap();

        let files = list_store_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_rotation_splits_files_and_keeps_entries() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::with_max_file_size(temp_dir.path(), 64).unwrap();

        for i in 0..3 {
            let entry = build_alert_entry(&avalanche_sectors(), 75.0, Audience::Public, &format!("#{}", i), Utc::now());
            store.append(&entry).unwrap();
        }

        // Every entry is larger than the cap, so each lands in its own file
        let files = list_store_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        for file in &files {
            assert_eq!(read_entries(file).unwrap().len(), 1);
        }
        assert_eq!(load_history(temp_dir.path()).unwrap().len(), 3);
    }

    #[test]
    fn test_reopen_reuses_latest_file() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = AlertStore::open(temp_dir.path()).unwrap();
            store.append(&build_alert_entry(&[], 50.0, Audience::Public, "before", Utc::now())).unwrap();
        }
        let mut store = AlertStore::open(temp_dir.path()).unwrap();
        store.append(&build_alert_entry(&[], 50.0, Audience::Public, "after", Utc::now())).unwrap();

        let files = list_store_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(read_entries(&files[0]).unwrap().len(), 2);
    }

    #[test]
    fn test_full_file_is_not_reused() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = AlertStore::with_max_file_size(temp_dir.path(), 16).unwrap();
            store.append(&build_alert_entry(&[], 50.0, Audience::Public, "big", Utc::now())).unwrap();
        }
        let store = AlertStore::with_max_file_size(temp_dir.path(), 16).unwrap();
        assert_eq!(list_store_files(temp_dir.path()).unwrap().len(), 2);
        assert_eq!(std::fs::metadata(store.current_file()).unwrap().len(), 0);
    }

    #[test]
    fn test_removed_file_is_recreated() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();
        store.append(&build_alert_entry(&[], 50.0, Audience::Public, "gone", Utc::now())).unwrap();

        std::fs::remove_file(store.current_file()).unwrap();
        store.append(&build_alert_entry(&[], 50.0, Audience::Public, "back", Utc::now())).unwrap();

        let entries = read_entries(store.current_file()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message(), "back");
    }

    #[test]
    fn test_append_fails_when_file_replaced_by_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = AlertStore::open(temp_dir.path()).unwrap();
        let path = store.current_file().to_path_buf();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = store.append(&build_alert_entry(&[], 50.0, Audience::Public, "x", Utc::now()));
        assert!(matches!(result, Err(crate::logic::alert::StoreError::Io(_))));
        assert_eq!(store.entries_written(), 0);
    }

    #[test]
    fn test_missing_dir_loads_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        let log = load_history(&temp_dir.path().join("nope")).unwrap();
        assert!(log.is_empty());
    }
}
