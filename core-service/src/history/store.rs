//! History Store - persisted scan log
//!
//! A single JSON document holding the ordered entry list. Every record call
//! reads the document, appends in memory, and rewrites it in full; the whole
//! cycle holds the store mutex so a concurrent reader can never observe a
//! torn write.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{HistoryEntry, ScanStats};
use crate::error::StorageError;
use crate::scoring::Label;

/// Get default history document path.
pub fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vantage")
        .join("history.json")
}

/// Persisted, append-only scan history.
pub struct HistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl HistoryStore {
    /// Open a store over the given document path. The document itself is
    /// created on the first record.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry. Failures surface to the caller: silently dropping
    /// audit history would be a correctness regression.
    pub fn record(&self, entry: HistoryEntry) -> Result<(), StorageError> {
        let _guard = self.lock.lock();

        let mut entries = self.read_document()?;
        entries.push(entry);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(&entries).map_err(StorageError::Corrupt)?;
        std::fs::write(&self.path, json)?;

        log::debug!("History entry recorded ({} total)", entries.len());
        Ok(())
    }

    /// All entries in insertion order. A missing document is an empty
    /// history, not an error.
    pub fn all(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        let _guard = self.lock.lock();
        self.read_document()
    }

    /// Aggregate counts, computed by scanning the document.
    pub fn stats(&self) -> Result<ScanStats, StorageError> {
        let entries = self.all()?;

        let malicious = entries.iter().filter(|e| e.result == Label::Malicious).count();

        Ok(ScanStats {
            total: entries.len(),
            malicious,
            benign: entries.len() - malicious,
        })
    }

    fn read_document(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = std::fs::read(&self.path)?;
        serde_json::from_slice(&data).map_err(StorageError::Corrupt)
    }
}
