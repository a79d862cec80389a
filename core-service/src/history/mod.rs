//! Scan History Module
//!
//! Append-only log of scored URLs and running aggregate counts. One entry is
//! written per scored request, on the trusted path and the classifier path
//! alike. Entries are never mutated or deleted.

mod store;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::scoring::Label;

pub use store::{default_history_path, HistoryStore};

/// Timestamp format of the persisted document.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scored URL, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub result: Label,
    pub reason: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub time: String,
}

impl HistoryEntry {
    /// Build an entry for a verdict, stamped with the current local time.
    pub fn new(url: &str, result: Label, reason: &str) -> Self {
        Self {
            url: url.to_string(),
            result,
            reason: reason.to_string(),
            time: chrono::Local::now().format(TIME_FORMAT).to_string(),
        }
    }
}

/// Aggregate counts over the whole history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub total: usize,
    pub malicious: usize,
    pub benign: usize,
}
