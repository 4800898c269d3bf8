//! Alert History
//!
//! Caller-owned, newest-first sequence of alert entries.
//! Append-only: there is no removal or in-place mutation.

use serde::Serialize;

use super::types::{AlertId, AlertLogEntry};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AlertLog {
    entries: Vec<AlertLogEntry>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted history. Entries are re-sorted newest first;
    /// equal timestamps keep their relative order.
    pub fn from_entries(mut entries: Vec<AlertLogEntry>) -> Self {
        entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Self { entries }
    }

    /// Insert at the front (newest first)
    pub fn prepend(&mut self, entry: AlertLogEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[AlertLogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlertLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&AlertLogEntry> {
        self.entries.first()
    }

    pub fn get(&self, id: &AlertId) -> Option<&AlertLogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AlertLog {
    type Item = &'a AlertLogEntry;
    type IntoIter = std::slice::Iter<'a, AlertLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
