// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::StorageError;
use crate::history::{HistoryEntry, KeyValueStore};
use crate::observability::messages::history::HistoryCorrupted;
use crate::observability::messages::StructuredLog;

/// Storage key the history array is persisted under.
pub const HISTORY_KEY: &str = "humarizer_history";

pub const DEFAULT_CAPACITY: usize = 20;

/// Newest-first list of conversions, capped at `capacity` and written
/// through to a [`KeyValueStore`] on every change.
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    capacity: usize,
    items: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Loads whatever is persisted. Missing or unreadable data yields an
    /// empty history rather than an error.
    pub fn open(storage: S, capacity: usize) -> Self {
        let mut items = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    HistoryCorrupted {
                        key: HISTORY_KEY,
                        error: &e,
                    }
                    .log();
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                HistoryCorrupted {
                    key: HISTORY_KEY,
                    error: &e,
                }
                .log();
                Vec::new()
            }
        };
        items.truncate(capacity);

        Self {
            storage,
            capacity,
            items,
        }
    }

    /// Prepends `entry`, drops anything past capacity, and persists.
    ///
    /// The in-memory list is updated even when persisting fails.
    pub fn save(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.items.insert(0, entry);
        self.items.truncate(self.capacity);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.storage.remove(HISTORY_KEY)
    }

    pub fn items(&self) -> &[HistoryEntry] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(HISTORY_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{FileStore, MemoryStore};
    use crate::processors::{Mode, TransformRequest};
    use tempfile::TempDir;

    fn entry(n: usize) -> HistoryEntry {
        let request = TransformRequest::new(format!("input {}", n), Mode::Text, "casual", 0.5);
        HistoryEntry::new(&request, format!("output {}", n))
    }

    #[test]
    fn test_save_keeps_newest_first_up_to_capacity() {
        let mut history = HistoryStore::open(MemoryStore::new(), DEFAULT_CAPACITY);
        for n in 0..25 {
            history.save(entry(n)).unwrap();
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.items()[0].input, "input 24");
        assert_eq!(history.items()[19].input, "input 5");

        let persisted: Vec<HistoryEntry> =
            serde_json::from_str(&history.storage().get(HISTORY_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted.len(), 20);
        assert_eq!(persisted[0].input, "input 24");
    }

    #[test]
    fn test_corrupt_payload_opens_empty() {
        let storage = MemoryStore::with_entry(HISTORY_KEY, "{not json");
        let history = HistoryStore::open(storage, DEFAULT_CAPACITY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_oversized_payload_is_truncated_on_open() {
        let items: Vec<HistoryEntry> = (0..8).map(entry).collect();
        let storage = MemoryStore::with_entry(HISTORY_KEY, &serde_json::to_string(&items).unwrap());

        let history = HistoryStore::open(storage, 3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).unwrap().input, "input 0");
    }

    #[test]
    fn test_clear_removes_persisted_key() {
        let mut history = HistoryStore::open(MemoryStore::new(), DEFAULT_CAPACITY);
        history.save(entry(1)).unwrap();
        history.clear().unwrap();

        assert!(history.is_empty());
        assert_eq!(history.storage().get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_backed_history_survives_reopen() {
        let temp = TempDir::new().unwrap();
        {
            let mut history = HistoryStore::open(FileStore::new(temp.path()), 5);
            history.save(entry(1)).unwrap();
            history.save(entry(2)).unwrap();
        }

        let reopened = HistoryStore::open(FileStore::new(temp.path()), 5);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.items()[0].output, "output 2");
        assert!(temp.path().join("humarizer_history.json").exists());
    }
}
