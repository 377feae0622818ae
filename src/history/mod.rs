// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded, persisted log of past conversions.

mod entry;
mod storage;
mod store;

pub use entry::HistoryEntry;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{HistoryStore, DEFAULT_CAPACITY, HISTORY_KEY};
