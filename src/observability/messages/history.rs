// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for history persistence.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Persisted history could not be parsed and was replaced by an empty log.
///
/// # Log Level
/// `warn!` - Data was discarded
pub struct HistoryCorrupted<'a> {
    pub key: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HistoryCorrupted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Discarding unreadable history under '{}': {}",
            self.key, self.error
        )
    }
}

impl StructuredLog for HistoryCorrupted<'_> {
    fn log(&self) {
        tracing::warn!(key = self.key, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("history_corrupted", span_name = name, key = self.key)
    }
}

/// Writing history back to storage failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct HistoryPersistFailed<'a> {
    pub key: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HistoryPersistFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to persist history '{}': {}", self.key, self.error)
    }
}

impl StructuredLog for HistoryPersistFailed<'_> {
    fn log(&self) {
        tracing::error!(key = self.key, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("history_persist_failed", span_name = name, key = self.key)
    }
}
