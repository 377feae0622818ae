// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::processors::{Intensity, Mode, TransformRequest};

/// One past conversion and its result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub mode: Mode,
    pub option: String,
    pub intensity: Intensity,
    pub input: String,
    pub output: String,
    /// Milliseconds since the Unix epoch on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(request: &TransformRequest, output: impl Into<String>) -> Self {
        Self {
            mode: request.mode,
            option: request.option.clone(),
            intensity: request.intensity,
            input: request.payload.clone(),
            output: output.into(),
            time: Utc::now(),
        }
    }

    /// First `max_chars` characters of the input, with `...` when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.input.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}
