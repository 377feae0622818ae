// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule data for the humanization transforms.
//!
//! [`RuleTable`] is plain data: ordered lists, because substitutions chain and
//! later rules see the output of earlier ones. It deserializes from the `rules`
//! section of the YAML config with every missing list filled from the built-in
//! defaults, and serializes into the built page so the browser tool runs on the
//! same data. [`Rules`] is the compiled, immutable form shared by processors.

mod compiled;
mod defaults;

pub use compiled::{apply_swaps, CompiledSwap, Rules};

use serde::{Deserialize, Serialize};

/// One literal replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Swap {
    pub from: String,
    pub to: String,
}

impl Swap {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleTable {
    /// AI-cliche phrases deleted (with trailing whitespace) from text.
    pub ai_phrases: Vec<String>,
    /// Formal-to-informal words, whole word, case-insensitive.
    pub word_swaps: Vec<Swap>,
    /// Negations contracted by the casual tone.
    pub contractions: Vec<Swap>,
    pub casual_starters: Vec<String>,
    pub casual_connectors: Vec<String>,
    pub casual_fillers: Vec<String>,
    pub professional_swaps: Vec<Swap>,
    pub story_openers: Vec<String>,
    pub story_transitions: Vec<String>,
    pub academic_swaps: Vec<Swap>,
    pub academic_connector: String,
    pub debug_statements: Vec<String>,
    pub review_comments: Vec<String>,
    /// Declaration keyword downgraded by the standard code style.
    pub declaration_swap: Swap,
    /// Identifiers shortened by the standard code style, case-sensitive.
    pub identifier_renames: Vec<Swap>,
    pub todo_comment: String,
}

impl Default for RuleTable {
    fn default() -> Self {
        defaults::builtin()
    }
}
