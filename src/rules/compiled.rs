// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::{Captures, NoExpand, Regex};
use std::collections::HashMap;

use super::{RuleTable, Swap};
use crate::errors::RuleError;
use crate::traits::RandomSource;

/// A swap with its pattern compiled once.
#[derive(Debug, Clone)]
pub struct CompiledSwap {
    pattern: Regex,
    replacement: String,
}

impl CompiledSwap {
    fn whole_word(table: &'static str, swap: &Swap, case_insensitive: bool) -> Result<Self, RuleError> {
        let flags = if case_insensitive { "(?i)" } else { "" };
        let pattern = format!(r"{}\b{}\b", flags, regex::escape(&swap.from));
        Ok(Self {
            pattern: compile(table, &pattern)?,
            replacement: swap.to.clone(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Compiled, immutable rule set shared by every processor.
#[derive(Debug, Clone)]
pub struct Rules {
    table: RuleTable,
    phrases: Vec<Regex>,
    word_swaps: Vec<CompiledSwap>,
    contraction_pattern: Option<Regex>,
    contractions: HashMap<String, String>,
    professional_swaps: Vec<CompiledSwap>,
    academic_swaps: Vec<CompiledSwap>,
    identifier_renames: Vec<CompiledSwap>,
    sentence_boundary: Regex,
    line_comment: Regex,
    block_comment: Regex,
}

impl Rules {
    /// Compile a rule table.
    ///
    /// Lists that the transforms pick from must be non-empty; substitution
    /// lists may be empty.
    pub fn compile(table: RuleTable) -> Result<Self, RuleError> {
        for (name, list) in [
            ("casual_starters", &table.casual_starters),
            ("casual_connectors", &table.casual_connectors),
            ("casual_fillers", &table.casual_fillers),
            ("story_openers", &table.story_openers),
            ("story_transitions", &table.story_transitions),
            ("debug_statements", &table.debug_statements),
            ("review_comments", &table.review_comments),
        ] {
            if list.is_empty() {
                return Err(RuleError::EmptyTable { table: name });
            }
        }

        let phrases = table
            .ai_phrases
            .iter()
            .map(|phrase| compile("ai_phrases", &format!(r"(?i){}\s*", regex::escape(phrase))))
            .collect::<Result<Vec<_>, _>>()?;

        let contraction_pattern = if table.contractions.is_empty() {
            None
        } else {
            let alternation = table
                .contractions
                .iter()
                .map(|swap| regex::escape(&swap.from))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile("contractions", &format!(r"(?i)\b(?:{})\b", alternation))?)
        };
        let contractions = table
            .contractions
            .iter()
            .map(|swap| (swap.from.to_lowercase(), swap.to.clone()))
            .collect();

        Ok(Self {
            phrases,
            word_swaps: whole_words("word_swaps", &table.word_swaps, true)?,
            contraction_pattern,
            contractions,
            professional_swaps: whole_words("professional_swaps", &table.professional_swaps, true)?,
            academic_swaps: whole_words("academic_swaps", &table.academic_swaps, true)?,
            identifier_renames: whole_words("identifier_renames", &table.identifier_renames, false)?,
            sentence_boundary: compile("builtin", r"\. ([A-Z])")?,
            line_comment: compile("builtin", r"(?m)//.*$")?,
            block_comment: compile("builtin", r"(?s)/\*.*?\*/")?,
            table,
        })
    }

    /// The built-in rule set.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::compile(RuleTable::default())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Delete every AI-cliche phrase together with its trailing whitespace.
    pub fn strip_phrases(&self, text: &str) -> String {
        self.phrases.iter().fold(text.to_string(), |acc, re| {
            re.replace_all(&acc, "").into_owned()
        })
    }

    pub fn word_swaps(&self) -> &[CompiledSwap] {
        &self.word_swaps
    }

    pub fn professional_swaps(&self) -> &[CompiledSwap] {
        &self.professional_swaps
    }

    pub fn academic_swaps(&self) -> &[CompiledSwap] {
        &self.academic_swaps
    }

    pub fn identifier_renames(&self) -> &[CompiledSwap] {
        &self.identifier_renames
    }

    /// Contract negations ("is not" -> "isn't"). Deterministic.
    pub fn contract_negations(&self, text: &str) -> String {
        match &self.contraction_pattern {
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    let matched = &caps[0];
                    self.contractions
                        .get(&matched.to_lowercase())
                        .cloned()
                        .unwrap_or_else(|| matched.to_string())
                })
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Rewrite every `". X"` boundary (X upper-case) with `rewrite`, which
    /// receives the upper-case letter and returns the replacement, or `None`
    /// to keep the boundary as it is.
    pub fn rewrite_boundaries<F>(&self, text: &str, mut rewrite: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        self.sentence_boundary
            .replace_all(text, |caps: &Captures| {
                rewrite(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Remove `//` line comments, then `/* */` block comments.
    pub fn strip_comments(&self, code: &str) -> String {
        let without_lines = self.line_comment.replace_all(code, "");
        self.block_comment.replace_all(&without_lines, "").into_owned()
    }
}

/// Apply each swap whose roll falls below `threshold`. One roll per swap.
pub fn apply_swaps(
    text: &str,
    swaps: &[CompiledSwap],
    threshold: f64,
    rng: &mut dyn RandomSource,
) -> String {
    let mut out = text.to_string();
    for swap in swaps {
        if rng.roll() < threshold {
            out = swap.apply(&out);
        }
    }
    out
}

fn whole_words(
    table: &'static str,
    swaps: &[Swap],
    case_insensitive: bool,
) -> Result<Vec<CompiledSwap>, RuleError> {
    swaps
        .iter()
        .map(|swap| CompiledSwap::whole_word(table, swap, case_insensitive))
        .collect()
}

fn compile(table: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        table,
        pattern: pattern.to_string(),
        source,
    })
}
