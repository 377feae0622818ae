// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text humanization.
//!
//! The pipeline runs in a fixed order, each phase working on the previous
//! phase's output:
//!
//! 1. phrase stripping (always)
//! 2. formal-to-informal word swaps (one roll per swap)
//! 3. splitting of sentences over 160 characters (one roll per long sentence)
//! 4. the tone rewrite
//! 5. trim
//!
//! Every roll is taken in reading order, which keeps scripted tests stable.

use std::sync::Arc;
use std::time::Instant;

use super::{Intensity, Tone, TransformRequest};
use crate::observability::messages::{processor::ConversionCompleted, StructuredLog};
use crate::rules::{apply_swaps, Rules};
use crate::traits::{Processor, RandomSource};

const LONG_SENTENCE_CHARS: usize = 160;
const SPLIT_SEARCH_FROM: usize = 40;

pub fn humanize_text(
    text: &str,
    tone: Tone,
    intensity: Intensity,
    rules: &Rules,
    rng: &mut dyn RandomSource,
) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let lvl = intensity.get();

    let text = rules.strip_phrases(text);
    let text = apply_swaps(&text, rules.word_swaps(), lvl, rng);
    let text = split_long_sentences(&text, lvl, rng);
    let text = match tone {
        Tone::Casual => casual(text, lvl, rules, rng),
        Tone::Professional => apply_swaps(&text, rules.professional_swaps(), lvl, rng),
        Tone::Story => story(text, lvl, rules, rng),
        Tone::Academic => academic(text, lvl, rules, rng),
    };

    text.trim().to_string()
}

fn casual(text: String, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let table = rules.table();
    let mut text = rules.contract_negations(&text);

    if rng.roll() < lvl * 1.3 {
        let starter = rng.choose(&table.casual_starters);
        text = format!("{}{}", starter, lowercase_first(&text));
    }

    text = rules.rewrite_boundaries(&text, |upper| {
        if rng.roll() > 1.0 - lvl * 0.8 {
            let connector = rng.choose(&table.casual_connectors);
            Some(format!(". {} {}", connector, upper.to_lowercase()))
        } else {
            None
        }
    });

    if lvl > 0.6 {
        text = text
            .split(". ")
            .enumerate()
            .map(|(i, sentence)| {
                if i > 0 && rng.roll() > 0.7 {
                    format!("{}{}", sentence, rng.choose(&table.casual_fillers))
                } else {
                    sentence.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(". ");
    }

    text
}

fn story(text: String, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let table = rules.table();
    let opener = rng.choose(&table.story_openers);
    let text = format!("{}{}", opener, lowercase_first(&text));

    rules.rewrite_boundaries(&text, |upper| {
        if rng.roll() < lvl * 0.7 {
            let transition = rng.choose(&table.story_transitions);
            Some(format!(". {} {}", transition, upper.to_lowercase()))
        } else {
            None
        }
    })
}

fn academic(text: String, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let text = apply_swaps(&text, rules.academic_swaps(), lvl, rng);
    if rng.roll() >= lvl {
        return text;
    }

    let connector = &rules.table().academic_connector;
    rules.rewrite_boundaries(&text, |upper| {
        (rng.roll() > 0.6).then(|| format!(". {} {}", connector, upper.to_lowercase()))
    })
}

/// Break sentences longer than [`LONG_SENTENCE_CHARS`] at their first `", "`
/// past character [`SPLIT_SEARCH_FROM`]. Sentences are re-joined with one space.
fn split_long_sentences(text: &str, lvl: f64, rng: &mut dyn RandomSource) -> String {
    sentences(text)
        .into_iter()
        .map(|sentence| {
            if sentence.chars().count() > LONG_SENTENCE_CHARS && rng.roll() < lvl {
                split_at_comma(sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split after every `.` that is followed by whitespace, dropping the whitespace.
fn sentences(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut after_dot = false;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if after_dot && c.is_whitespace() {
            parts.push(&text[start..i]);
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
            start = end;
            after_dot = false;
            continue;
        }
        after_dot = c == '.';
    }

    parts.push(&text[start..]);
    parts
}

fn split_at_comma(sentence: &str) -> String {
    let from = sentence
        .char_indices()
        .nth(SPLIT_SEARCH_FROM)
        .map(|(i, _)| i)
        .unwrap_or(sentence.len());

    let Some(offset) = sentence[from..].find(", ") else {
        return sentence.to_string();
    };
    let mid = from + offset;
    let mut rest = sentence[mid + 2..].chars();
    match rest.next() {
        Some(first) => format!(
            "{}. {}{}",
            &sentence[..mid],
            first.to_uppercase(),
            rest.as_str()
        ),
        None => format!("{}. ", &sentence[..mid]),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Text-mode processor bound to one tone.
pub struct TextProcessor {
    tone: Tone,
    rules: Arc<Rules>,
}

impl TextProcessor {
    pub fn new(tone: Tone, rules: Arc<Rules>) -> Self {
        Self { tone, rules }
    }
}

impl Processor for TextProcessor {
    fn process(&self, req: &TransformRequest, rng: &mut dyn RandomSource) -> String {
        let start = Instant::now();
        let output = humanize_text(&req.payload, self.tone, req.intensity, &self.rules, rng);

        ConversionCompleted {
            processor: self.name(),
            input_size: req.payload.chars().count(),
            output_size: output.chars().count(),
            duration: start.elapsed(),
        }
        .log();

        output
    }

    fn name(&self) -> &'static str {
        match self.tone {
            Tone::Casual => "text_casual",
            Tone::Professional => "text_professional",
            Tone::Story => "text_story",
            Tone::Academic => "text_academic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ScriptedRandom, ThreadRandom};

    fn rules() -> Rules {
        Rules::builtin().unwrap()
    }

    fn run(text: &str, tone: Tone, intensity: f64, rng: &mut dyn RandomSource) -> String {
        humanize_text(text, tone, Intensity::new(intensity), &rules(), rng)
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        for tone in [Tone::Casual, Tone::Professional, Tone::Story, Tone::Academic] {
            let mut rng = ScriptedRandom::constant(0.0);
            assert_eq!(run("", tone, 1.0, &mut rng), "");
            assert_eq!(run("   \n", tone, 1.0, &mut rng), "");
            assert_eq!(rng.consumed(), 0);
        }
    }

    #[test]
    fn test_phrase_stripping_ignores_intensity() {
        for intensity in [0.0, 0.5, 1.0] {
            let out = run("In conclusion, it works.", Tone::Casual, intensity, &mut ThreadRandom);
            assert!(!out.contains("In conclusion,"), "intensity {}: {}", intensity, out);
        }
    }

    #[test]
    fn test_zero_intensity_only_strips_phrases() {
        let out = run("Furthermore, this is good.", Tone::Professional, 0.0, &mut ThreadRandom);
        assert_eq!(out, "this is good.");
    }

    #[test]
    fn test_casual_contracts_negations() {
        let out = run("This is not good.", Tone::Casual, 1.0, &mut ThreadRandom);
        assert!(out.contains("isn't"), "{}", out);
        assert!(!out.contains("is not"), "{}", out);
    }

    #[test]
    fn test_text_without_punctuation_survives_every_tone() {
        for tone in [Tone::Casual, Tone::Professional, Tone::Story, Tone::Academic] {
            let out = run("no punctuation at all here", tone, 1.0, &mut ThreadRandom);
            assert!(out.contains("punctuation"));
        }
    }

    #[test]
    fn test_casual_connector_with_scripted_rolls() {
        // 0.99 fails every swap and the starter roll (0.99 >= 0.65) but beats
        // the connector threshold (1 - 0.4); pick index 2 is "Also".
        let mut rng = ScriptedRandom::constant(0.99);
        let out = run("We cannot stop. It is not over.", Tone::Casual, 0.5, &mut rng);
        assert_eq!(out, "We can't stop. Also it isn't over.");
    }

    #[test]
    fn test_casual_starter_lowercases_first_letter() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("Ship it.", Tone::Casual, 0.5, &mut rng);
        assert_eq!(out, "Basically, ship it.");
    }

    #[test]
    fn test_casual_fillers_above_threshold() {
        let table = rules();
        // Phase 2 rolls fail, starter roll fails, connector rolls fail, then
        // both filler rolls pass and pick index 0 (" honestly").
        let mut script = vec![0.99; table.word_swaps().len()];
        script.push(0.99); // starter: 0.99 >= 0.91
        script.push(0.0); // boundary ". T": 0.0 > 0.44 is false
        script.push(0.0); // boundary ". A": false
        script.extend([0.8, 0.0, 0.8, 0.0]);
        let mut rng = ScriptedRandom::new(script, 0.0);
        let out = humanize_text(
            "One. Two. And three.",
            Tone::Casual,
            Intensity::new(0.7),
            &table,
            &mut rng,
        );
        assert_eq!(out, "One. Two honestly. And three. honestly");
    }

    #[test]
    fn test_professional_swaps_at_full_intensity() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("This is very good stuff.", Tone::Professional, 1.0, &mut rng);
        assert_eq!(out, "This is quite strong material.");
    }

    #[test]
    fn test_story_opener_and_transition() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("The server started. It crashed.", Tone::Story, 1.0, &mut rng);
        assert_eq!(out, "Picture this — the server started. Then it crashed.");
    }

    #[test]
    fn test_story_always_prepends_opener() {
        let out = run("Hello there.", Tone::Story, 0.0, &mut ThreadRandom);
        let table = rules();
        assert!(table
            .table()
            .story_openers
            .iter()
            .any(|opener| out.starts_with(opener.trim_end())));
    }

    #[test]
    fn test_academic_swaps_and_connector() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("We show the part. We check it.", Tone::Academic, 1.0, &mut rng);
        // the boundary roll (0.0) never beats 0.6, so no connector
        assert_eq!(out, "We illustrate the component. We evaluate it.");

        let mut rng = ScriptedRandom::constant(0.7);
        let out = run("Fine. Done.", Tone::Academic, 1.0, &mut rng);
        assert_eq!(out, "Fine. As such, done.");
    }

    #[test]
    fn test_long_sentence_split_at_comma() {
        let long = format!("{}, {}.", "x".repeat(50), "y".repeat(120));
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run(&long, Tone::Professional, 1.0, &mut rng);
        assert_eq!(out, format!("{}. Y{}.", "x".repeat(50), "y".repeat(119)));
    }

    #[test]
    fn test_long_sentence_without_late_comma_is_kept() {
        let long = format!("{}, {}.", "x".repeat(10), "y".repeat(170));
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run(&long, Tone::Professional, 1.0, &mut rng);
        assert_eq!(out, long);
    }

    #[test]
    fn test_sentences_split_on_dot_whitespace() {
        assert_eq!(sentences("A. B.  C"), vec!["A.", "B.", "C"]);
        assert_eq!(sentences("v1.2 ok"), vec!["v1.2 ok"]);
        assert_eq!(sentences(""), vec![""]);
    }

    #[test]
    fn test_processor_name_and_output() {
        let processor = TextProcessor::new(Tone::Casual, Arc::new(rules()));
        let req = TransformRequest::new("It is not done.", crate::processors::Mode::Text, "casual", 0.0);
        let out = processor.process(&req, &mut ScriptedRandom::constant(0.5));
        assert_eq!(processor.name(), "text_casual");
        assert_eq!(out, "It isn't done.");
    }
}
