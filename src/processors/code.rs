// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Code humanization.
//!
//! Styles are independent mutations of the source string; none of them parses
//! the code. `minified` is the only style without randomness.

use std::sync::Arc;
use std::time::Instant;

use super::{CodeStyle, Intensity, TransformRequest};
use crate::observability::messages::{processor::ConversionCompleted, StructuredLog};
use crate::rules::{apply_swaps, Rules};
use crate::traits::{Processor, RandomSource};

/// Minified output is joined without separators above this intensity.
const DENSE_MINIFY_THRESHOLD: f64 = 0.7;
/// Identifier renames only run above this intensity.
const RENAME_THRESHOLD: f64 = 0.4;
const MIN_COMMENTED_LINE_CHARS: usize = 3;

pub fn humanize_code(
    code: &str,
    style: CodeStyle,
    intensity: Intensity,
    rules: &Rules,
    rng: &mut dyn RandomSource,
) -> String {
    if code.is_empty() {
        return String::new();
    }
    let lvl = intensity.get();

    match style {
        CodeStyle::Debug => inject_debug(code, lvl, rules, rng),
        CodeStyle::Commented => inject_comments(code, lvl, rules, rng),
        CodeStyle::Minified => minify(code, lvl, rules),
        CodeStyle::Standard => standard(code, lvl, rules, rng),
    }
}

fn inject_debug(code: &str, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let statements = &rules.table().debug_statements;
    let mut out = String::with_capacity(code.len());
    for c in code.chars() {
        out.push(c);
        if c == '{' && rng.roll() < lvl {
            out.push_str("\n  ");
            out.push_str(rng.choose(statements));
            out.push(';');
        }
    }
    out
}

fn inject_comments(code: &str, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let comments = &rules.table().review_comments;
    code.split('\n')
        .map(|line| {
            if rng.roll() < lvl * 0.75 && line.trim().chars().count() > MIN_COMMENTED_LINE_CHARS {
                format!("{}  {}", line, rng.choose(comments))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn minify(code: &str, lvl: f64, rules: &Rules) -> String {
    let separator = if lvl > DENSE_MINIFY_THRESHOLD { "" } else { " " };
    rules
        .strip_comments(code)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn standard(code: &str, lvl: f64, rules: &Rules, rng: &mut dyn RandomSource) -> String {
    let table = rules.table();
    let mut code = downgrade_declarations(code, &table.declaration_swap.from, &table.declaration_swap.to, lvl * 0.5, rng);

    if lvl > RENAME_THRESHOLD {
        code = apply_swaps(&code, rules.identifier_renames(), lvl * 0.4, rng);
    }

    if rng.roll() < lvl {
        code = format!("{}\n{}", table.todo_comment, code);
    }
    code
}

/// Replace each occurrence of `from` with `to` when its own roll passes.
fn downgrade_declarations(
    code: &str,
    from: &str,
    to: &str,
    threshold: f64,
    rng: &mut dyn RandomSource,
) -> String {
    if from.is_empty() {
        return code.to_string();
    }

    let mut out = String::with_capacity(code.len());
    let mut last = 0;
    for (start, matched) in code.match_indices(from) {
        out.push_str(&code[last..start]);
        out.push_str(if rng.roll() < threshold { to } else { matched });
        last = start + matched.len();
    }
    out.push_str(&code[last..]);
    out
}

/// Code-mode processor bound to one style.
pub struct CodeProcessor {
    style: CodeStyle,
    rules: Arc<Rules>,
}

impl CodeProcessor {
    pub fn new(style: CodeStyle, rules: Arc<Rules>) -> Self {
        Self { style, rules }
    }
}

impl Processor for CodeProcessor {
    fn process(&self, req: &TransformRequest, rng: &mut dyn RandomSource) -> String {
        let start = Instant::now();
        let output = humanize_code(&req.payload, self.style, req.intensity, &self.rules, rng);

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
        match self.style {
            CodeStyle::Standard => "code_standard",
            CodeStyle::Debug => "code_debug",
            CodeStyle::Commented => "code_commented",
            CodeStyle::Minified => "code_minified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ScriptedRandom, ThreadRandom};

    fn run(code: &str, style: CodeStyle, intensity: f64, rng: &mut dyn RandomSource) -> String {
        humanize_code(code, style, Intensity::new(intensity), &Rules::builtin().unwrap(), rng)
    }

    #[test]
    fn test_empty_code_for_every_style() {
        for style in [CodeStyle::Standard, CodeStyle::Debug, CodeStyle::Commented, CodeStyle::Minified] {
            assert_eq!(run("", style, 1.0, &mut ThreadRandom), "");
        }
    }

    #[test]
    fn test_debug_inserts_after_brace() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("function f() {}", CodeStyle::Debug, 1.0, &mut rng);
        assert_eq!(out, "function f() {\n  console.log(\"DEBUG:\",{data});}");
    }

    #[test]
    fn test_debug_does_not_roll_on_inserted_braces() {
        // The inserted statement contains '{' but only source braces roll.
        let mut rng = ScriptedRandom::constant(0.0);
        run("a { b { c", CodeStyle::Debug, 1.0, &mut rng);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_debug_at_zero_is_identity() {
        let code = "if (x) { y(); }";
        assert_eq!(run(code, CodeStyle::Debug, 0.0, &mut ThreadRandom), code);
    }

    #[test]
    fn test_commented_skips_short_lines() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("let a = 1;\n}\n", CodeStyle::Commented, 1.0, &mut rng);
        assert_eq!(out, "let a = 1;  // TODO: needs review\n}\n");
    }

    #[test]
    fn test_minified_joins_by_intensity() {
        let code = "// header\nconst a = 1; /* note */\n\n  return a;\n";
        assert_eq!(run(code, CodeStyle::Minified, 0.5, &mut ThreadRandom), "const a = 1; return a;");
        assert_eq!(run(code, CodeStyle::Minified, 0.9, &mut ThreadRandom), "const a = 1;return a;");
    }

    #[test]
    fn test_minified_is_idempotent() {
        let code = "function add(a, b) {\n  return a + b;\n}\n\nconst total = add(1, 2);";
        for intensity in [0.3, 0.9] {
            let once = run(code, CodeStyle::Minified, intensity, &mut ThreadRandom);
            let twice = run(&once, CodeStyle::Minified, intensity, &mut ThreadRandom);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_standard_full_intensity() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("const result = compute(value);", CodeStyle::Standard, 1.0, &mut rng);
        assert_eq!(out, "// TODO: clean this up\nlet res = compute(val);");
    }

    #[test]
    fn test_standard_renames_are_case_sensitive() {
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("Result result", CodeStyle::Standard, 1.0, &mut rng);
        assert_eq!(out, "// TODO: clean this up\nResult res");
    }

    #[test]
    fn test_standard_below_rename_threshold_keeps_names() {
        // 0.4 is not above the rename threshold; rolls of 0.0 still pass the
        // declaration (0.0 < 0.2) and TODO (0.0 < 0.4) checks.
        let mut rng = ScriptedRandom::constant(0.0);
        let out = run("const value = 1;", CodeStyle::Standard, 0.4, &mut rng);
        assert_eq!(out, "// TODO: clean this up\nlet value = 1;");
    }

    #[test]
    fn test_standard_at_zero_is_identity() {
        let code = "const result = index + 1;";
        assert_eq!(run(code, CodeStyle::Standard, 0.0, &mut ThreadRandom), code);
    }

    #[test]
    fn test_each_declaration_rolls_independently() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9], 0.99);
        let out = downgrade_declarations("const a; const b;", "const ", "let ", 0.5, &mut rng);
        assert_eq!(out, "let a; const b;");
    }
}
