//! The fixed-order rewrite pipeline.
//!
//! Pass order matters and is frozen: LaTeX-style delimiters resolve
//! before legacy-style ones, so legacy patterns can never misfire on
//! content still carrying backslash-prefixed brackets. Each pass
//! consumes the full output of the previous pass; nothing is retried
//! and nothing backtracks.

use lazy_static::lazy_static;
use regex::Regex;

use super::block::{rewrite_fenced_blocks, rewrite_latex_blocks, rewrite_single_line_blocks};
use super::inline::{line_guard, rewrite_bracket_inline, rewrite_latex_inline, rewrite_paren_inline};
use super::{NormalizeOutcome, NormalizeReport};

lazy_static! {
    /// Runs of three or more newlines collapse to one blank line.
    static ref BLANK_RUNS: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Normalize every formula notation in `input` to the canonical `$$`
/// / `$` delimiters.
///
/// Total over all inputs: anything the passes cannot confidently match
/// passes through unchanged, and empty input returns empty output.
pub fn normalize_math_delimiters(input: &str) -> String {
    normalize_with_report(input).content
}

/// Like [`normalize_math_delimiters`], additionally reporting how many
/// regions each pass rewrote.
pub fn normalize_with_report(input: &str) -> NormalizeOutcome {
    if input.is_empty() {
        return NormalizeOutcome::default();
    }

    let mut report = NormalizeReport::default();

    let (text, n) = rewrite_latex_blocks(input);
    report.latex_blocks = n;
    let (text, n) = rewrite_latex_inline(&text);
    report.latex_inlines = n;
    let (text, n) = rewrite_fenced_blocks(&text);
    report.fenced_blocks = n;
    let (text, n) = rewrite_single_line_blocks(&text);
    report.single_line_blocks = n;

    let mut lines: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line_guard(line) {
            lines.push(line.to_string());
            continue;
        }
        let (line, n) = rewrite_paren_inline(line);
        report.paren_inlines += n;
        let (line, n) = rewrite_bracket_inline(&line);
        report.bracket_inlines += n;
        lines.push(line);
    }

    let joined = lines.join("\n");
    let content = BLANK_RUNS.replace_all(&joined, "\n\n").into_owned();

    NormalizeOutcome { content, report }
}
