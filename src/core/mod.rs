//! Math-notation normalization engine.
//!
//! This module implements the delimiter-normalization core: a span
//! scanner that locates candidate delimiter regions, a heuristic
//! classifier that separates formulas from ordinary bracketed text, and
//! rewriters that emit the canonical `$$...$$` / `$...$` forms. The
//! pipeline is a pure function over text - no I/O, no process state.

pub mod block;
pub mod classifier;
pub mod inline;
pub mod pipeline;
pub mod scanner;

pub use classifier::Verdict;
pub use pipeline::{normalize_math_delimiters, normalize_with_report};
pub use scanner::{Candidate, DelimiterKind};

use serde::Serialize;

// =============================================================================
// Normalization reporting
// =============================================================================

/// Per-pass rewrite counts for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// `\[...\]` regions converted to `$$` blocks
    pub latex_blocks: usize,
    /// `\( ... \)` regions converted to `$...$`
    pub latex_inlines: usize,
    /// multi-line own-line `[`/`]` blocks converted
    pub fenced_blocks: usize,
    /// single-line `[ ... ]` blocks converted
    pub single_line_blocks: usize,
    /// padded `( ... )` regions converted
    pub paren_inlines: usize,
    /// prose-embedded `[...]` regions converted
    pub bracket_inlines: usize,
}

impl NormalizeReport {
    /// Total regions rewritten across all passes.
    pub fn total(&self) -> usize {
        self.latex_blocks
            + self.latex_inlines
            + self.fenced_blocks
            + self.single_line_blocks
            + self.paren_inlines
            + self.bracket_inlines
    }
}

/// Result of a normalization run: the rewritten document plus the
/// per-pass report.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NormalizeOutcome {
    /// The normalized document text
    pub content: String,
    /// How many regions each pass rewrote
    pub report: NormalizeReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_total() {
        let report = NormalizeReport {
            latex_blocks: 2,
            paren_inlines: 3,
            ..NormalizeReport::default()
        };
        assert_eq!(report.total(), 5);
    }

    #[test]
    fn test_report_serializes() {
        let outcome = NormalizeOutcome::default();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("latex_blocks"));
    }
}
