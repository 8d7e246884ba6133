//! Document analysis utilities: delimiter metrics.
//!
//! Counts are plain substring/line tallies, good enough to answer "did
//! normalization leave anything behind" in the CLI check mode and in
//! tests.

use serde::Serialize;

/// Delimiter counts for one document.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct MathMetrics {
    /// canonical `$$...$$` blocks
    pub block_formulas: usize,
    /// canonical `$...$` inline formulas
    pub inline_formulas: usize,
    /// residual `\[` / `\]` tokens
    pub latex_block_delims: usize,
    /// residual `\(` / `\)` tokens
    pub latex_inline_delims: usize,
    /// residual own-line `[` or `]` fence lines
    pub fence_lines: usize,
    /// literal `\left`/`\right` bracket commands
    pub bracket_commands: usize,
}

impl MathMetrics {
    /// True when the document still carries any non-canonical math
    /// delimiters.
    pub fn has_residual_notation(&self) -> bool {
        self.latex_block_delims + self.latex_inline_delims + self.fence_lines > 0
    }
}

/// Compute [`MathMetrics`] for a document.
pub fn metrics_source(source: &str) -> MathMetrics {
    let mut metrics = MathMetrics::default();

    let double_markers = source.matches("$$").count();
    let total_dollars = source.matches('$').count();
    metrics.block_formulas = double_markers / 2;
    metrics.inline_formulas = total_dollars.saturating_sub(2 * double_markers) / 2;

    metrics.latex_block_delims = count_any(source, &["\\[", "\\]"]);
    metrics.latex_inline_delims = count_any(source, &["\\(", "\\)"]);
    metrics.fence_lines = source
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed == "[" || trimmed == "]"
        })
        .count();
    metrics.bracket_commands = count_any(
        source,
        &["\\left[", "\\right[", "\\left]", "\\right]", "\\left(", "\\right)"],
    );

    metrics
}

fn count_any(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().map(|n| haystack.matches(n).count()).sum()
}
