//! Block-form rewrites: display formulas onto dedicated `$$` lines.
//!
//! Three passes live here. The LaTeX pass rewrites unconditionally (the
//! `\[` token is itself the authorial signal), the two legacy passes
//! consult the block classifier before touching anything. Each pass
//! replaces a confirmed region with a blank line, `$$`, the trimmed
//! interior, `$$`, and a blank line; surplus blank lines are collapsed
//! once at the end of the pipeline.

use super::classifier::{classify_block, Verdict};
use super::scanner;

/// Rewrite every `\[...\]` region to a `$$` block. Interiors may span
/// lines. Returns the rewritten text and the number of regions
/// converted.
pub fn rewrite_latex_blocks(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut at = 0;
    while let Some(candidate) = scanner::find_latex_block(text, at) {
        out.push_str(&text[at..candidate.start]);
        push_block(&mut out, candidate.interior(text).trim());
        count += 1;
        at = candidate.end;
    }
    out.push_str(&text[at..]);
    (out, count)
}

/// Rewrite multi-line legacy blocks: an own-line `[` fence, interior
/// lines free of bare brackets, and an own-line `]` fence.
///
/// Interiors that fail the block classifier are left exactly as found,
/// fences included. An open fence with no valid close is not a
/// candidate at all.
pub fn rewrite_fenced_blocks(text: &str) -> (String, usize) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut count = 0;
    let mut i = 0;
    while i < lines.len() {
        if scanner::is_open_fence_line(lines[i]) {
            if let Some(close) = find_close_fence(&lines, i) {
                let interior = lines[i + 1..close].join("\n");
                let formula = interior.trim();
                if classify_block(formula) == Verdict::IsFormula {
                    push_block_lines(&mut out, formula);
                    count += 1;
                } else {
                    for line in &lines[i..=close] {
                        out.push((*line).to_string());
                    }
                }
                i = close + 1;
                continue;
            }
        }
        out.push(lines[i].to_string());
        i += 1;
    }
    (out.join("\n"), count)
}

/// Rewrite single-line legacy blocks: a line that is one `[ ... ]`
/// region and nothing else. Sizing commands may appear inside; the
/// interior must pass the block classifier or the line stays untouched.
pub fn rewrite_single_line_blocks(text: &str) -> (String, usize) {
    let mut out: Vec<String> = Vec::new();
    let mut count = 0;
    for line in text.split('\n') {
        if let Some(interior) = scanner::own_line_bracket_interior(line) {
            let formula = interior.trim();
            if classify_block(formula) == Verdict::IsFormula {
                push_block_lines(&mut out, formula);
                count += 1;
                continue;
            }
        }
        out.push(line.to_string());
    }
    (out.join("\n"), count)
}

/// Locate the close fence for an open fence at `open`, requiring at
/// least one interior line and no bare brackets before the close.
fn find_close_fence(lines: &[&str], open: usize) -> Option<usize> {
    for j in open + 1..lines.len() {
        if scanner::is_close_fence_line(lines[j]) {
            return if j > open + 1 { Some(j) } else { None };
        }
        if scanner::has_bare_bracket(lines[j]) {
            return None;
        }
    }
    None
}

fn push_block(out: &mut String, formula: &str) {
    out.push_str("\n$$\n");
    out.push_str(formula);
    out.push_str("\n$$\n");
}

fn push_block_lines(out: &mut Vec<String>, formula: &str) {
    out.push(String::new());
    out.push("$$".to_string());
    out.push(formula.to_string());
    out.push("$$".to_string());
    out.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_block_rewrite() {
        let (out, n) = rewrite_latex_blocks("\\[\nE = mc^2\n\\]");
        assert_eq!(n, 1);
        assert_eq!(out, "\n$$\nE = mc^2\n$$\n");
    }

    #[test]
    fn test_latex_block_mid_text() {
        let (out, n) = rewrite_latex_blocks("see \\[ x \\] here");
        assert_eq!(n, 1);
        assert_eq!(out, "see \n$$\nx\n$$\n here");
    }

    #[test]
    fn test_latex_block_preserves_sizing_commands() {
        let input = "\\[\n\\left[ a_n \\right]\n\\]";
        let (out, _) = rewrite_latex_blocks(input);
        assert!(out.contains("\\left[ a_n \\right]"));
        assert!(!out.contains("\\["));
    }

    #[test]
    fn test_fenced_block_with_formula() {
        let input = "[\na_0 = \\frac{1}{T} \\int_{T} f(t), dt\n]";
        let (out, n) = rewrite_fenced_blocks(input);
        assert_eq!(n, 1);
        assert_eq!(out, "\n$$\na_0 = \\frac{1}{T} \\int_{T} f(t), dt\n$$\n");
    }

    #[test]
    fn test_fenced_block_plain_text_kept() {
        let input = "[\njust a list of words\n]";
        let (out, n) = rewrite_fenced_blocks(input);
        assert_eq!(n, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_fence_without_close_left_verbatim() {
        let input = "[\na_0 = b\n";
        let (out, n) = rewrite_fenced_blocks(input);
        assert_eq!(n, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_adjacent_fences_are_not_a_block() {
        let input = "[\n]";
        let (out, n) = rewrite_fenced_blocks(input);
        assert_eq!(n, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_single_line_block() {
        let (out, n) = rewrite_single_line_blocks("[ E = mc^2 ]");
        assert_eq!(n, 1);
        assert_eq!(out, "\n$$\nE = mc^2\n$$\n");
    }

    #[test]
    fn test_single_line_block_without_signal_kept() {
        let input = "[ordinary bracketed text]";
        let (out, n) = rewrite_single_line_blocks(input);
        assert_eq!(n, 0);
        assert_eq!(out, input);
    }
}
