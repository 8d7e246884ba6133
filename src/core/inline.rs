//! Inline rewrites: `$...$` in place within a line.
//!
//! The LaTeX pass runs over the whole document (its delimiters cannot
//! collide with anything else); the two legacy passes run per line,
//! behind [`line_guard`]. Candidates the classifier rejects are written
//! back verbatim, original spacing and delimiters included.

use super::classifier::{classify_inline_bracket, classify_inline_paren, Verdict};
use super::scanner;

/// Rewrite every padded `\( ... \)` region to `$...$`. No
/// classification - the delimiter itself is the signal.
pub fn rewrite_latex_inline(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut at = 0;
    while let Some(candidate) = scanner::find_latex_inline(text, at) {
        out.push_str(&text[at..candidate.start]);
        out.push('$');
        out.push_str(candidate.interior(text).trim());
        out.push('$');
        count += 1;
        at = candidate.end;
    }
    out.push_str(&text[at..]);
    (out, count)
}

/// Whole-line skip predicate for the per-line passes.
///
/// A line is skipped when it is blank, already canonical (`$$` after
/// trimming), or carries a literal `\left[` / `\right]` token. The skip
/// is deliberately coarse: a line holding both a sizing command and an
/// unrelated legitimate candidate loses the latter too.
pub fn line_guard(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with("$$")
        || line.contains("\\left[")
        || line.contains("\\right]")
}

/// Rewrite padded `( ... )` regions in one line, per the full inline
/// classifier rule.
pub fn rewrite_paren_inline(line: &str) -> (String, usize) {
    let mut out = String::with_capacity(line.len());
    let mut count = 0;
    let mut at = 0;
    while let Some(candidate) = scanner::find_paren_inline(line, at) {
        out.push_str(&line[at..candidate.start]);
        let formula = candidate.interior(line).trim();
        match classify_inline_paren(formula) {
            Verdict::IsFormula => {
                out.push('$');
                out.push_str(formula);
                out.push('$');
                count += 1;
            }
            Verdict::NotFormula => out.push_str(candidate.matched(line)),
        }
        at = candidate.end;
    }
    out.push_str(&line[at..]);
    (out, count)
}

/// Rewrite prose-embedded `[...]` regions in one line, per the bracket
/// classifier rule.
pub fn rewrite_bracket_inline(line: &str) -> (String, usize) {
    let mut out = String::with_capacity(line.len());
    let mut count = 0;
    let mut at = 0;
    while let Some(candidate) = scanner::find_bracket_inline(line, at) {
        out.push_str(&line[at..candidate.start]);
        let formula = candidate.interior(line).trim();
        match classify_inline_bracket(formula) {
            Verdict::IsFormula => {
                out.push('$');
                out.push_str(formula);
                out.push('$');
                count += 1;
            }
            Verdict::NotFormula => out.push_str(candidate.matched(line)),
        }
        at = candidate.end;
    }
    out.push_str(&line[at..]);
    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_inline_rewrite() {
        let (out, n) = rewrite_latex_inline("period \\( T \\) of the wave");
        assert_eq!(n, 1);
        assert_eq!(out, "period $T$ of the wave");
    }

    #[test]
    fn test_latex_inline_unpadded_left_alone() {
        let (out, n) = rewrite_latex_inline("\\(x\\)");
        assert_eq!(n, 0);
        assert_eq!(out, "\\(x\\)");
    }

    #[test]
    fn test_guard_skips_canonical_and_sizing_lines() {
        assert!(line_guard(""));
        assert!(line_guard("   "));
        assert!(line_guard("$$"));
        assert!(line_guard("  $$ trailing"));
        assert!(line_guard("sum \\left[ a \\right] done"));
        assert!(!line_guard("plain prose ( x )"));
    }

    #[test]
    fn test_paren_short_variable() {
        let (out, n) = rewrite_paren_inline("with period ( T ):");
        assert_eq!(n, 1);
        assert_eq!(out, "with period $T$:");
    }

    #[test]
    fn test_paren_prose_kept_verbatim() {
        let line = "a note ( written in parentheses ) for clarity";
        let (out, n) = rewrite_paren_inline(line);
        assert_eq!(n, 0);
        assert_eq!(out, line);
    }

    #[test]
    fn test_paren_mixed_on_one_line() {
        let line = "the variable ( x ) in ( a longer note about x ).";
        let (out, _) = rewrite_paren_inline(line);
        assert_eq!(out, "the variable $x$ in ( a longer note about x ).");
    }

    #[test]
    fn test_bare_calls_untouched() {
        let line = "cos(x) and sin(theta) are functions";
        let (out, n) = rewrite_paren_inline(line);
        assert_eq!(n, 0);
        assert_eq!(out, line);
    }

    #[test]
    fn test_bracket_with_latex_command() {
        let (out, n) = rewrite_bracket_inline("the value [\\alpha] here");
        assert_eq!(n, 1);
        assert_eq!(out, "the value $\\alpha$ here");
    }

    #[test]
    fn test_bracket_citation_untouched() {
        let line = "as shown in [12] and [34]";
        let (out, n) = rewrite_bracket_inline(line);
        assert_eq!(n, 0);
        assert_eq!(out, line);
    }

    #[test]
    fn test_bracket_after_right_command_untouched() {
        // `\right[` does not trip the whole-line guard, so the scanner
        // itself has to refuse the bracket
        let line = "size with \\right[ x ]";
        let (out, n) = rewrite_bracket_inline(line);
        assert_eq!(n, 0);
        assert_eq!(out, line);
    }
}
