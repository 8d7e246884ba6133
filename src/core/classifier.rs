//! Heuristic math/non-math classification.
//!
//! There is no grammar that separates "math" from "prose in parentheses"
//! at the lexical level, so the classifier works off a fixed set of
//! empirical signals. The rules and their constants are load-bearing:
//! changing any of them silently changes conversion outcomes on real
//! documents, so they are kept exactly as observed, odd corners
//! included.

/// Classification result for a candidate interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    IsFormula,
    NotFormula,
}

/// Interiors this short (in chars, post-trim) are assumed to be single
/// variables like `T`, `x`, `f(t)`. Exactly six characters still counts.
pub const SHORT_FORMULA_MAX_CHARS: usize = 6;

/// Relational operators whose presence marks an interior as math.
const RELATIONAL_OPERATORS: [char; 6] = ['=', '<', '>', '≤', '≥', '≠'];

/// Symbols that, combined with `^`, mark patterns like `B^2 - 4AC`.
const ARITHMETIC_SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

/// Classify the trimmed interior of a padded `( ... )` candidate.
///
/// Any one signal is sufficient; the conditions are independent:
/// 1. a backslash (LaTeX command),
/// 2. explicit super/subscript grouping `^{` or `_{`,
/// 3. a relational operator,
/// 4. `^` together with an uppercase ASCII letter or arithmetic symbol,
/// 5. at most [`SHORT_FORMULA_MAX_CHARS`] characters.
pub fn classify_inline_paren(interior: &str) -> Verdict {
    if interior.contains('\\') {
        return Verdict::IsFormula;
    }
    if interior.contains("^{") || interior.contains("_{") {
        return Verdict::IsFormula;
    }
    if RELATIONAL_OPERATORS.iter().any(|op| interior.contains(*op)) {
        return Verdict::IsFormula;
    }
    if interior.contains('^')
        && interior
            .chars()
            .any(|c| c.is_ascii_uppercase() || ARITHMETIC_SYMBOLS.contains(&c))
    {
        return Verdict::IsFormula;
    }
    if interior.chars().count() <= SHORT_FORMULA_MAX_CHARS {
        return Verdict::IsFormula;
    }
    Verdict::NotFormula
}

/// Classify the trimmed interior of a block candidate.
///
/// Coarser than the inline rule: a backslash, `_`, or `^` anywhere
/// qualifies; a bracketed line without any of these is ordinary text.
pub fn classify_block(interior: &str) -> Verdict {
    if interior.contains('\\') || interior.contains('_') || interior.contains('^') {
        Verdict::IsFormula
    } else {
        Verdict::NotFormula
    }
}

/// Classify the trimmed interior of a prose-embedded `[...]` candidate.
///
/// Stricter than the paren rule: a backslash, or `_` plus `{`, or `^`
/// plus `{`. Bare citations like `[12]` and editorial remarks like
/// `[sic]` carry none of these.
pub fn classify_inline_bracket(interior: &str) -> Verdict {
    if interior.contains('\\')
        || (interior.contains('_') && interior.contains('{'))
        || (interior.contains('^') && interior.contains('{'))
    {
        Verdict::IsFormula
    } else {
        Verdict::NotFormula
    }
}
