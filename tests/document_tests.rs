//! Integration tests over complete documents

use mdocx::{metrics_source, normalize_math_delimiters, normalize_with_report};
use pretty_assertions::assert_eq;

const FOURIER_DOC: &str = "\
For a periodic function \\( f(t) \\) with period \\( T \\):
\\[
f(t) = a_0 + \\sum_{n=1}^{\\infty} \\left[ a_n \\cos(n\\omega_0 t) + b_n \\sin(n\\omega_0 t) \\right]
\\]

where \\( \\omega_0 = \\frac{2\\pi}{T} \\) is the fundamental frequency.

The coefficients are:
\\[
a_0 = \\frac{1}{T} \\int_{T} f(t)\\, dt
\\]";

#[test]
fn test_fourier_document() {
    let out = normalize_math_delimiters(FOURIER_DOC);

    assert!(out.contains("$f(t)$"));
    assert!(out.contains("$T$"));
    assert!(out.contains("$\\omega_0 = \\frac{2\\pi}{T}$"));
    assert_eq!(out.matches("$$").count(), 4);

    // sizing commands and function calls survive byte-identical
    assert!(out.contains("\\left[ a_n \\cos(n\\omega_0 t) + b_n \\sin(n\\omega_0 t) \\right]"));

    // no source notation remains
    assert!(!out.contains("\\["));
    assert!(!out.contains("\\]"));
    assert!(!out.contains("\\("));
    assert!(!out.contains("\\)"));
}

#[test]
fn test_fourier_document_exact_output() {
    let expected = "\
For a periodic function $f(t)$ with period $T$:

$$
f(t) = a_0 + \\sum_{n=1}^{\\infty} \\left[ a_n \\cos(n\\omega_0 t) + b_n \\sin(n\\omega_0 t) \\right]
$$

where $\\omega_0 = \\frac{2\\pi}{T}$ is the fundamental frequency.

The coefficients are:

$$
a_0 = \\frac{1}{T} \\int_{T} f(t)\\, dt
$$
";
    assert_eq!(normalize_math_delimiters(FOURIER_DOC), expected);
}

#[test]
fn test_fourier_document_idempotent() {
    let once = normalize_math_delimiters(FOURIER_DOC);
    let twice = normalize_math_delimiters(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_table_with_formulas() {
    let input = "\
Classification based on the discriminant ( B^2 - 4AC ):

| Type       | Condition         | Example            |
| ---------- | ----------------- | ------------------ |
| Elliptic   | ( B^2 - 4AC < 0 ) | Laplace's equation |
| Parabolic  | ( B^2 - 4AC = 0 ) | Heat equation      |
| Hyperbolic | ( B^2 - 4AC > 0 ) | Wave equation      |
";
    let expected = "\
Classification based on the discriminant $B^2 - 4AC$:

| Type       | Condition         | Example            |
| ---------- | ----------------- | ------------------ |
| Elliptic   | $B^2 - 4AC < 0$ | Laplace's equation |
| Parabolic  | $B^2 - 4AC = 0$ | Heat equation      |
| Hyperbolic | $B^2 - 4AC > 0$ | Wave equation      |
";
    let out = normalize_math_delimiters(input);
    assert_eq!(out, expected);
    assert_eq!(out.matches('$').count(), 8);
}

#[test]
fn test_report_for_mixed_document() {
    let input = "Given \\( x \\) and ( T ):\n\\[\na = b\n\\]\n[\nc_1 = d\n]\n[ e^2 ]\nand [\\mu] too";
    let outcome = normalize_with_report(input);

    assert_eq!(outcome.report.latex_blocks, 1);
    assert_eq!(outcome.report.latex_inlines, 1);
    assert_eq!(outcome.report.fenced_blocks, 1);
    assert_eq!(outcome.report.single_line_blocks, 1);
    assert_eq!(outcome.report.paren_inlines, 1);
    assert_eq!(outcome.report.bracket_inlines, 1);
    assert_eq!(outcome.report.total(), 6);
}

#[test]
fn test_metrics_before_and_after() {
    let before = metrics_source(FOURIER_DOC);
    assert!(before.has_residual_notation());
    assert_eq!(before.latex_block_delims, 4);
    assert_eq!(before.latex_inline_delims, 6);

    let after = metrics_source(&normalize_math_delimiters(FOURIER_DOC));
    assert!(!after.has_residual_notation());
    assert_eq!(after.block_formulas, 2);
    assert_eq!(after.inline_formulas, 3);
    // the \left[ / \right] pair is still there
    assert_eq!(after.bracket_commands, 2);
}

#[test]
fn test_unconverted_regions_do_not_count() {
    let outcome = normalize_with_report("a note ( kept as prose here ) and [12]");
    assert_eq!(outcome.report.total(), 0);
    assert_eq!(outcome.content, "a note ( kept as prose here ) and [12]");
}
