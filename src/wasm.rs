//! WASM bindings for mdocx
//!
//! This module provides JavaScript-accessible functions for math
//! delimiter normalization. The pandoc bridge is not exposed - a WASM
//! host has no child processes.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::{normalize_math_delimiters, normalize_with_report, NormalizeReport};

/// Normalization result with additional metadata
#[derive(Serialize)]
pub struct NormalizeResult {
    /// The normalized document text
    pub content: String,
    /// Per-pass rewrite counts
    pub report: NormalizeReport,
    /// Total regions rewritten
    pub total: usize,
}

/// Safely serialize a value to JsValue, returning null on failure.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Initialize panic messages for the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Normalize math delimiters, returning only the rewritten text.
#[wasm_bindgen]
pub fn normalize(input: &str) -> String {
    normalize_math_delimiters(input)
}

/// Normalize math delimiters, returning `{ content, report, total }`.
#[wasm_bindgen]
pub fn normalize_report(input: &str) -> JsValue {
    let outcome = normalize_with_report(input);
    let total = outcome.report.total();
    to_js_value(&NormalizeResult {
        content: outcome.content,
        report: outcome.report,
        total,
    })
}
