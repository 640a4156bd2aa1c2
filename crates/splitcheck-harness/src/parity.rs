//! Differential host-vs-native comparison.
//!
//! The tolerance comparator cannot distinguish `0.0` from `-0.0`, so sign
//! handling is checked here instead: every table input (and its negation,
//! and NaN) is decomposed by both backends and compared bit for bit.

use serde::{Deserialize, Serialize};
use splitcheck_core::SplitParts;

use crate::cases::SplitCase;
use crate::runner::Backend;

/// One host-vs-native comparison row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParityRow {
    /// Input label.
    pub name: String,
    /// Input value, rendered.
    pub value: String,
    /// Host decomposition, rendered.
    pub host: String,
    /// Native decomposition, rendered.
    pub native: String,
    /// Whether both decompositions are bit-identical (NaNs of any payload
    /// count as equal).
    pub matched: bool,
}

fn render(parts: SplitParts) -> String {
    format!("({:?}, {:?})", parts.fraction, parts.integral)
}

fn bits_match(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn row(name: String, value: f64) -> ParityRow {
    let host = Backend::Host.split(value);
    let native = Backend::Native.split(value);
    let matched =
        bits_match(host.fraction, native.fraction) && bits_match(host.integral, native.integral);
    ParityRow {
        name,
        value: format!("{value:?}"),
        host: render(host),
        native: render(native),
        matched,
    }
}

/// Compare both backends across the table inputs, their negations, and NaN.
#[must_use]
pub fn parity_rows(cases: &[SplitCase]) -> Vec<ParityRow> {
    let mut rows = Vec::with_capacity(cases.len() * 2 + 1);
    for case in cases {
        rows.push(row(case.name.to_string(), case.value));
        rows.push(row(format!("{} (negated)", case.name), -case.value));
    }
    rows.push(row(String::from("nan"), f64::NAN));
    rows
}
