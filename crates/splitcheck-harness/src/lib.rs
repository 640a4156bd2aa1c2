//! Conformance testing harness for the platform split/decompose function.
//!
//! This crate provides:
//! - Case table: precomputed reference decompositions with per-field variances
//! - Tolerance policy: variance selection scaled to the expected magnitude
//! - Validation: tolerance-aware comparison plus the NaN-propagation check
//! - Parity: differential host-vs-native comparison, bit-exact
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod cases;
pub mod error;
pub mod parity;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod tolerance;
pub mod validate;
pub mod verify;

pub use cases::{SplitCase, case_table};
pub use error::HarnessError;
pub use report::ConformanceReport;
pub use runner::{Backend, SuiteRunner};
pub use validate::CaseVerdict;
pub use verify::VerificationSummary;
