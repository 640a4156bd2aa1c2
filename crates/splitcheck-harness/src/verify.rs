//! Verdict aggregation.

use serde::{Deserialize, Serialize};

use crate::validate::CaseVerdict;

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total comparisons run.
    pub total: usize,
    /// Comparisons passed.
    pub passed: usize,
    /// Comparisons failed.
    pub failed: usize,
    /// Individual verdicts, in execution order.
    pub results: Vec<CaseVerdict>,
}

impl VerificationSummary {
    /// Build a summary from a list of verdicts.
    #[must_use]
    pub fn from_results(results: Vec<CaseVerdict>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if every comparison passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterate over failing verdicts only.
    pub fn failures(&self) -> impl Iterator<Item = &CaseVerdict> {
        self.results.iter().filter(|r| !r.passed)
    }
}
