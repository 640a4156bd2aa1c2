//! Tolerance-aware comparison of split results.

use serde::{Deserialize, Serialize};

use crate::runner::Backend;

/// Verdict for a single comparison, with diagnostic payload on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseVerdict {
    /// Name of the comparison (table entry plus orientation).
    pub case_name: String,
    /// Whether the comparison passed.
    pub passed: bool,
    /// Formatted diagnostic when the comparison failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl CaseVerdict {
    fn pass(case_name: &str) -> Self {
        Self {
            case_name: case_name.to_string(),
            passed: true,
            diagnostic: None,
        }
    }

    fn fail(case_name: &str, diagnostic: String) -> Self {
        Self {
            case_name: case_name.to_string(),
            passed: false,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Compare the decomposition of `value` against expected parts.
///
/// The comparison is valid when the absolute difference between each actual
/// and expected part is within that part's variance. The failure condition
/// is written as `delta > variance`: a delta that compares unordered (an
/// infinite expected met by an infinite actual yields a NaN delta) does not
/// fail, which is what makes the exact infinity case expressible at zero
/// variance.
pub fn validate(
    backend: Backend,
    case_name: &str,
    value: f64,
    expected_fraction: f64,
    fraction_variance: f64,
    expected_integral: f64,
    integral_variance: f64,
) -> CaseVerdict {
    let parts = backend.split(value);
    let delta_fraction = (parts.fraction - expected_fraction).abs();
    let delta_integral = (parts.integral - expected_integral).abs();

    if delta_fraction > fraction_variance || delta_integral > integral_variance {
        return CaseVerdict::fail(
            case_name,
            format!(
                "split({value:?}) returned ({:?}, {:?}) when it should have returned ({:?}, {:?})",
                parts.fraction, parts.integral, expected_fraction, expected_integral
            ),
        );
    }
    CaseVerdict::pass(case_name)
}

/// Check that decomposing a NaN input propagates NaN to both parts.
///
/// NaN fails every ordered comparison, including equality with itself, so
/// this is a distinct path from the tolerance comparison above.
pub fn validate_nan(backend: Backend, case_name: &str) -> CaseVerdict {
    let value = f64::NAN;
    let parts = backend.split(value);

    if !parts.fraction.is_nan() || !parts.integral.is_nan() {
        return CaseVerdict::fail(
            case_name,
            format!(
                "split({value:?}) returned ({:?}, {:?}) when it should have returned (NaN, NaN)",
                parts.fraction, parts.integral
            ),
        );
    }
    CaseVerdict::pass(case_name)
}
