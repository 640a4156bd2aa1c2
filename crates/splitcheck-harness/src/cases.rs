//! Reference case table for the split/decompose conformance suite.

use serde::{Deserialize, Serialize};

use crate::tolerance::variance_for;

/// A reference decomposition with per-field variances.
///
/// The variances are derived from the magnitude policy in
/// [`crate::tolerance`] when the table is built, never hand-picked.
#[derive(Debug, Clone, Copy)]
pub struct SplitCase {
    /// Stable case label used in diagnostics and report rows.
    pub name: &'static str,
    /// Input to the function under test.
    pub value: f64,
    /// Expected fractional part.
    pub expected_fraction: f64,
    /// Maximum allowed absolute deviation for the fractional part.
    pub fraction_variance: f64,
    /// Expected integral part.
    pub expected_integral: f64,
    /// Maximum allowed absolute deviation for the integral part.
    pub integral_variance: f64,
}

impl SplitCase {
    /// Build a case, deriving both variances from the magnitude policy.
    #[must_use]
    pub fn new(name: &'static str, value: f64, expected_fraction: f64, expected_integral: f64) -> Self {
        Self {
            name,
            value,
            expected_fraction,
            fraction_variance: variance_for(expected_fraction),
            expected_integral,
            integral_variance: variance_for(expected_integral),
        }
    }

    /// Render the case as a serializable fixture record.
    #[must_use]
    pub fn to_record(&self) -> SplitCaseRecord {
        SplitCaseRecord {
            name: self.name.to_string(),
            value: format!("{:?}", self.value),
            expected_fraction: format!("{:?}", self.expected_fraction),
            fraction_variance: format!("{:?}", self.fraction_variance),
            expected_integral: format!("{:?}", self.expected_integral),
            integral_variance: format!("{:?}", self.integral_variance),
        }
    }
}

/// Serialized form of a [`SplitCase`].
///
/// Values are rendered as strings so non-finite entries survive JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitCaseRecord {
    pub name: String,
    pub value: String,
    pub expected_fraction: String,
    pub fraction_variance: String,
    pub expected_integral: String,
    pub integral_variance: String,
}

/// The fixed, ordered conformance table.
///
/// Sixteen entries spanning every variance band: zero, reciprocals of
/// well-known irrational constants, values just above one, and positive
/// infinity. The runner also exercises each entry's arithmetic negation.
#[must_use]
pub fn case_table() -> Vec<SplitCase> {
    vec![
        SplitCase::new("zero", 0.0, 0.0, 0.0),
        SplitCase::new("1/pi", 0.31830988618379067, 0.31830988618379067, 0.0),
        SplitCase::new("log10(e)", 0.43429448190325183, 0.43429448190325183, 0.0),
        SplitCase::new("2/pi", 0.63661977236758134, 0.63661977236758134, 0.0),
        SplitCase::new("ln(2)", 0.69314718055994531, 0.69314718055994531, 0.0),
        SplitCase::new("1/sqrt(2)", 0.70710678118654752, 0.70710678118654752, 0.0),
        SplitCase::new("pi/4", 0.78539816339744831, 0.78539816339744831, 0.0),
        SplitCase::new("one", 1.0, 0.0, 1.0),
        SplitCase::new("2/sqrt(pi)", 1.1283791670955126, 0.1283791670955126, 1.0),
        SplitCase::new("sqrt(2)", 1.4142135623730950, 0.4142135623730950, 1.0),
        SplitCase::new("log2(e)", 1.4426950408889634, 0.4426950408889634, 1.0),
        SplitCase::new("pi/2", 1.5707963267948966, 0.5707963267948966, 1.0),
        SplitCase::new("ln(10)", 2.3025850929940457, 0.3025850929940457, 2.0),
        SplitCase::new("e", 2.7182818284590452, 0.7182818284590452, 2.0),
        SplitCase::new("pi", 3.1415926535897932, 0.1415926535897932, 3.0),
        SplitCase::new("+inf", f64::INFINITY, 0.0, f64::INFINITY),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::BASE_EPSILON;

    #[test]
    fn table_has_sixteen_ordered_entries() {
        let table = case_table();
        assert_eq!(table.len(), 16);
        assert_eq!(table.first().map(|c| c.name), Some("zero"));
        assert_eq!(table.last().map(|c| c.name), Some("+inf"));
    }

    #[test]
    fn variances_follow_the_magnitude_policy() {
        for case in case_table() {
            assert_eq!(
                case.fraction_variance,
                variance_for(case.expected_fraction),
                "fraction variance of {}",
                case.name
            );
            assert_eq!(
                case.integral_variance,
                variance_for(case.expected_integral),
                "integral variance of {}",
                case.name
            );
            assert!(case.fraction_variance >= 0.0);
            assert!(case.integral_variance >= 0.0);
        }
    }

    #[test]
    fn unit_integral_parts_get_scaled_variance() {
        let table = case_table();
        let one = table.iter().find(|c| c.name == "one").expect("one entry");
        assert_eq!(one.fraction_variance, BASE_EPSILON);
        assert_eq!(one.integral_variance, BASE_EPSILON * 10.0);
    }

    #[test]
    fn infinity_entry_demands_exact_integral_part() {
        let table = case_table();
        let inf = table.iter().find(|c| c.name == "+inf").expect("inf entry");
        assert_eq!(inf.expected_integral, f64::INFINITY);
        assert_eq!(inf.integral_variance, 0.0);
        assert_eq!(inf.expected_fraction, 0.0);
        assert_eq!(inf.fraction_variance, BASE_EPSILON);
    }

    #[test]
    fn records_round_trip_through_json() {
        let records: Vec<_> = case_table().iter().map(SplitCase::to_record).collect();
        let json = serde_json::to_string(&records).expect("records serialize");
        let back: Vec<SplitCaseRecord> = serde_json::from_str(&json).expect("records parse");
        assert_eq!(back.len(), 16);
        assert_eq!(back[15].value, "inf");
    }
}
