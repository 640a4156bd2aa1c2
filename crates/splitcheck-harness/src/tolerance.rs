//! Variance selection policy for expected results.

/// Unscaled variance unit for binary64 comparisons.
///
/// binary64 has a machine epsilon of 2^-52 (approx. 2.22e-16), which is
/// slightly too tight when comparing against libm implementations across
/// platforms; 2^-50 (approx. 8.88e-16) is as accurate as every supported
/// libm manages in the last bits.
pub const BASE_EPSILON: f64 = 8.881_784_197_001_252_3e-16;

/// Maximum absolute deviation allowed for an expected result.
///
/// The variance is [`BASE_EPSILON`] scaled by the decimal magnitude of the
/// expected value, so the comparison tracks the significant digits double
/// precision actually carries at that magnitude:
///
/// - `|expected| >= 1`          -> `BASE_EPSILON * 10`
/// - `|expected| in [0.1, 1)`   -> `BASE_EPSILON`
/// - `|expected| in [0.01, 0.1)` -> `BASE_EPSILON / 10`
/// - `|expected| < 0.01`        -> `BASE_EPSILON`
/// - `|expected|` infinite      -> `0` (the decomposition is exact)
///
/// Boundary values land in the looser band.
#[must_use]
pub fn variance_for(expected: f64) -> f64 {
    let magnitude = expected.abs();
    if magnitude.is_infinite() {
        return 0.0;
    }
    if magnitude >= 1.0 {
        BASE_EPSILON * 10.0
    } else if magnitude >= 0.1 {
        BASE_EPSILON
    } else if magnitude >= 0.01 {
        BASE_EPSILON / 10.0
    } else {
        BASE_EPSILON
    }
}
