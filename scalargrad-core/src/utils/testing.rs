// scalargrad-core/src/utils/testing.rs

/// Checks that a scalar is within `tolerance` of the expected value.
/// Panics with full context on mismatch, and treats NaN on either side as
/// a mismatch.
pub fn check_scalar_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}
