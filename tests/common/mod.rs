//! 整合測試共用的容差比較
#![allow(dead_code)]

/// |actual - expected| ≤ tol
pub fn assert_abs_close(actual: f64, expected: f64, tol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        actual,
        expected,
        diff,
        tol
    );
}

/// |actual - expected| ≤ tol · |expected|
pub fn assert_rel_close(actual: f64, expected: f64, tol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    let bound = tol * expected.abs();
    assert!(
        diff <= bound,
        "{}: {} vs {} (relative diff={}, tol={})",
        msg,
        actual,
        expected,
        diff / expected.abs(),
        tol
    );
}

/// `[lower, upper]` 上等距的 `count` 個取樣點
pub fn sample_points(lower: f64, upper: f64, count: usize) -> Vec<f64> {
    let step = (upper - lower) / (count - 1) as f64;
    (0..count).map(|i| lower + i as f64 * step).collect()
}
