// 單元測試共用的容差比較

/// |actual - expected| ≤ tol
pub fn assert_abs_close(actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "expected {} to be close to {}, diff = {}, tol = {}",
        actual,
        expected,
        diff,
        tol
    );
}

/// |actual - expected| ≤ tol · max(|expected|, 1)
///
/// 期望值小於 1 時退化為絕對誤差。
pub fn assert_scaled_close(actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    let bound = tol * expected.abs().max(1.0);
    assert!(
        diff <= bound,
        "expected {} to be close to {}, diff = {}, bound = {}",
        actual,
        expected,
        diff,
        bound
    );
}
