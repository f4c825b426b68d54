use crate::elementary::exponential::exp;
use crate::elementary::primitive::{
    abs,
    pole_guarded_ratio
};

// 雙曲函數沒有週期性，直接由 exp 組成，不需要範圍縮減。

pub fn sinh(x: f64) -> f64 {
    (exp(x) - exp(-x)) / 2.0
}

pub fn cosh(x: f64) -> f64 {
    (exp(x) + exp(-x)) / 2.0
}

/// |x| < 1 時用 sinh / cosh；否則用 1 - 2 / (e^(2x) + 1)，
/// 避免大 |x| 時出現 ∞ / ∞。
pub fn tanh(x: f64) -> f64 {
    if abs(x) < 1.0 {
        sinh(x) / cosh(x)
    } else {
        1.0 - 2.0 / (exp(2.0 * x) + 1.0)
    }
}

pub fn sech(x: f64) -> f64 {
    1.0 / cosh(x)
}

pub fn csch(x: f64) -> f64 {
    pole_guarded_ratio(1.0, sinh(x))
}

pub fn coth(x: f64) -> f64 {
    pole_guarded_ratio(cosh(x), sinh(x))
}

/// sinh(x) = Σ x^(2k+1) / (2k+1)!，固定 `terms` 項
pub fn sinh_taylor(x: f64, terms: usize) -> f64 {
    let x_squared = x * x;
    let mut term = x;
    let mut sum = 0.0;
    for k in 0..terms {
        if k > 0 {
            let n = (2 * k) as f64;
            term *= x_squared / (n * (n + 1.0));
        }
        sum += term;
    }
    sum
}

/// cosh(x) = Σ x^(2k) / (2k)!，固定 `terms` 項
pub fn cosh_taylor(x: f64, terms: usize) -> f64 {
    let x_squared = x * x;
    let mut term = 1.0;
    let mut sum = 0.0;
    for k in 0..terms {
        if k > 0 {
            let n = (2 * k) as f64;
            term *= x_squared / ((n - 1.0) * n);
        }
        sum += term;
    }
    sum
}
