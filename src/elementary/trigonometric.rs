use crate::elementary::primitive::{
    abs,
    pole_guarded_ratio,
    PI,
    POLE_SENTINEL,
    POLE_THRESHOLD,
    SERIES_TOLERANCE,
    TWO_PI
};

const TRIG_MAX_TERMS: usize = 50;

/// |x| 很大時 k·2π 的捨入誤差可達 ulp(x)，單次縮減後 r 仍可能遠超出 [-π, π)。
/// 每次縮減至少讓 |r| 縮小約 2^-50 倍，f64 範圍內 32 次足夠。
const REDUCTION_MAX_PASSES: usize = 32;

// ─────────────────────────────────────────────────────────────────────────────
// 範圍縮減
// ─────────────────────────────────────────────────────────────────────────────
//
//   k = floor((r + π) / 2π)
//   r ← r - 2πk，重複直到 r ∈ [-π, π)
//
// ±∞ 與 NaN 得到 NaN。

fn reduce_angle(x: f64) -> f64 {
    let mut r = x;
    for _ in 0..REDUCTION_MAX_PASSES {
        if (-PI..PI).contains(&r) {
            break;
        }
        let k = ((r + PI) / TWO_PI).floor();
        // 分兩次減 kπ，x 接近 f64::MAX 時 k·2π 會溢位
        r = (r - k * PI) - k * PI;
    }
    r
}

/// sin(r) = Σ (-1)^k r^(2k+1) / (2k+1)!
pub fn sin(x: f64) -> f64 {
    let r = reduce_angle(x);
    let r_squared = r * r;
    let mut term = r;
    let mut sum = r;
    for k in 1..TRIG_MAX_TERMS {
        let n = (2 * k) as f64;
        term *= -r_squared / (n * (n + 1.0));
        sum += term;
        if abs(term) < SERIES_TOLERANCE {
            break;
        }
    }
    sum
}

/// cos(r) = Σ (-1)^k r^(2k) / (2k)!
pub fn cos(x: f64) -> f64 {
    let r = reduce_angle(x);
    let r_squared = r * r;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..TRIG_MAX_TERMS {
        let n = (2 * k) as f64;
        term *= -r_squared / ((n - 1.0) * n);
        sum += term;
        if abs(term) < SERIES_TOLERANCE {
            break;
        }
    }
    sum
}

/// tan(x) = sin(x) / cos(x)
///
/// |cos(x)| < 1e-15 視為極點，回傳 ±1e308（符號同 sin(x)）。
pub fn tan(x: f64) -> f64 {
    let s = sin(x);
    let c = cos(x);
    if abs(c) < POLE_THRESHOLD {
        return if s >= 0.0 { POLE_SENTINEL } else { -POLE_SENTINEL };
    }
    s / c
}

pub fn sec(x: f64) -> f64 {
    pole_guarded_ratio(1.0, cos(x))
}

pub fn csc(x: f64) -> f64 {
    pole_guarded_ratio(1.0, sin(x))
}

pub fn cot(x: f64) -> f64 {
    pole_guarded_ratio(cos(x), sin(x))
}

// ─────────────────────────────────────────────────────────────────────────────
// 固定項數版本（無範圍縮減、無提早結束）
// ─────────────────────────────────────────────────────────────────────────────

pub fn sin_taylor(x: f64, terms: usize) -> f64 {
    let x_squared = x * x;
    let mut term = x;
    let mut sum = 0.0;
    for k in 0..terms {
        if k > 0 {
            let n = (2 * k) as f64;
            term *= -x_squared / (n * (n + 1.0));
        }
        sum += term;
    }
    sum
}

pub fn cos_taylor(x: f64, terms: usize) -> f64 {
    let x_squared = x * x;
    let mut term = 1.0;
    let mut sum = 0.0;
    for k in 0..terms {
        if k > 0 {
            let n = (2 * k) as f64;
            term *= -x_squared / ((n - 1.0) * n);
        }
        sum += term;
    }
    sum
}
