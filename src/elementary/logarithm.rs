use log::debug;

use crate::elementary::exponential::exp;
use crate::elementary::primitive::{
    abs,
    LN_10,
    LN_2,
    LN_SENTINEL
};

const NEWTON_MAX_ITERATIONS: usize = 100;
const NEWTON_TOLERANCE: f64 = 1e-12;

// ─────────────────────────────────────────────────────────────────────────────
// Ln - Newton's method on f(y) = e^y - x
// ─────────────────────────────────────────────────────────────────────────────
//
//   y ← y - (e^y - x) / e^y
//
// 先以 2 的次方把 x 縮到 [0.5, 2]：x = m · 2^k，ln(x) = ln(m) + k · ln(2)。
// 未縮減時，大 x 的起始值 x/2 遠大於 ln(x)，Newton 每步只前進約 1，
// 100 步內無法收斂。

/// 自然對數。x ≤ 0 回傳 `LN_SENTINEL`（-1e308）。
pub fn ln(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return LN_SENTINEL;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }

    let mut mantissa = x;
    let mut exponent = 0i32;
    while mantissa > 2.0 {
        mantissa /= 2.0;
        exponent += 1;
    }
    while mantissa < 0.5 {
        mantissa *= 2.0;
        exponent -= 1;
    }

    let mut y = mantissa - 1.0;
    let mut converged = false;
    for _ in 0..NEWTON_MAX_ITERATIONS {
        let ey = exp(y);
        let diff = ey - mantissa;
        y -= diff / ey;
        if abs(diff) < NEWTON_TOLERANCE {
            converged = true;
            break;
        }
    }
    if !converged {
        debug!("ln: Newton iteration for {} stopped after {} steps", x, NEWTON_MAX_ITERATIONS);
    }

    y + exponent as f64 * LN_2
}

pub fn log10(x: f64) -> f64 {
    ln(x) / ln(10.0)
}

pub fn log2(x: f64) -> f64 {
    ln(x) / ln(2.0)
}

pub fn log_base(x: f64, base: f64) -> f64 {
    ln(x) / ln(base)
}

/// 與 `log10` 相同，但以常數 ln(10) 代替重複計算
pub fn log10_fast(x: f64) -> f64 {
    ln(x) / LN_10
}

pub fn log2_fast(x: f64) -> f64 {
    ln(x) / LN_2
}

// ─────────────────────────────────────────────────────────────────────────────
// 級數版本
// ─────────────────────────────────────────────────────────────────────────────

/// Mercator 級數：ln(1 + x) = x - x²/2 + x³/3 - ...
///
/// 只在 -1 < x ≤ 1 收斂；範圍外回傳 0。
pub fn ln_mercator(x: f64, terms: usize) -> f64 {
    if !(x > -1.0 && x <= 1.0) {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut x_power = x;
    for k in 1..=terms {
        let term = x_power / k as f64;
        if k % 2 == 1 {
            sum += term;
        } else {
            sum -= term;
        }
        x_power *= x;
    }
    sum
}

/// ln(x) = 2 · artanh((x - 1) / (x + 1)) = 2 · Σ z^(2k+1) / (2k+1)
///
/// 對所有 x > 0 收斂；x ≤ 0 回傳 `LN_SENTINEL`。
pub fn ln_series(x: f64, terms: usize) -> f64 {
    if x <= 0.0 {
        return LN_SENTINEL;
    }

    let z = (x - 1.0) / (x + 1.0);
    let z_squared = z * z;
    let mut z_power = z;
    let mut sum = 0.0;
    for k in 0..terms {
        sum += z_power / (2 * k + 1) as f64;
        z_power *= z_squared;
    }
    2.0 * sum
}
