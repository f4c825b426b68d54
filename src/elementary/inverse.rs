use log::debug;

use crate::elementary::logarithm::ln;
use crate::elementary::primitive::{
    abs,
    HALF_PI,
    PI,
    SERIES_TOLERANCE
};

const SQRT_MAX_ITERATIONS: usize = 50;
const SQRT_TOLERANCE: f64 = 1e-15;
const ATAN_MAX_TERMS: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// Sqrt - Babylonian / Newton：z ← (z + x / z) / 2
// ─────────────────────────────────────────────────────────────────────────────

/// 平方根。x ≤ 0 回傳 0（沒有錯誤通道）。
pub fn sqrt(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }

    // 起始值取 2 的次方，與真值相差不超過 2 倍
    let mut z = 1.0;
    if x > 1.0 {
        while z * z < x {
            z *= 2.0;
        }
    } else {
        while z * z > x {
            z /= 2.0;
        }
    }

    for _ in 0..SQRT_MAX_ITERATIONS {
        let next = (z + x / z) / 2.0;
        let delta = abs(next - z);
        z = next;
        if delta < SQRT_TOLERANCE * z {
            return z;
        }
    }
    debug!("sqrt: Newton iteration for {} stopped after {} steps", x, SQRT_MAX_ITERATIONS);
    z
}

// ─────────────────────────────────────────────────────────────────────────────
// Atan
// ─────────────────────────────────────────────────────────────────────────────
//
// |x| > 1：atan(x) = ±π/2 - atan(1/x)
// 0.5 < |x| ≤ 1：半角公式 atan(x) = 2 · atan(x / (1 + √(1 + x²)))
// |x| ≤ 0.5：交錯級數 Σ (-1)^k x^(2k+1) / (2k+1)
//
// x = 1 時交錯級數 200 項的誤差約 1/400，半角縮減後收斂很快。

pub fn atan(x: f64) -> f64 {
    if x > 1.0 {
        return HALF_PI - atan(1.0 / x);
    }
    if x < -1.0 {
        return -HALF_PI - atan(1.0 / x);
    }
    if abs(x) > 0.5 {
        return 2.0 * atan_series(x / (1.0 + sqrt(1.0 + x * x)));
    }
    atan_series(x)
}

fn atan_series(x: f64) -> f64 {
    let x_squared = x * x;
    let mut x_power = x;
    let mut sum = 0.0;
    for k in 0..ATAN_MAX_TERMS {
        let term = x_power / (2 * k + 1) as f64;
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        if abs(term) < SERIES_TOLERANCE {
            break;
        }
        x_power *= x_squared;
    }
    sum
}

/// 固定 `terms` 項的 atan 交錯級數，不做任何縮減（僅 |x| ≤ 1 有意義）
pub fn atan_taylor(x: f64, terms: usize) -> f64 {
    let x_squared = x * x;
    let mut x_power = x;
    let mut sum = 0.0;
    for k in 0..terms {
        let term = x_power / (2 * k + 1) as f64;
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        x_power *= x_squared;
    }
    sum
}

/// asin(x) = atan(x / √(1 - x²))；|x| > 1 回傳 0，x = ±1 回傳 ±π/2
pub fn asin(x: f64) -> f64 {
    if x > 1.0 || x < -1.0 {
        return 0.0;
    }
    if x == 1.0 {
        return HALF_PI;
    }
    if x == -1.0 {
        return -HALF_PI;
    }
    atan(x / sqrt(1.0 - x * x))
}

pub fn acos(x: f64) -> f64 {
    HALF_PI - asin(x)
}

/// 依象限分派的 atan(y / x)，結果落在 (-π, π]
pub fn atan2(y: f64, x: f64) -> f64 {
    if x > 0.0 {
        atan(y / x)
    } else if x < 0.0 {
        if y >= 0.0 {
            atan(y / x) + PI
        } else {
            atan(y / x) - PI
        }
    } else if y > 0.0 {
        HALF_PI
    } else if y < 0.0 {
        -HALF_PI
    } else {
        0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 反雙曲函數
// ─────────────────────────────────────────────────────────────────────────────

/// asinh(x) = ln(x + √(x² + 1))，利用奇函數性質避免負數時的相消
pub fn asinh(x: f64) -> f64 {
    let magnitude = abs(x);
    let result = ln(magnitude + sqrt(magnitude * magnitude + 1.0));
    if x < 0.0 { -result } else { result }
}

/// acosh(x) = ln(x + √(x² - 1))；x < 1 回傳 0
pub fn acosh(x: f64) -> f64 {
    if x < 1.0 {
        return 0.0;
    }
    ln(x + sqrt(x * x - 1.0))
}

/// atanh(x) = ln((1 + x) / (1 - x)) / 2；|x| ≥ 1 回傳 0
pub fn atanh(x: f64) -> f64 {
    if abs(x) >= 1.0 {
        return 0.0;
    }
    0.5 * ln((1.0 + x) / (1.0 - x))
}
