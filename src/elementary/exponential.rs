use log::debug;

use crate::elementary::logarithm::ln;
use crate::elementary::primitive::{
    abs,
    is_whole,
    SERIES_TOLERANCE
};

const EXP_MAX_TERMS: usize = 100;

/// `power_recursive` 逐次相乘的步數上限，超過後改走平方法
const RECURSIVE_POWER_MAX_STEPS: u64 = 10_000;

// ─────────────────────────────────────────────────────────────────────────────
// Exp
// ─────────────────────────────────────────────────────────────────────────────
//
// e^x = (e^(x / 2^n))^(2^n)
//
// 1. x < 0 時取倒數：e^x = 1 / e^(-x)
// 2. 反覆將 x 減半直到 x ≤ 1，記錄減半次數 n
// 3. 在 [0, 1] 上做 Taylor 展開 Σ x^k / k!
// 4. 把結果平方 n 次還原

/// 指數函數 e^x
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }
    if x < 0.0 {
        return 1.0 / exp(-x);
    }

    let mut reduced = x;
    let mut halvings = 0u32;
    while reduced > 1.0 {
        reduced /= 2.0;
        halvings += 1;
    }

    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 1..EXP_MAX_TERMS {
        term *= reduced / k as f64;
        sum += term;
        if abs(term) < SERIES_TOLERANCE {
            break;
        }
    }

    for _ in 0..halvings {
        sum *= sum;
    }
    sum
}

/// 直接以 `terms` 項 Taylor 級數計算 e^x，不做範圍縮減。
///
/// |x| 大時需要非常多項才會收斂，精度明顯下降。
pub fn exp_taylor(x: f64, terms: usize) -> f64 {
    let mut sum = 0.0;
    let mut term = 1.0;
    for k in 0..terms {
        if k > 0 {
            term *= x / k as f64;
        }
        sum += term;
    }
    sum
}

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

/// base^exp
///
/// - exp == 0 → 1
/// - base == 0 → 0
/// - exp 為整數 → 平方法（負指數取倒數）
/// - base < 0 且 exp 非整數 → 0（實數結果不存在）
/// - 其他 → e^(exp · ln(base))
pub fn power(base: f64, exp_value: f64) -> f64 {
    if exp_value == 0.0 {
        return 1.0;
    }
    if base == 0.0 {
        return 0.0;
    }
    if is_whole(exp_value) {
        return power_int(base, exp_value as i64);
    }
    if base < 0.0 {
        return 0.0;
    }
    exp(exp_value * ln(base))
}

/// 整數次方，平方法（exponentiation by squaring）
pub fn power_int(base: f64, n: i64) -> f64 {
    let mut remaining = n.unsigned_abs();
    let mut factor = base;
    let mut result = 1.0;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        remaining >>= 1;
    }

    if n < 0 { 1.0 / result } else { result }
}

/// 逐次相乘版本的整數次方：base^n = base · base^(n-1)。
///
/// 以迴圈取代遞迴；|n| 超過 `RECURSIVE_POWER_MAX_STEPS` 時改用 `power_int`。
pub fn power_recursive(base: f64, n: i64) -> f64 {
    let steps = n.unsigned_abs();
    if steps > RECURSIVE_POWER_MAX_STEPS {
        debug!(
            "power_recursive: exponent {} exceeds {} steps, using squaring",
            n, RECURSIVE_POWER_MAX_STEPS
        );
        return power_int(base, n);
    }

    let mut result = 1.0;
    for _ in 0..steps {
        result *= base;
    }

    if n < 0 { 1.0 / result } else { result }
}
