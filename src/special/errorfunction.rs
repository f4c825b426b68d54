use crate::elementary::exponential::exp;
use crate::elementary::primitive::abs;

// ─────────────────────────────────────────────────────────────────────────────
// Abramowitz & Stegun 7.1.26
// ─────────────────────────────────────────────────────────────────────────────
//
//   erfc(x) ≈ (a1 t + a2 t² + a3 t³ + a4 t⁴ + a5 t⁵) e^(-x²),  t = 1 / (1 + p x),  x ≥ 0
//
// 絕對誤差 ≤ 1.5e-7。

const AS_P: f64 = 0.3275911;
const AS_COEFFICIENTS: [f64; 5] = [
    0.254829592,
    -0.284496736,
    1.421413741,
    -1.453152027,
    1.061405429,
];

/// |x| 的互補誤差函數近似
fn erfc_magnitude(x: f64) -> f64 {
    let t = 1.0 / (1.0 + AS_P * x);
    let mut polynomial = 0.0;
    for c in AS_COEFFICIENTS.iter().rev() {
        polynomial = (polynomial + c) * t;
    }
    polynomial * exp(-x * x)
}

pub fn erf(x: f64) -> f64 {
    let value = 1.0 - erfc_magnitude(abs(x));
    if x < 0.0 { -value } else { value }
}

/// erfc(x) = 1 - erf(x)，x ≥ 0 時直接取近似式避免相消
pub fn erfc(x: f64) -> f64 {
    if x < 0.0 {
        2.0 - erfc_magnitude(-x)
    } else {
        erfc_magnitude(x)
    }
}
