use crate::elementary::exponential::power;

/// Riemann ζ(s) 的直接截斷級數 Σ_{n=1}^{terms} 1 / n^s。
///
/// s ≤ 1 時級數發散，回傳 0。
pub fn zeta(s: f64, terms: usize) -> f64 {
    if s <= 1.0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for n in 1..=terms {
        sum += 1.0 / power(n as f64, s);
    }
    sum
}
