/// Romberg 表的最大列數；第 k 列需要 2^k 個區間
pub const ROMBERG_MAX_LEVELS: usize = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Romberg
// ─────────────────────────────────────────────────────────────────────────────
//
//   R[0][0] = (b - a)/2 · (f(a) + f(b))
//   R[i][0] = R[i-1][0]/2 + h_i · Σ_{k=1}^{2^(i-1)} f(a + (2k - 1) h_i),  h_i = (b - a)/2^i
//   R[i][j] = R[i][j-1] + (R[i][j-1] - R[i-1][j-1]) / (4^j - 1)
//
// 回傳最精細的角落 R[n-1][n-1]。`levels` 夾在 [1, ROMBERG_MAX_LEVELS]。

pub fn romberg_integration<F>(f: &F, a: f64, b: f64, levels: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let levels = levels.clamp(1, ROMBERG_MAX_LEVELS);
    let mut previous = vec![0.0; levels];
    let mut current = vec![0.0; levels];

    previous[0] = (b - a) / 2.0 * (f(a) + f(b));

    for i in 1..levels {
        let intervals = 1usize << i;
        let h = (b - a) / intervals as f64;
        let mut midpoint_sum = 0.0;
        for k in 1..=(intervals / 2) {
            midpoint_sum += f(a + (2 * k - 1) as f64 * h);
        }
        current[0] = previous[0] / 2.0 + h * midpoint_sum;

        let mut factor = 1.0;
        for j in 1..=i {
            factor *= 4.0;
            current[j] = current[j - 1] + (current[j - 1] - previous[j - 1]) / (factor - 1.0);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[levels - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level_is_trapezoid() {
        let value = romberg_integration(&|x| x * x, 0.0, 2.0, 1);
        assert_eq!(value, 4.0);
        assert_eq!(romberg_integration(&|x| x * x, 0.0, 2.0, 0), 4.0);
    }

    #[test]
    fn test_polynomial_exact_after_two_levels() {
        // 第二欄等同 Simpson，對三次多項式精確
        let value = romberg_integration(&|x| x * x * x + 2.0 * x, 0.0, 2.0, 2);
        assert!((value - 8.0).abs() < 1e-14);
    }

    #[test]
    fn test_transcendental() {
        let value = romberg_integration(&|x| x.exp(), 0.0, 1.0, 6);
        assert!((value - (std::f64::consts::E - 1.0)).abs() < 1e-13);
    }

    #[test]
    fn test_levels_clamped() {
        let f = |x: f64| 1.0 / (1.0 + x);
        assert_eq!(romberg_integration(&f, 0.0, 1.0, 1000), romberg_integration(&f, 0.0, 1.0, ROMBERG_MAX_LEVELS));
    }
}
