/// 複合梯形法：將 [a, b] 切成 `n` 個等寬區間。
///
/// n = 0 視為 1。
pub fn integral<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let n = n.max(1);
    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }
    sum * h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_exact() {
        let value = integral(&|x| 3.0 * x + 1.0, 0.0, 2.0, 1);
        assert!((value - 8.0).abs() < 1e-15);
    }

    #[test]
    fn test_quadratic() {
        let value = integral(&|x| x * x, 0.0, 1.0, 1000);
        assert!((value - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_intervals_and_reversed_bounds() {
        assert_eq!(integral(&|x| x, 0.0, 2.0, 0), integral(&|x| x, 0.0, 2.0, 1));
        let forward = integral(&|x| x * x, 0.0, 1.0, 100);
        let backward = integral(&|x| x * x, 1.0, 0.0, 100);
        assert!((forward + backward).abs() < 1e-12);
    }
}
