/// Simpson 需要成對的區間：奇數 `n` 加 1，n = 0 視為 2。
/// `usize::MAX` 無法再加 1，改為減 1。
fn even_panels(n: usize) -> usize {
    let n = n.max(2);
    if n % 2 == 0 {
        n
    } else {
        n.checked_add(1).unwrap_or(n - 1)
    }
}

/// 複合 Simpson 法，區間數先調整為偶數。
pub fn simpson_integral<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let n = even_panels(n);
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + i as f64 * h);
    }
    sum * h / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_is_exact() {
        let value = simpson_integral(&|x| x * x * x - x, 0.0, 2.0, 2);
        assert!((value - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_even_panels() {
        assert_eq!(even_panels(0), 2);
        assert_eq!(even_panels(1), 2);
        assert_eq!(even_panels(2), 2);
        assert_eq!(even_panels(7), 8);
        assert_eq!(even_panels(usize::MAX), usize::MAX - 1);
        assert_eq!(even_panels(usize::MAX - 1), usize::MAX - 1);
    }

    #[test]
    fn test_odd_n_rounds_up() {
        let f = |x: f64| 1.0 / (1.0 + x);
        assert_eq!(simpson_integral(&f, 0.0, 1.0, 7), simpson_integral(&f, 0.0, 1.0, 8));
        assert_eq!(simpson_integral(&f, 0.0, 1.0, 0), simpson_integral(&f, 0.0, 1.0, 2));
    }

    #[test]
    fn test_higher_order_than_trapezoid() {
        let f = |x: f64| 1.0 / (1.0 + x);
        let exact = 0.6931471805599453;
        let simpson = simpson_integral(&f, 0.0, 1.0, 10);
        let trapezoid = crate::integration::trapezoid::integral(&f, 0.0, 1.0, 10);
        assert!((simpson - exact).abs() < (trapezoid - exact).abs());
        assert!((simpson - exact).abs() < 1e-5);
    }
}
