use log::debug;

use crate::elementary::primitive::abs;

/// 遞迴深度上限，保證對不收斂的被積函數也會結束
pub const ADAPTIVE_SIMPSON_MAX_DEPTH: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Adaptive Simpson
// ─────────────────────────────────────────────────────────────────────────────
//
// 將區間二分，比較 S_left + S_right 與 S_whole：
//
//   |S_left + S_right - S_whole| < 15ε  → 接受，並以 Richardson 外插修正
//                                          S_left + S_right + Δ/15
//   否則左右各以 ε/2 繼續遞迴，深度上限 10。

pub fn adaptive_simpson<F>(f: &F, a: f64, b: f64, epsilon: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    adaptive_simpson_with_depth(f, a, b, epsilon, ADAPTIVE_SIMPSON_MAX_DEPTH)
}

/// 同 `adaptive_simpson`，深度上限可調整但不超過 `ADAPTIVE_SIMPSON_MAX_DEPTH`
pub fn adaptive_simpson_with_depth<F>(f: &F, a: f64, b: f64, epsilon: f64, max_depth: u32) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let fa = f(a);
    let fb = f(b);
    let midpoint = (a + b) / 2.0;
    let fm = f(midpoint);
    let whole = simpson_panel(a, b, fa, fm, fb);
    let depth = max_depth.min(ADAPTIVE_SIMPSON_MAX_DEPTH);
    refine(f, &Panel { a, b, fa, fm, fb, whole }, epsilon, depth)
}

struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

fn simpson_panel(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F>(f: &F, panel: &Panel, epsilon: f64, depth: u32) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let midpoint = (panel.a + panel.b) / 2.0;
    let left_mid = (panel.a + midpoint) / 2.0;
    let right_mid = (midpoint + panel.b) / 2.0;
    let f_left_mid = f(left_mid);
    let f_right_mid = f(right_mid);

    let left = simpson_panel(panel.a, midpoint, panel.fa, f_left_mid, panel.fm);
    let right = simpson_panel(midpoint, panel.b, panel.fm, f_right_mid, panel.fb);
    let delta = left + right - panel.whole;

    if abs(delta) < 15.0 * epsilon {
        return left + right + delta / 15.0;
    }
    if depth == 0 {
        debug!(
            "adaptive_simpson: depth limit reached on [{}, {}], residual {}",
            panel.a, panel.b, delta
        );
        return left + right + delta / 15.0;
    }

    let left_panel = Panel {
        a: panel.a,
        b: midpoint,
        fa: panel.fa,
        fm: f_left_mid,
        fb: panel.fm,
        whole: left,
    };
    let right_panel = Panel {
        a: midpoint,
        b: panel.b,
        fa: panel.fm,
        fm: f_right_mid,
        fb: panel.fb,
        whole: right,
    };
    refine(f, &left_panel, epsilon / 2.0, depth - 1) + refine(f, &right_panel, epsilon / 2.0, depth - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_smooth_integrand() {
        let value = adaptive_simpson(&|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 1e-12);
        assert!((value - std::f64::consts::FRAC_PI_4).abs() < 1e-10);
    }

    #[test]
    fn test_polynomial_accepted_immediately() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * x
        };
        let value = adaptive_simpson(&f, 0.0, 3.0, 1e-9);
        assert!((value - 9.0).abs() < 1e-12);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_depth_cap_bounds_evaluations() {
        let calls = Cell::new(0usize);
        // 不連續且在 0 附近劇烈變化，永遠達不到 ε = 0
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            if x < 0.3 { 0.0 } else { 1.0 / (x - 0.29).sqrt() }
        };
        let value = adaptive_simpson(&f, 0.0, 1.0, 0.0);
        assert!(value.is_finite());
        // 3 + 2 · (2^(depth+1) - 1)
        assert!(calls.get() <= 3 + 2 * ((1 << (ADAPTIVE_SIMPSON_MAX_DEPTH + 1)) - 1));
    }

    #[test]
    fn test_depth_override_is_clamped() {
        let f = |x: f64| x.sin();
        let capped = adaptive_simpson_with_depth(&f, 0.0, 3.0, 0.0, 50);
        let default = adaptive_simpson(&f, 0.0, 3.0, 0.0);
        assert_eq!(capped, default);
    }
}
