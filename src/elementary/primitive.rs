// ─────────────────────────────────────────────────────────────────────────────
// 常數
// ─────────────────────────────────────────────────────────────────────────────

pub const PI: f64 = 3.141592653589793;
pub const HALF_PI: f64 = 1.5707963267948966;
pub const TWO_PI: f64 = 6.283185307179586;
pub const E: f64 = 2.718281828459045;
pub const LN_2: f64 = 0.6931471805599453;
pub const LN_10: f64 = 2.302585092994046;

/// `ln` 對非正數輸入回傳的哨兵值（代替 -∞）
pub const LN_SENTINEL: f64 = -1e308;

/// 極點（tan、csc、cot 等分母趨近 0）時回傳的哨兵值
pub const POLE_SENTINEL: f64 = 1e308;

/// 級數展開的收斂門檻：項的絕對值小於此值即停止
pub const SERIES_TOLERANCE: f64 = 1e-15;

/// 分母絕對值小於此值視為極點
pub const POLE_THRESHOLD: f64 = 1e-15;

pub fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// `num / den`，但分母落在極點附近時回傳帶號的 `POLE_SENTINEL`。
///
/// 符號取自分子（分子為 0 視為正）。
pub fn pole_guarded_ratio(num: f64, den: f64) -> f64 {
    if abs(den) < POLE_THRESHOLD {
        if num >= 0.0 { POLE_SENTINEL } else { -POLE_SENTINEL }
    } else {
        num / den
    }
}

pub fn is_whole(x: f64) -> bool {
    x.is_finite() && x == x.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(3.0), 3.0);
        assert_eq!(abs(0.0), 0.0);
        assert!(abs(f64::NAN).is_nan());
        assert_eq!(abs(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_pole_guarded_ratio() {
        assert_eq!(pole_guarded_ratio(1.0, 4.0), 0.25);
        assert_eq!(pole_guarded_ratio(1.0, 1e-17), POLE_SENTINEL);
        assert_eq!(pole_guarded_ratio(-1.0, 1e-17), -POLE_SENTINEL);
        assert_eq!(pole_guarded_ratio(0.0, 0.0), POLE_SENTINEL);
    }

    #[test]
    fn test_is_whole() {
        assert!(is_whole(3.0));
        assert!(is_whole(-4.0));
        assert!(!is_whole(2.5));
        assert!(!is_whole(f64::INFINITY));
        assert!(!is_whole(f64::NAN));
    }
}
