// ─────────────────────────────────────────────────────────────────────────────
// 第一類 Bessel 函數
// ─────────────────────────────────────────────────────────────────────────────
//
//   J_0(x) = Σ (-1)^k (x/2)^(2k)   / (k!)²
//   J_1(x) = Σ (-1)^k (x/2)^(2k+1) / (k! (k+1)!)
//
// 固定 30 項、沒有提早結束；|x| 大時（約 > 20）截斷誤差變大。

const BESSEL_SERIES_TERMS: usize = 30;

pub fn bessel_j0(x: f64) -> f64 {
    let quarter_x_squared = x * x / 4.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..BESSEL_SERIES_TERMS {
        let kf = k as f64;
        term *= -quarter_x_squared / (kf * kf);
        sum += term;
    }
    sum
}

pub fn bessel_j1(x: f64) -> f64 {
    let quarter_x_squared = x * x / 4.0;
    let mut term = x / 2.0;
    let mut sum = term;
    for k in 1..BESSEL_SERIES_TERMS {
        let kf = k as f64;
        term *= -quarter_x_squared / (kf * (kf + 1.0));
        sum += term;
    }
    sum
}

/// J_n(x)，由 J_0、J_1 以前向遞迴
///
///   J_{k+1}(x) = (2k / x) J_k(x) - J_{k-1}(x)
///
/// 負階數使用 J_{-n} = (-1)^n J_n。n > |x| 時前向遞迴不穩定，
/// 遞迴值溢位成 ±∞ 後即停止並回傳該值。
pub fn bessel_jn(n: i32, x: f64) -> f64 {
    let value = bessel_jn_unsigned(n.unsigned_abs(), x);
    if n < 0 && n % 2 != 0 { -value } else { value }
}

fn bessel_jn_unsigned(order: u32, x: f64) -> f64 {
    match order {
        0 => bessel_j0(x),
        1 => bessel_j1(x),
        _ => {
            if x == 0.0 {
                return 0.0;
            }
            let mut previous = bessel_j0(x);
            let mut current = bessel_j1(x);
            for k in 1..order {
                let next = 2.0 * k as f64 / x * current - previous;
                previous = current;
                current = next;
                if !current.is_finite() {
                    break;
                }
            }
            current
        }
    }
}
