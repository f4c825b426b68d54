// ─────────────────────────────────────────────────────────────────────────────
// 嚴格版本
// ─────────────────────────────────────────────────────────────────────────────
//
// 每個 try_* 在定義域內回傳與預設函數完全相同的值，
// 定義域外回傳 DomainError，而不是哨兵值（-1e308、±1e308、0）。

use crate::checked::domainerror::DomainError;
use crate::elementary::exponential::power;
use crate::elementary::inverse::{
    acos,
    acosh,
    asin,
    atanh,
    sqrt
};
use crate::elementary::logarithm::{
    ln,
    ln_mercator,
    log10,
    log2,
    log_base
};
use crate::elementary::primitive::{
    abs,
    is_whole,
    POLE_THRESHOLD
};
use crate::elementary::trigonometric::{
    cos,
    tan
};
use crate::special::gamma::gamma;
use crate::special::zeta::zeta;

pub type DomainResult = Result<f64, DomainError>;

fn reject_nan(function: &'static str, x: f64) -> Result<(), DomainError> {
    if x.is_nan() {
        Err(DomainError::NotANumber { function })
    } else {
        Ok(())
    }
}

fn require_positive(function: &'static str, x: f64) -> Result<(), DomainError> {
    reject_nan(function, x)?;
    if x <= 0.0 {
        Err(DomainError::NonPositiveArgument { function, x })
    } else {
        Ok(())
    }
}

fn require_range(function: &'static str, x: f64, lower: f64, upper: f64) -> Result<(), DomainError> {
    reject_nan(function, x)?;
    if x < lower || x > upper {
        Err(DomainError::OutOfRange { function, x, lower, upper })
    } else {
        Ok(())
    }
}

pub fn try_ln(x: f64) -> DomainResult {
    require_positive("ln", x)?;
    Ok(ln(x))
}

pub fn try_log10(x: f64) -> DomainResult {
    require_positive("log10", x)?;
    Ok(log10(x))
}

pub fn try_log2(x: f64) -> DomainResult {
    require_positive("log2", x)?;
    Ok(log2(x))
}

/// base 需為正且不等於 1
pub fn try_log_base(x: f64, base: f64) -> DomainResult {
    require_positive("log_base", x)?;
    require_positive("log_base", base)?;
    if base == 1.0 {
        return Err(DomainError::Pole { function: "log_base", x: base });
    }
    Ok(log_base(x, base))
}

/// ln(1 + x) 的 Mercator 級數，需 -1 < x ≤ 1
pub fn try_ln_mercator(x: f64, terms: usize) -> DomainResult {
    reject_nan("ln_mercator", x)?;
    if x <= -1.0 || x > 1.0 {
        return Err(DomainError::OutOfRange { function: "ln_mercator", x, lower: -1.0, upper: 1.0 });
    }
    Ok(ln_mercator(x, terms))
}

/// 0 視為定義域內（√0 = 0）
pub fn try_sqrt(x: f64) -> DomainResult {
    reject_nan("sqrt", x)?;
    if x < 0.0 {
        return Err(DomainError::OutOfRange { function: "sqrt", x, lower: 0.0, upper: f64::INFINITY });
    }
    Ok(sqrt(x))
}

pub fn try_asin(x: f64) -> DomainResult {
    require_range("asin", x, -1.0, 1.0)?;
    Ok(asin(x))
}

pub fn try_acos(x: f64) -> DomainResult {
    require_range("acos", x, -1.0, 1.0)?;
    Ok(acos(x))
}

pub fn try_acosh(x: f64) -> DomainResult {
    require_range("acosh", x, 1.0, f64::INFINITY)?;
    Ok(acosh(x))
}

/// atanh 在 ±1 為極點，區間外無實數值
pub fn try_atanh(x: f64) -> DomainResult {
    reject_nan("atanh", x)?;
    if abs(x) == 1.0 {
        return Err(DomainError::Pole { function: "atanh", x });
    }
    require_range("atanh", x, -1.0, 1.0)?;
    Ok(atanh(x))
}

pub fn try_tan(x: f64) -> DomainResult {
    reject_nan("tan", x)?;
    if abs(cos(x)) < POLE_THRESHOLD {
        return Err(DomainError::Pole { function: "tan", x });
    }
    Ok(tan(x))
}

pub fn try_power(base: f64, exponent: f64) -> DomainResult {
    reject_nan("power", base)?;
    reject_nan("power", exponent)?;
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::Pole { function: "power", x: base });
    }
    if base < 0.0 && exponent != 0.0 && !is_whole(exponent) {
        return Err(DomainError::ComplexPower { base, exponent });
    }
    Ok(power(base, exponent))
}

/// 非正整數為 Γ 的極點
pub fn try_gamma(x: f64) -> DomainResult {
    reject_nan("gamma", x)?;
    if x <= 0.0 && is_whole(x) {
        return Err(DomainError::Pole { function: "gamma", x });
    }
    Ok(gamma(x))
}

pub fn try_zeta(s: f64, terms: usize) -> DomainResult {
    reject_nan("zeta", s)?;
    if s <= 1.0 {
        return Err(DomainError::DivergentSeries { s });
    }
    Ok(zeta(s, terms))
}
