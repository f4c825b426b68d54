use thiserror::Error;

/// 嚴格版本（`checked::strict`）在輸入超出定義域時回傳的錯誤。
///
/// 預設函數仍回傳哨兵值；此型別只是把「已計算」與「定義域違規」分開。
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("{function} is undefined for non-positive argument {x}")]
    NonPositiveArgument { function: &'static str, x: f64 },

    #[error("{function} requires an argument in [{lower}, {upper}], got {x}")]
    OutOfRange { function: &'static str, x: f64, lower: f64, upper: f64 },

    #[error("{function} has a pole at {x}")]
    Pole { function: &'static str, x: f64 },

    #[error("power is not real for negative base {base} with fractional exponent {exponent}")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("zeta series diverges for s = {s}")]
    DivergentSeries { s: f64 },

    #[error("{function} received NaN")]
    NotANumber { function: &'static str },
}
