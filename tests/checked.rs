//! 定義域內，嚴格版本與回傳哨兵值的預設版本結果一致

use numcore::checked::domainerror::DomainError;
use numcore::checked::strict::{
    try_acos,
    try_acosh,
    try_gamma,
    try_ln,
    try_log10,
    try_log2,
    try_power,
    try_sqrt,
    try_zeta
};
use numcore::elementary::exponential::power;
use numcore::elementary::inverse::{
    acos,
    acosh,
    sqrt
};
use numcore::elementary::logarithm::{
    ln,
    log10,
    log2
};
use numcore::special::gamma::gamma;
use numcore::special::zeta::zeta;

#[test]
fn test_success_values_are_identical() {
    for x in [0.001, 0.5, 1.0, 2.0, 37.5, 1e9] {
        assert_eq!(try_ln(x).unwrap(), ln(x));
        assert_eq!(try_log10(x).unwrap(), log10(x));
        assert_eq!(try_log2(x).unwrap(), log2(x));
        assert_eq!(try_sqrt(x).unwrap(), sqrt(x));
        assert_eq!(try_acosh(1.0 + x).unwrap(), acosh(1.0 + x));
        assert_eq!(try_gamma(x).unwrap(), gamma(x));
        assert_eq!(try_power(x, 1.5).unwrap(), power(x, 1.5));
    }
    assert_eq!(try_acos(-0.25).unwrap(), acos(-0.25));
    assert_eq!(try_zeta(3.0, 50).unwrap(), zeta(3.0, 50));
}

#[test]
fn test_defaults_keep_sentinels_where_strict_fails() {
    assert!(try_ln(-4.0).is_err());
    assert_eq!(ln(-4.0), -1e308);

    assert!(try_sqrt(-4.0).is_err());
    assert_eq!(sqrt(-4.0), 0.0);

    assert!(try_acosh(0.0).is_err());
    assert_eq!(acosh(0.0), 0.0);

    assert!(try_zeta(0.5, 10).is_err());
    assert_eq!(zeta(0.5, 10), 0.0);
}

#[test]
fn test_error_display() {
    let error = try_gamma(0.0).unwrap_err();
    assert_eq!(error, DomainError::Pole { function: "gamma", x: 0.0 });
    assert_eq!(error.to_string(), "gamma has a pole at 0");

    let error = try_power(-1.0, 0.5).unwrap_err();
    assert_eq!(
        error.to_string(),
        "power is not real for negative base -1 with fractional exponent 0.5"
    );
}
