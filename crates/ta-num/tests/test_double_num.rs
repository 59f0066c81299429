//! Integration tests for the double-backed family.

use approx::assert_abs_diff_eq;
use ta_num::{DoubleNum, DoubleNumFactory, Num, NumFactory};

fn num(v: f64) -> DoubleNum {
    DoubleNum::of(v)
}

// ─── Equality and ordering ───────────────────────────────────────────────────

#[test]
fn equality_is_tolerant_but_ordering_is_exact() {
    let five = num(5.0);
    let nearly = num(5.000001);
    assert!(five.is_equal(&nearly));
    assert_eq!(five, nearly);
    assert!(!five.is_greater_than(&nearly));
    assert!(five.is_less_than(&nearly));
    assert!(!five.is_equal(&num(5.0001)));
}

#[test]
fn ordering_predicates() {
    let f = DoubleNumFactory;
    let five = f.num_of(5);
    let six = f.num_of(6);
    assert!(six.is_greater_than(&five));
    assert!(six.is_greater_than_or_equal(&six));
    assert!(five.is_less_than_or_equal(&five));
    assert!(!six.is_less_than(&five));
    assert_eq!(six.max(&five), six);
    assert_eq!(six.min(&five), five);
}

// ─── Arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn arithmetic() {
    let f = DoubleNumFactory;
    let ten = f.num_of(10);
    let million = f.num_of(1_000_000);
    assert_eq!(million.to_string(), "1000000.0");
    let hundred = ten.times(&ten);
    let hundred_million = hundred.multiplied_by(&million);
    assert_eq!(hundred_million.to_string(), "1.0E8");
    assert_eq!(hundred_million.divided_by(&hundred), million);
    assert!(hundred_million.remainder(&f.num_of(5)).is_zero());

    let zero_dot_two = f.num_of(0.2);
    assert_abs_diff_eq!(zero_dot_two.pow(5).double_value(), 0.00032, epsilon = 1e-15);
    assert_abs_diff_eq!(zero_dot_two.pow_num(&zero_dot_two).double_value(), 0.7247796636776955, epsilon = 1e-15);
    assert_abs_diff_eq!(zero_dot_two.pow_num(&num(-0.2)).double_value(), 1.37972966146, epsilon = 1e-11);
}

#[test]
fn multiplication_is_symmetric() {
    let a = num(0.33);
    let b = num(10.33);
    assert_eq!(a.multiplied_by(&b), b.multiplied_by(&a));
}

#[test]
fn undefined_results_are_nan() {
    assert!(num(1.0).divided_by(&num(0.0)).is_nan());
    assert!(num(1.0).remainder(&num(0.0)).is_nan());
    assert!(num(-1.2).sqrt().is_nan());
    assert!(num(-1.2).sqrt_with_precision(12).is_nan());
    assert!(num(0.0).log().is_nan());
    assert!(num(-0.5).pow_num(&num(0.5)).is_nan());
    let inf = num(f64::INFINITY);
    assert!(inf.minus(&inf).is_nan());
}

#[test]
fn elementary_functions() {
    assert_abs_diff_eq!(num(2.0).sqrt().double_value(), std::f64::consts::SQRT_2);
    assert_abs_diff_eq!(num(2.0).log().double_value(), std::f64::consts::LN_2);
    assert_abs_diff_eq!(num(1.0).exp().double_value(), std::f64::consts::E);
    assert!(num(0.0).sqrt().is_zero());
    assert_eq!(num(-2.5).abs(), num(2.5));
    assert_eq!(num(2.5).negate(), num(-2.5));
    assert_eq!(num(-2.5).floor().double_value(), -3.0);
    assert_eq!(num(-2.5).ceil().double_value(), -2.0);
}

#[test]
fn infinity_is_a_value() {
    let big = num(f64::MAX);
    let overflow = big.multiplied_by(&big);
    assert!(!overflow.is_nan());
    assert!(overflow.is_positive());
    assert_eq!(overflow.sqrt().to_string(), "Infinity");
}

// ─── Conversions ─────────────────────────────────────────────────────────────

#[test]
fn conversions() {
    let x = num(-7.75);
    assert_eq!(x.int_value(), -7);
    assert_eq!(x.long_value(), -7);
    assert_eq!(x.float_value(), -7.75f32);
    assert_eq!(num(1e300).int_value(), i32::MAX);
}

#[test]
fn string_round_trip() {
    let f = DoubleNumFactory;
    for v in [0.1, -1234.5678, 1e-7, 6.02214076e23, 1.0 / 3.0] {
        let x = num(v);
        let back = f.num_of_str(&x.to_string()).unwrap();
        assert_eq!(back.double_value(), v);
    }
    assert!(f.num_of_str("NaN").is_err());
    assert!(f.num_of_str("twelve").is_err());
}

#[test]
fn family_constants() {
    let f = DoubleNumFactory;
    assert_eq!(f.zero(), DoubleNum::ZERO);
    assert_eq!(f.two().double_value(), 2.0);
    assert_eq!(f.three().double_value(), 3.0);
    assert_eq!(num(3.0).hundred(), DoubleNum::HUNDRED);
    assert_eq!(num(3.0).name(), "DoubleNum");
}
