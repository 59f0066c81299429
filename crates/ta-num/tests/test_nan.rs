//! NaN contagion across every family.

use ta_num::{is_nan_or_none, is_valid, AnyNum, DecimalNum, DoubleNum, Error, NaN, Num};

fn assert_absorbing<N: Num>(value: N, nan: N) {
    assert!(nan.plus(&value).is_nan());
    assert!(value.plus(&nan).is_nan());
    assert!(nan.minus(&value).is_nan());
    assert!(nan.divided_by(&nan).is_nan());
    assert!(value.divided_by(&nan).is_nan());
    assert!(nan.multiplied_by(&nan).is_nan());
    assert!(value.times(&nan).is_nan());
    assert!(nan.max(&value).is_nan());
    assert!(value.min(&nan).is_nan());
    assert!(value.max(&nan).is_nan());
    assert!(nan.pow(12).is_nan());
    assert!(nan.pow_num(&nan).is_nan());
    assert!(value.pow_num(&nan).is_nan());
    assert!(nan.sqrt().is_nan());
    assert!(nan.log().is_nan());
    assert!(nan.abs().is_nan());
    assert!(nan.zero().is_nan());
    assert!(nan.num_of(7).is_nan());

    assert!(!nan.is_greater_than(&value));
    assert!(!value.is_greater_than(&nan));
    assert!(!value.is_less_than_or_equal(&nan));
    assert!(!nan.is_zero() && !nan.is_positive() && !nan.is_negative());
    assert!(!nan.is_positive_or_zero() && !nan.is_negative_or_zero());
    assert!(nan.is_equal(&nan));
    assert!(!value.is_equal(&nan));
    assert_eq!(value.compare_to(&nan), std::cmp::Ordering::Equal);

    assert!(nan.double_value().is_nan());
    assert!(nan.float_value().is_nan());
    assert_eq!(nan.try_int_value(), Err(Error::NoIntegralRepresentation));
    assert_eq!(nan.try_long_value(), Err(Error::NoIntegralRepresentation));
    assert_eq!(nan.to_string(), "NaN");
}

#[test]
fn double_family() {
    assert_absorbing(DoubleNum::of(11.0), DoubleNum::from(NaN));
}

#[test]
fn decimal_family() {
    assert_absorbing(DecimalNum::from(11), DecimalNum::from(NaN));
}

#[test]
fn dynamic_family() {
    assert_absorbing(AnyNum::from(DecimalNum::from(11)), AnyNum::from(NaN));
}

#[test]
fn sentinel_itself() {
    assert!(NaN.plus(&NaN).is_nan());
    assert!(NaN.pow(3).is_nan());
    assert!(NaN.max(&NaN).is_nan());
    assert!(NaN.is_equal(&NaN));
    assert!(!NaN.is_greater_than_or_equal(&NaN));
    assert_eq!(NaN.try_int_value(), Err(Error::NoIntegralRepresentation));
}

#[test]
fn nan_compares_equal_to_sentinel() {
    let x = DoubleNum::of(1.0).divided_by(&DoubleNum::ZERO);
    assert_eq!(x, NaN);
    assert_eq!(x, DoubleNum::NaN);
}

#[test]
#[should_panic(expected = "no integral representation of NaN")]
fn int_value_panics() {
    DecimalNum::NaN.int_value();
}

#[test]
#[should_panic(expected = "no integral representation of NaN")]
fn long_value_panics() {
    DoubleNum::NaN.long_value();
}

#[test]
fn nan_or_none_helpers() {
    let one = DoubleNum::ONE;
    let nan = DoubleNum::NaN;
    assert!(is_nan_or_none::<DoubleNum>(None));
    assert!(is_nan_or_none(Some(&nan)));
    assert!(!is_nan_or_none(Some(&one)));
    assert!(is_valid(Some(&one)));
    assert!(!is_valid(Some(&nan)));
    assert!(!is_valid::<DecimalNum>(None));
}

#[test]
#[should_panic(expected = "invalid numeric literal")]
fn nan_float_is_not_a_literal() {
    DecimalNum::from(1).num_of(f64::NAN);
}
