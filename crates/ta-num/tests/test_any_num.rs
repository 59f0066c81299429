//! Family homogeneity at the dynamic boundary.

use std::cmp::Ordering;

use ta_num::{AnyNum, BinaryOp, DecimalNum, DecimalNumFactory, DoubleNum, Error, Num, NumFactory};

fn decimal(v: i64) -> AnyNum {
    AnyNum::from(DecimalNum::from(v))
}

fn double(v: f64) -> AnyNum {
    AnyNum::from(DoubleNum::of(v))
}

#[test]
#[should_panic(expected = "representation mismatch in `plus`: DecimalNum and DoubleNum")]
fn different_families_cannot_be_added() {
    let _ = decimal(12).plus(&double(12.0));
}

#[test]
#[should_panic(expected = "representation mismatch in `is_equal`")]
fn different_families_cannot_be_compared() {
    decimal(12).is_equal(&double(13.0));
}

#[test]
#[should_panic(expected = "representation mismatch")]
fn operators_check_families_too() {
    let _ = double(1.0) * decimal(1);
}

#[test]
fn every_binary_op_reports_mismatch() {
    let ops = [
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::MultipliedBy,
        BinaryOp::DividedBy,
        BinaryOp::Remainder,
        BinaryOp::PowNum,
        BinaryOp::Min,
        BinaryOp::Max,
    ];
    for op in ops {
        match double(2.0).try_apply(op, &decimal(2)) {
            Err(Error::RepresentationMismatch { op: name, left, right }) => {
                assert_eq!(name, op.name());
                assert_eq!((left, right), ("DoubleNum", "DecimalNum"));
            }
            other => panic!("{op:?} gave {other:?}"),
        }
    }
}

#[test]
fn same_family_results() {
    assert_eq!(decimal(7).try_apply(BinaryOp::Remainder, &decimal(4)).unwrap(), decimal(3));
    assert_eq!(double(2.0).try_apply(BinaryOp::PowNum, &double(10.0)).unwrap(), double(1024.0));
    assert_eq!(decimal(3).try_compare_to(&decimal(4)), Ok(Ordering::Less));
    assert!(decimal(1).try_apply(BinaryOp::DividedBy, &decimal(0)).unwrap().is_nan());
}

#[test]
fn decimal_and_double_three_are_not_equal() {
    assert_ne!(decimal(3), double(3.0));
    assert_eq!(decimal(3).partial_cmp(&double(3.0)), None);
}

#[test]
fn conversion_is_explicit() {
    let third = DecimalNumFactory::with_precision(40).num_of(1).divided_by(&DecimalNum::from(3));
    let as_double = AnyNum::from(third).to_double_num();
    assert!(as_double.is_equal(&DoubleNum::of(1.0 / 3.0)));
    let back = AnyNum::from(as_double).to_decimal_num(32);
    assert_eq!(back.to_string(), "0.3333333333333333");
    assert_eq!(AnyNum::from(back).family(), "DecimalNum");
    assert!(AnyNum::from(DoubleNum::of(f64::INFINITY)).to_decimal_num(32).is_nan());
}

#[test]
fn generic_code_runs_on_any_family() {
    fn mean<N: Num>(values: &[N]) -> N {
        let first = &values[0];
        let sum = values.iter().skip(1).fold(first.clone(), |acc, v| acc.plus(v));
        sum.divided_by(&first.num_of(values.len()))
    }

    let doubles: Vec<_> = [1.0, 2.0, 4.0].into_iter().map(double).collect();
    let decimals: Vec<_> = [1, 2, 4].into_iter().map(decimal).collect();
    assert!(mean(&doubles).is_equal(&double(7.0 / 3.0)));
    assert_eq!(mean(&decimals).to_string(), "2.3333333333333333333333333333333");
}
