use num_bigint::{BigInt, BigUint};

use super::*;

#[test]
fn test_out_of_range_display() {
    let err = Error::OutOfRange {
        num: BigUint::from(13u32),
        prime: BigUint::from(13u32),
    };
    assert_eq!(err.to_string(), "num 13 outside field range [0, 13)");
}

#[test]
fn test_field_mismatch_display() {
    let err = Error::FieldMismatch {
        left: BigUint::from(13u32),
        right: BigUint::from(17u32),
    };
    assert_eq!(
        err.to_string(),
        "cannot operate across fields (prime 13 vs prime 17)"
    );
}

#[test]
fn test_not_on_curve_display() {
    let err = Error::NotOnCurve {
        x: "2".to_string(),
        y: "4".to_string(),
    };
    assert_eq!(err.to_string(), "(2, 4) is not on the curve");
}

#[test]
fn test_inexact_quotient_display() {
    let err = Error::InexactQuotient {
        dividend: BigInt::from(4),
        divisor: BigInt::from(3),
    };
    assert_eq!(err.to_string(), "4 is not an integer multiple of 3");
}

#[test]
fn test_validate_same_field() {
    let p = BigUint::from(13u32);
    let q = BigUint::from(17u32);
    assert!(validate::same_field(&p, &p).is_ok());
    assert_eq!(
        validate::same_field(&p, &q),
        Err(Error::FieldMismatch {
            left: p.clone(),
            right: q.clone(),
        })
    );
}

#[test]
fn test_validate_nonzero_divisor() {
    assert!(validate::nonzero_divisor(&BigUint::from(5u32)).is_ok());
    assert_eq!(
        validate::nonzero_divisor(&BigUint::from(0u32)),
        Err(Error::DivisionByZero)
    );
}
