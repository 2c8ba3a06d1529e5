use num_bigint::{BigInt, BigUint};
use rand::rngs::OsRng;
use rand::Rng;

use super::*;
use crate::error::Error;

fn fe(num: u64, prime: u64) -> FieldElement {
    FieldElement::from_u64(num, prime).unwrap()
}

#[test]
fn test_construction_range() {
    assert!(FieldElement::from_u64(0, 13).is_ok());
    assert!(FieldElement::from_u64(12, 13).is_ok());

    let err = FieldElement::from_u64(13, 13).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRange {
            num: BigUint::from(13u32),
            prime: BigUint::from(13u32),
        }
    );
    assert!(FieldElement::from_u64(100, 13).is_err());
}

#[test]
fn test_addition() {
    // 7 + 12 = 19 ≡ 6 (mod 13)
    assert_eq!(fe(7, 13).add(&fe(12, 13)).unwrap(), fe(6, 13));
    assert_eq!(fe(0, 13).add(&fe(0, 13)).unwrap(), fe(0, 13));
}

#[test]
fn test_subtraction() {
    assert_eq!(fe(6, 19).sub(&fe(13, 19)).unwrap(), fe(12, 19));
    assert_eq!(fe(0, 13).sub(&fe(1, 13)).unwrap(), fe(12, 13));
}

#[test]
fn test_multiplication() {
    assert_eq!(fe(3, 13).mul(&fe(12, 13)).unwrap(), fe(10, 13));
}

#[test]
fn test_division() {
    // 2 / 7 ≡ 3 (mod 19) since 3 · 7 = 21 ≡ 2
    assert_eq!(fe(2, 19).div(&fe(7, 19)).unwrap(), fe(3, 19));
    // 7 / 5 ≡ 9 (mod 19) since 9 · 5 = 45 ≡ 7
    assert_eq!(fe(7, 19).div(&fe(5, 19)).unwrap(), fe(9, 19));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        fe(7, 19).div(&fe(0, 19)).unwrap_err(),
        Error::DivisionByZero
    );
    assert_eq!(fe(0, 19).invert().unwrap_err(), Error::DivisionByZero);
}

#[test]
fn test_cross_field_rejection() {
    let err = fe(7, 13).add(&fe(7, 17)).unwrap_err();
    assert_eq!(
        err,
        Error::FieldMismatch {
            left: BigUint::from(13u32),
            right: BigUint::from(17u32),
        }
    );
    assert!(fe(7, 13).sub(&fe(7, 17)).is_err());
    assert!(fe(7, 13).mul(&fe(7, 17)).is_err());
    assert!(fe(7, 13).div(&fe(7, 17)).is_err());
}

#[test]
fn test_power() {
    // 3^4 = 81 ≡ 3 (mod 13)
    assert_eq!(fe(3, 13).pow(&BigInt::from(4)), fe(3, 13));
    assert_eq!(fe(7, 13).pow(&BigInt::from(0)), fe(1, 13));
}

#[test]
fn test_negative_power() {
    // 7^(−3) is the inverse of 7³ = 343 ≡ 5 (mod 13); 5⁻¹ ≡ 8
    assert_eq!(fe(7, 13).pow(&BigInt::from(-3)), fe(8, 13));
    // −3 ≡ 9 (mod 12), so the reduction must agree with a direct 7⁹
    assert_eq!(fe(7, 13).pow(&BigInt::from(-3)), fe(7, 13).pow(&BigInt::from(9)));
    // Fermat: a^(−1) · a = 1
    let a = fe(9, 223);
    let product = a.pow(&BigInt::from(-1)).mul(&a).unwrap();
    assert_eq!(product, fe(1, 223));
}

#[test]
fn test_fermat_inverse() {
    for num in 1u64..19 {
        let a = fe(num, 19);
        assert_eq!(a.mul(&a.invert().unwrap()).unwrap(), fe(1, 19));
    }
}

#[test]
fn test_negate() {
    assert_eq!(fe(5, 13).negate(), fe(8, 13));
    assert_eq!(fe(0, 13).negate(), fe(0, 13));
    let a = fe(11, 13);
    assert_eq!(a.add(&a.negate()).unwrap(), fe(0, 13));
}

#[test]
fn test_group_laws_sampled() {
    let mut rng = OsRng;
    for _ in 0..50 {
        let a = fe(rng.gen_range(0..223), 223);
        let b = fe(rng.gen_range(0..223), 223);
        let c = fe(rng.gen_range(0..223), 223);

        // Commutativity
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());

        // Associativity
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
        assert_eq!(
            a.mul(&b).unwrap().mul(&c).unwrap(),
            a.mul(&b.mul(&c).unwrap()).unwrap()
        );

        // Identities
        assert_eq!(a.add(&FieldElement::zero(BigUint::from(223u32))).unwrap(), a);
        assert_eq!(a.mul(&FieldElement::one(BigUint::from(223u32))).unwrap(), a);
    }
}

#[test]
fn test_display() {
    assert_eq!(fe(7, 13).to_string(), "7 (mod 13)");
}
