//! secp256k1 curve binding
//!
//! Fixes the generic field and curve machinery to the Koblitz curve
//! y² = x³ + 7 over F_p with:
//! - p = 2²⁵⁶ − 2³² − 977
//! - n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Callers of this module work with plain integers; the prime and the
//! `(a, b) = (0, 7)` coefficients are supplied here. Scalar coefficients
//! are reduced modulo the subgroup order `n` before multiplication,
//! since `k·P = (k mod n)·P` for any point in the subgroup generated
//! by G.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::{CurveCoefficients, CurvePoint};
use crate::error::Result;
use crate::field::FieldElement;

mod constants;


use constants::{CURVE_B, FIELD_PRIME, GENERATOR_X, GENERATOR_Y, GROUP_ORDER};

/// The field prime p = 2²⁵⁶ − 2³² − 977.
pub fn field_prime() -> BigUint {
    BigUint::from_bytes_be(&FIELD_PRIME)
}

/// The order n of the subgroup generated by the base point G.
pub fn group_order() -> BigUint {
    BigUint::from_bytes_be(&GROUP_ORDER)
}

/// An element of the secp256k1 base field.
pub fn field_element(num: BigUint) -> Result<FieldElement> {
    FieldElement::new(num, field_prime())
}

/// The curve coefficients (a, b) = (0, 7).
pub fn curve() -> CurveCoefficients<FieldElement> {
    CurveCoefficients::new(
        FieldElement::zero(field_prime()),
        FieldElement::new(BigUint::from(CURVE_B), field_prime())
            .expect("b = 7 is below the field prime"),
    )
}

/// A point on secp256k1, validated against the curve equation.
pub fn point(x: BigUint, y: BigUint) -> Result<CurvePoint<FieldElement>> {
    CurvePoint::new(field_element(x)?, field_element(y)?, curve())
}

/// The point at infinity of secp256k1.
pub fn infinity() -> CurvePoint<FieldElement> {
    CurvePoint::infinity(curve())
}

/// The standard base point G.
///
/// Validated against the curve equation once, at first use; subsequent
/// calls clone the cached point.
pub fn generator() -> CurvePoint<FieldElement> {
    static GENERATOR: OnceLock<CurvePoint<FieldElement>> = OnceLock::new();
    GENERATOR
        .get_or_init(|| {
            point(
                BigUint::from_bytes_be(&GENERATOR_X),
                BigUint::from_bytes_be(&GENERATOR_Y),
            )
            .expect("standard base point must be valid")
        })
        .clone()
}

/// Scalar multiplication `k·P`, reducing `k` modulo the subgroup order.
pub fn scalar_mult(k: &BigUint, p: &CurvePoint<FieldElement>) -> Result<CurvePoint<FieldElement>> {
    p.scalar_mul(&(k % group_order()))
}

/// Scalar multiplication with the base point: `k·G`.
pub fn scalar_mult_base_g(k: &BigUint) -> Result<CurvePoint<FieldElement>> {
    scalar_mult(k, &generator())
}
