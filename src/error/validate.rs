//! Validation utilities for field and curve operations

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Error, Result};

/// Validate that two field elements share a prime
#[inline(always)]
pub fn same_field(left: &BigUint, right: &BigUint) -> Result<()> {
    if left != right {
        return Err(Error::FieldMismatch {
            left: left.clone(),
            right: right.clone(),
        });
    }
    Ok(())
}

/// Validate that a divisor residue is non-zero
#[inline(always)]
pub fn nonzero_divisor(num: &BigUint) -> Result<()> {
    if num.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(())
}

/// Validate that two points lie on the same curve
#[inline(always)]
pub fn same_curve(matching: bool, operation: &'static str) -> Result<()> {
    if !matching {
        return Err(Error::CurveMismatch { operation });
    }
    Ok(())
}
