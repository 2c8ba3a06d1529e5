//! Prime-field arithmetic over a caller-chosen modulus
//!
//! A [`FieldElement`] is an integer residue together with the prime it is
//! reduced by. Unlike a fixed-modulus implementation, the prime is a
//! runtime value, so the same type serves both toy fields (worked
//! examples over F₁₃ or F₂₂₃) and the 256-bit secp256k1 field. Elements
//! of different fields never mix: every binary operation checks the
//! primes and fails with [`Error::FieldMismatch`] on disagreement.
//!
//! Division and inversion use Fermat's little theorem (`b⁻¹ = b^(p−2)`),
//! which is valid because the modulus is prime and the zero element is
//! rejected up front.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{validate, Error, Result};

#[cfg(test)]
mod tests;

/// An element of the prime field F_p, stored as a canonical residue
///
/// Invariant: `num < prime`. Enforced at construction and preserved by
/// every operation; values are immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Create a field element, validating that `num` lies in `[0, prime)`.
    pub fn new(num: BigUint, prime: BigUint) -> Result<Self> {
        if num >= prime {
            return Err(Error::OutOfRange { num, prime });
        }
        Ok(FieldElement { num, prime })
    }

    /// Convenience constructor from machine integers.
    pub fn from_u64(num: u64, prime: u64) -> Result<Self> {
        Self::new(BigUint::from(num), BigUint::from(prime))
    }

    /// The additive identity of F_p.
    pub fn zero(prime: BigUint) -> Self {
        FieldElement {
            num: BigUint::zero(),
            prime,
        }
    }

    /// The multiplicative identity of F_p.
    pub fn one(prime: BigUint) -> Self {
        FieldElement {
            num: BigUint::from(1u32),
            prime,
        }
    }

    /// The residue of this element.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// The field prime.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Check if this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Field addition: `(self + other) mod p`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate::same_field(&self.prime, &other.prime)?;
        let num = (&self.num + &other.num) % &self.prime;
        Ok(FieldElement {
            num,
            prime: self.prime.clone(),
        })
    }

    /// Field subtraction: `(self - other) mod p`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate::same_field(&self.prime, &other.prime)?;
        // other.num < p, so adding p first keeps the difference non-negative
        let num = (&self.num + &self.prime - &other.num) % &self.prime;
        Ok(FieldElement {
            num,
            prime: self.prime.clone(),
        })
    }

    /// Field multiplication: `(self · other) mod p`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::same_field(&self.prime, &other.prime)?;
        let num = (&self.num * &other.num) % &self.prime;
        Ok(FieldElement {
            num,
            prime: self.prime.clone(),
        })
    }

    /// Field exponentiation: `self^exponent mod p`.
    ///
    /// The exponent is a plain signed integer, not a field element. A
    /// negative exponent is first reduced modulo `p − 1` into `[0, p−1)`
    /// (the multiplicative group has order `p − 1`, so `a^e = a^(e mod p−1)`
    /// for `a ≠ 0`), then the result is computed by non-negative modular
    /// exponentiation.
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let reduced: BigUint = match exponent.sign() {
            Sign::Minus => {
                let group_order = &self.prime - 1u32;
                let m = exponent.magnitude() % &group_order;
                if m.is_zero() {
                    m
                } else {
                    group_order - m
                }
            }
            _ => exponent.magnitude().clone(),
        };
        FieldElement {
            num: self.num.modpow(&reduced, &self.prime),
            prime: self.prime.clone(),
        }
    }

    /// Multiplicative inverse by Fermat's little theorem: `self^(p−2)`.
    ///
    /// Fails with [`Error::DivisionByZero`] on the zero element.
    pub fn invert(&self) -> Result<Self> {
        validate::nonzero_divisor(&self.num)?;
        let num = self.num.modpow(&(&self.prime - 2u32), &self.prime);
        Ok(FieldElement {
            num,
            prime: self.prime.clone(),
        })
    }

    /// Field division: `self · other⁻¹ mod p`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        validate::same_field(&self.prime, &other.prime)?;
        self.mul(&other.invert()?)
    }

    /// Multiply by a small non-negative machine constant.
    pub fn mul_small(&self, k: u32) -> Self {
        FieldElement {
            num: (&self.num * k) % &self.prime,
            prime: self.prime.clone(),
        }
    }

    /// Additive inverse: `(p − self) mod p`.
    pub fn negate(&self) -> Self {
        FieldElement {
            num: (&self.prime - &self.num) % &self.prime,
            prime: self.prime.clone(),
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.num, self.prime)
    }
}
