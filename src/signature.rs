//! ECDSA signature record
//!
//! A signature is carried as its two components `(r, s)`. This crate
//! performs no signing or verification; the record exists so that a
//! signing layer built on the arithmetic here has an agreed shape to
//! produce and consume. No validation or wire encoding is defined.

use std::fmt;

use num_bigint::BigUint;

/// ECDSA signature components (r, s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The r component
    pub r: BigUint,
    /// The s component
    pub s: BigUint,
}

impl Signature {
    /// Bundle the two components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:x}, {:x})", self.r, self.s)
    }
}
