//! Finite-field and elliptic-curve group arithmetic
//!
//! This crate implements the arithmetic kernel underlying ECDSA-style
//! public-key cryptography: modular arithmetic over a caller-chosen prime
//! field, the chord-and-tangent group law on short Weierstrass curves
//! `y² = x³ + a·x + b`, double-and-add scalar multiplication, and the
//! secp256k1 binding of all three.
//!
//! The curve layer is generic over its coordinate type: the same group-law
//! code runs over plain integers (useful for small worked examples) and
//! over [`FieldElement`] coordinates (the cryptographic case). Curve and
//! field parameters travel inside each value, so operations across
//! mismatched parameters are reported as errors rather than silently
//! computed.
//!
//! Higher layers (signing, hashing, point encoding, key management) are
//! deliberately out of scope; this crate is their pure computational core.
//! None of the arithmetic here is constant-time.
//!
//! # Example
//!
//! ```
//! use ec_arith::secp256k1;
//! use num_bigint::BigUint;
//!
//! let g = secp256k1::generator();
//! let two_g = secp256k1::scalar_mult(&BigUint::from(2u32), &g)?;
//! assert_eq!(two_g, g.add(&g)?);
//! # Ok::<(), ec_arith::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Prime-field arithmetic
pub mod field;
pub use field::FieldElement;

// Generic short Weierstrass group law and scalar multiplication
pub mod curve;
pub use curve::{Coordinate, CurveCoefficients, CurvePoint, PointCoordinates};

// secp256k1 curve binding
pub mod secp256k1;

// ECDSA signature record
pub mod signature;
pub use signature::Signature;
