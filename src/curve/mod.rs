//! Short Weierstrass curve points and the chord-and-tangent group law
//!
//! The point type here is generic over its coordinate arithmetic: any
//! type implementing [`Coordinate`] can serve as the x/y (and curve
//! coefficient) type. Two implementations ship with the crate: plain
//! arbitrary-precision integers for small worked examples, and
//! [`FieldElement`] for curves over prime fields.
//!
//! Curve membership (`y² = x³ + a·x + b`) is checked exactly once, at
//! construction. Every later point is produced by the group-law
//! formulas, which map curve points to curve points; their results are
//! trusted and never re-validated.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::{validate, Error, Result};
use crate::field::FieldElement;


/// Arithmetic a coordinate type must supply to the group law
///
/// Operations are fallible so that coordinate-level failures (mixed
/// prime fields, non-integral integer quotients) propagate out of the
/// point formulas instead of being papered over.
pub trait Coordinate: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Coordinate addition.
    fn add(&self, other: &Self) -> Result<Self>;

    /// Coordinate subtraction.
    fn sub(&self, other: &Self) -> Result<Self>;

    /// Coordinate multiplication.
    fn mul(&self, other: &Self) -> Result<Self>;

    /// Coordinate division, as defined by the coordinate type
    /// (finite-field division for field elements, exact division for
    /// plain integers).
    fn div(&self, other: &Self) -> Result<Self>;

    /// Multiplication by a small constant, for the `3x²`, `2y`, `2x`
    /// terms of the tangent formula.
    fn mul_u32(&self, k: u32) -> Result<Self>;

    /// Coordinate squaring.
    fn square(&self) -> Result<Self> {
        self.mul(self)
    }

    /// Check for the additive identity.
    fn is_zero(&self) -> bool;
}

impl Coordinate for BigInt {
    fn add(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        Ok(self - other)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    fn div(&self, other: &Self) -> Result<Self> {
        if Zero::is_zero(other) {
            return Err(Error::DivisionByZero);
        }
        if !Zero::is_zero(&(self % other)) {
            return Err(Error::InexactQuotient {
                dividend: self.clone(),
                divisor: other.clone(),
            });
        }
        Ok(self / other)
    }

    fn mul_u32(&self, k: u32) -> Result<Self> {
        Ok(self * k)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl Coordinate for FieldElement {
    fn add(&self, other: &Self) -> Result<Self> {
        FieldElement::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        FieldElement::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        FieldElement::mul(self, other)
    }

    fn div(&self, other: &Self) -> Result<Self> {
        FieldElement::div(self, other)
    }

    fn mul_u32(&self, k: u32) -> Result<Self> {
        Ok(FieldElement::mul_small(self, k))
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

/// The `(a, b)` coefficients of a curve `y² = x³ + a·x + b`
///
/// Curve identity is structural equality of the coefficients; points
/// interoperate only when their coefficients match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveCoefficients<C> {
    /// Coefficient of the linear term
    pub a: C,
    /// Constant term
    pub b: C,
}

impl<C: Coordinate> CurveCoefficients<C> {
    /// Bundle the two coefficients.
    pub fn new(a: C, b: C) -> Self {
        CurveCoefficients { a, b }
    }

    /// Evaluate the curve equation at `(x, y)`.
    pub fn contains(&self, x: &C, y: &C) -> Result<bool> {
        let lhs = y.square()?;
        let rhs = x.square()?.mul(x)?.add(&self.a.mul(x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

/// Position of a point: a finite coordinate pair or the identity
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointCoordinates<C> {
    /// The point at infinity, identity of the group
    Infinity,
    /// A finite point
    Finite {
        /// x-coordinate
        x: C,
        /// y-coordinate
        y: C,
    },
}

/// A point on a short Weierstrass curve, or the point at infinity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurvePoint<C> {
    curve: CurveCoefficients<C>,
    coords: PointCoordinates<C>,
}

impl<C: Coordinate> CurvePoint<C> {
    /// Create a finite point, validating curve membership.
    ///
    /// This is the only membership check in the crate; group-law results
    /// are produced by formulas that preserve membership and are not
    /// re-validated.
    pub fn new(x: C, y: C, curve: CurveCoefficients<C>) -> Result<Self> {
        if !curve.contains(&x, &y)? {
            return Err(Error::NotOnCurve {
                x: x.to_string(),
                y: y.to_string(),
            });
        }
        Ok(CurvePoint {
            curve,
            coords: PointCoordinates::Finite { x, y },
        })
    }

    /// The point at infinity of the given curve.
    pub fn infinity(curve: CurveCoefficients<C>) -> Self {
        CurvePoint {
            curve,
            coords: PointCoordinates::Infinity,
        }
    }

    /// Check if this is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, PointCoordinates::Infinity)
    }

    /// The point's coordinates.
    pub fn coordinates(&self) -> &PointCoordinates<C> {
        &self.coords
    }

    /// The curve this point lives on.
    pub fn curve(&self) -> &CurveCoefficients<C> {
        &self.curve
    }

    /// Add two points under the chord-and-tangent group law.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate::same_curve(self.curve == other.curve, "point addition")?;

        let (x1, y1) = match &self.coords {
            // Self is the identity
            PointCoordinates::Infinity => return Ok(other.clone()),
            PointCoordinates::Finite { x, y } => (x, y),
        };
        let (x2, y2) = match &other.coords {
            // Other is the identity
            PointCoordinates::Infinity => return Ok(self.clone()),
            PointCoordinates::Finite { x, y } => (x, y),
        };

        // Additive inverses: same x, opposite y
        if x1 == x2 && y1 != y2 {
            return Ok(Self::infinity(self.curve.clone()));
        }

        if x1 != x2 {
            // Chord through two distinct points
            let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
            let x3 = slope.square()?.sub(x1)?.sub(x2)?;
            let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
            return Ok(CurvePoint {
                curve: self.curve.clone(),
                coords: PointCoordinates::Finite { x: x3, y: y3 },
            });
        }

        // Same point with a vertical tangent
        if y1.is_zero() {
            return Ok(Self::infinity(self.curve.clone()));
        }

        // Doubling: tangent slope (3·x² + a) / (2·y)
        let slope = x1
            .square()?
            .mul_u32(3)?
            .add(&self.curve.a)?
            .div(&y1.mul_u32(2)?)?;
        let x3 = slope.square()?.sub(&x1.mul_u32(2)?)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(CurvePoint {
            curve: self.curve.clone(),
            coords: PointCoordinates::Finite { x: x3, y: y3 },
        })
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Scalar multiplication `k·P` by double-and-add.
    ///
    /// Walks the scalar from its least significant bit, adding the
    /// running power of two of `P` wherever a bit is set; `O(log k)`
    /// group operations.
    pub fn scalar_mul(&self, k: &BigUint) -> Result<Self> {
        let mut k = k.clone();
        let mut result = Self::infinity(self.curve.clone());
        let mut current = self.clone();
        while !k.is_zero() {
            if !(&k % 2u8).is_zero() {
                result = result.add(&current)?;
            }
            current = current.add(&current)?;
            k >>= 1u32;
        }
        Ok(result)
    }
}

impl<C: Coordinate> fmt::Display for CurvePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            PointCoordinates::Infinity => write!(f, "Point(infinity)"),
            PointCoordinates::Finite { x, y } => write!(f, "Point({}, {})", x, y),
        }
    }
}
