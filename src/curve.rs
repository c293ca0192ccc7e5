//! Short-Weierstrass curve parameters (L1).

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::point::Point;

/// `y^2 = x^3 + ax + b (mod p)`.
///
/// Immutable once constructed; two curves compare equal iff all three
/// parameters match.
#[derive(Clone, PartialEq, Eq)]
pub struct Curve {
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) p: BigUint,
}

impl Curve {
    /// Construct a curve from `(a, b, p)`.
    ///
    /// Fails with [`Error::CurveSingular`] if
    /// `-16(4a^3 + 27b^2) ≡ 0 (mod p)`.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Result<Self> {
        let a = a % &p;
        let b = b % &p;
        let curve = Self { a, b, p };

        if curve.is_singular() {
            return Err(Error::CurveSingular);
        }

        Ok(curve)
    }

    fn is_singular(&self) -> bool {
        self.discriminant().is_zero()
    }

    fn discriminant(&self) -> BigUint {
        let four_a3 = crate::arith::mul_mod(
            &crate::arith::mul_mod(&BigUint::from(4u8), &self.a, &self.p),
            &crate::arith::mul_mod(&self.a, &self.a, &self.p),
            &self.p,
        );
        let twenty_seven_b2 = crate::arith::mul_mod(
            &BigUint::from(27u8),
            &crate::arith::mul_mod(&self.b, &self.b, &self.p),
            &self.p,
        );
        let sum = crate::arith::add_mod(&four_a3, &twenty_seven_b2, &self.p);
        // -16 * sum (mod p)
        let sixteen_sum = crate::arith::mul_mod(&BigUint::from(16u8), &sum, &self.p);
        crate::arith::neg_mod(&sixteen_sum, &self.p)
    }

    /// The prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Construct the affine point `(x, y)` on this curve.
    ///
    /// Coordinates are reduced modulo `p`. Fails with
    /// [`Error::PointNotOnCurve`] if the curve equation does not hold.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        Point::affine(self.clone(), x, y)
    }

    /// The point at infinity on this curve.
    pub fn infinity(&self) -> Point {
        Point::infinity(self.clone())
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y^2 = X^3 + {}X + {} [mod {}]", self.a, self.b, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_singular_curve() {
        // y^2 = x^3 (a=0, b=0) is singular for any p.
        let err = Curve::new(BigUint::zero(), BigUint::zero(), BigUint::from(97u32)).unwrap_err();
        assert_eq!(err, Error::CurveSingular);
    }

    #[test]
    fn accepts_toy_curve() {
        // y^2 = x^3 + 2x + 3 (mod 97), used throughout the test suite.
        let curve = Curve::new(BigUint::from(2u32), BigUint::from(3u32), BigUint::from(97u32));
        assert!(curve.is_ok());
    }

    #[test]
    fn equality_requires_all_three_parameters() {
        let c1 = Curve::new(BigUint::from(2u32), BigUint::from(3u32), BigUint::from(97u32)).unwrap();
        let c2 = Curve::new(BigUint::from(2u32), BigUint::from(3u32), BigUint::from(97u32)).unwrap();
        let c3 = Curve::new(BigUint::from(2u32), BigUint::from(4u32), BigUint::from(97u32)).unwrap();
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }
}
