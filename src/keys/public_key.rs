//!
//! The ECDSA public key container.
//!

use core::fmt;

use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::point::Point;
use crate::signature::Signature;

/// An ECDSA public key: a point `Q = [d]G` on `params.curve()`, paired
/// with the domain parameters it was generated under.
#[derive(Clone)]
pub struct PublicKey<D> {
    params: Params<D>,
    q: Point,
}

impl<D> fmt::Debug for PublicKey<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey").field("q", &self.q).finish()
    }
}

impl<D> PartialEq for PublicKey<D> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.q == other.q
    }
}

impl<D: Digest> PublicKey<D> {
    /// Construct a public key from `params` and the public point `q`.
    ///
    /// Fails with [`Error::InvalidPublicKey`] if `q` is the point at
    /// infinity or does not lie on `params.curve()`.
    pub fn new(params: Params<D>, q: Point) -> Result<Self> {
        if q.is_infinity() || q.curve() != params.curve() || !q.is_on_curve() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { params, q })
    }

    /// The domain parameters this key was generated under.
    pub fn params(&self) -> &Params<D> {
        &self.params
    }

    /// The public point `Q`.
    pub fn q(&self) -> &Point {
        &self.q
    }

    /// Verify `signature` over `message`.
    ///
    /// 1. `w = s^-1 mod n`; reject (return `false`, not an error) if `s`
    ///    has no inverse.
    /// 2. `e = H(message)`, read big-endian.
    /// 3. `u1 = e*w mod n`, `u2 = r*w mod n`.
    /// 4. `P = [u1]G + [u2]Q`; reject if `P` is infinity.
    /// 5. Accept iff `P.x mod n == r mod n`.
    ///
    /// Never mutates `self` or panics on an in-range, malformed signature.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let n = self.params.order();

        let r = signature.r();
        let s = signature.s();
        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            return false;
        }

        let w = match arith::inv_mod(s, n) {
            Ok(w) => w,
            Err(_) => return false,
        };

        let e = hash_to_int::<D>(message);
        let u1 = arith::mul_mod(&(&e % n), &w, n);
        let u2 = arith::mul_mod(r, &w, n);

        let g = self.params.generator();
        let point = g
            .mul_scalar(&u1)
            .add(&self.q.mul_scalar(&u2))
            .expect("same curve by construction");

        if point.is_infinity() {
            return false;
        }

        (point.x().unwrap() % n) == (r % n)
    }
}

/// `H(message)` as a big-endian integer, not truncated to `bitlen(n)`.
pub(crate) fn hash_to_int<D: Digest>(message: &[u8]) -> BigUint {
    let digest = D::digest(message);
    BigUint::from_bytes_be(&digest)
}
