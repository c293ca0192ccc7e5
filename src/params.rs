//! ECDSA domain parameters (L2): `(curve, G, n, H)`.

use core::fmt;
use core::marker::PhantomData;

use digest::Digest;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::arith;
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::point::Point;

/// Bundles a curve, a generator `G`, its prime order `n`, and a hash
/// function `H`, validated together at construction.
///
/// `D` is carried as a zero-sized type parameter, the same way `dsa`'s
/// `SigningKey`/`VerifyingKey` and RustCrypto's `ecdsa` crate are generic
/// over the digest used to hash messages.
pub struct Params<D> {
    pub(crate) curve: Curve,
    pub(crate) g: Point,
    pub(crate) n: BigUint,
    _hash: PhantomData<D>,
}

impl<D> Clone for Params<D> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve.clone(),
            g: self.g.clone(),
            n: self.n.clone(),
            _hash: PhantomData,
        }
    }
}

impl<D> PartialEq for Params<D> {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.g == other.g && self.n == other.n
    }
}

impl<D: Digest> Params<D> {
    /// Validate and bundle `(curve, g, n)` with hash function `D`.
    ///
    /// Validates, in order: `g` is not infinity
    /// ([`Error::GeneratorInfinite`]), `g` lies on `curve`
    /// ([`Error::GeneratorOffCurve`]), `n` is prime
    /// ([`Error::OrderNotPrime`]), and `[n]G = Infinity`
    /// ([`Error::BadGeneratorOrder`]).
    pub fn new<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
        curve: Curve,
        g: Point,
        n: BigUint,
    ) -> Result<Self> {
        if g.is_infinity() {
            return Err(Error::GeneratorInfinite);
        }
        if g.curve() != &curve {
            return Err(Error::GeneratorOffCurve);
        }
        if !g.is_on_curve() {
            return Err(Error::GeneratorOffCurve);
        }
        if !arith::is_prime(rng, &n, 64) {
            return Err(Error::OrderNotPrime);
        }
        if !g.mul_scalar(&n).is_infinity() {
            return Err(Error::BadGeneratorOrder);
        }

        Ok(Self {
            curve,
            g,
            n,
            _hash: PhantomData,
        })
    }

    /// Construct parameters without re-validating them.
    ///
    /// Intended for the named-curve constructors in [`crate::curves`],
    /// whose constants are fixed FIPS 186-4 literals.
    pub(crate) fn from_validated(curve: Curve, g: Point, n: BigUint) -> Self {
        Self {
            curve,
            g,
            n,
            _hash: PhantomData,
        }
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The generator point `G`.
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The generator's prime order `n`.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Generate a fresh `(public, private)` keypair: sample
    /// `k <- random_integer_unbias(n)`, set `d = k`, `Q = [k]G`.
    pub fn generate_keypair<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (PublicKey<D>, PrivateKey<D>) {
        let k = arith::random_integer_unbias(rng, &self.n);
        let q = self.g.mul_scalar(&k);

        let public = PublicKey::new(self.clone(), q).expect("[k]G is never infinite for 0 < k < n");
        let private =
            PrivateKey::from_public_key(public.clone(), k).expect("k is in (0, n) by construction");

        (public, private)
    }
}

impl<D> fmt::Debug for Params<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("curve", &self.curve)
            .field("g", &self.g)
            .field("n", &self.n)
            .finish()
    }
}
