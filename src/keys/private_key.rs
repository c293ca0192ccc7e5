//!
//! The ECDSA private key container.
//!

use core::fmt;

use digest::Digest;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::public_key::hash_to_int;
use crate::arith;
use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::params::Params;
use crate::signature::Signature;

/// An ECDSA private key: a scalar `d` with `0 < d < n`, paired with the
/// public key it derives.
#[derive(Clone)]
pub struct PrivateKey<D> {
    public_key: PublicKey<D>,
    d: Zeroizing<BigUint>,
}

impl<D> fmt::Debug for PrivateKey<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").field("public_key", &self.public_key).finish_non_exhaustive()
    }
}

impl<D: Digest> PrivateKey<D> {
    /// Construct a private key from domain parameters and the private
    /// scalar `d`, deriving the public key `Q = [d]G` itself.
    ///
    /// This is the constructor named in the public API surface
    /// (`PrivateKey::new(params, d)`). Fails with
    /// [`Error::InvalidPrivateKey`] if `d` is not in `(0, n)`.
    pub fn new(params: Params<D>, d: BigUint) -> Result<Self> {
        let n = params.order();
        if d.is_zero() || &d >= n {
            return Err(Error::InvalidPrivateKey);
        }

        let q = params.generator().mul_scalar(&d);
        let public_key = PublicKey::new(params, q)?;
        Self::from_public_key(public_key, d)
    }

    /// Construct a private key from an already-built public key and the
    /// private scalar `d` it was derived from.
    ///
    /// Intended for call sites (such as
    /// [`Params::generate_keypair`](crate::params::Params::generate_keypair))
    /// that have already computed `Q` and would otherwise redo the scalar
    /// multiplication. Fails with [`Error::InvalidPrivateKey`] if `d` is
    /// not in `(0, n)`.
    pub fn from_public_key(public_key: PublicKey<D>, d: BigUint) -> Result<Self> {
        let n = public_key.params().order();
        if d.is_zero() || &d >= n {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self {
            public_key,
            d: Zeroizing::new(d),
        })
    }

    /// The derived public key.
    pub fn public_key(&self) -> &PublicKey<D> {
        &self.public_key
    }

    /// The private scalar `d`.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Sign `message`, drawing a fresh nonce `k` each retry.
    ///
    /// Equivalent to [`PrivateKey::sign_with_nonce`] with no caller-chosen
    /// nonce: a degenerate `(r, s)` (either component zero) is silently
    /// discarded and resigned with a freshly drawn `k`.
    pub fn sign<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R, message: &[u8]) -> Signature {
        loop {
            let k = arith::random_integer_unbias(rng, self.n());
            if let Ok(sig) = self.try_sign_with_nonce(message, &k) {
                return sig;
            }
        }
    }

    /// Sign `message` with a caller-supplied nonce `k`.
    ///
    /// Unlike [`PrivateKey::sign`], this is single-shot: a degenerate
    /// `(r, s)` fails with [`Error::DegenerateSignature`] rather than
    /// being retried with the same (now known-bad) `k`.
    pub fn sign_with_nonce(&self, message: &[u8], k: &BigUint) -> Result<Signature> {
        self.try_sign_with_nonce(message, k).map_err(|_| Error::DegenerateSignature)
    }

    fn n(&self) -> &BigUint {
        self.public_key.params().order()
    }

    /// Shared core of [`PrivateKey::sign`] and
    /// [`PrivateKey::sign_with_nonce`]: returns `Err(())` on a degenerate
    /// `(r, s)`, leaving the caller to decide whether to retry or fail.
    fn try_sign_with_nonce(&self, message: &[u8], k: &BigUint) -> core::result::Result<Signature, ()> {
        let n = self.n();
        let g = self.public_key.params().generator();

        let r_point = g.mul_scalar(k);
        let r = r_point.x().expect("scalar mult of a non-infinity generator by a nonzero k yields an affine point") % n;
        if r.is_zero() {
            return Err(());
        }

        let k_inv = arith::inv_mod(k, n).map_err(|_| ())?;
        let e = hash_to_int::<D>(message);
        let e_plus_dr = arith::add_mod(&(&e % n), &arith::mul_mod(&self.d, &r, n), n);
        let s = arith::mul_mod(&k_inv, &e_plus_dr, n);
        if s.is_zero() {
            return Err(());
        }

        Ok(Signature::new(r, s))
    }
}

impl<D> PartialEq for PrivateKey<D> {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key && *self.d == *other.d
    }
}
