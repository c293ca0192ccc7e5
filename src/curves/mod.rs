//! FIPS 186-4 named curves (L2): `P-192`, `P-224`, `P-256`, `P-384`, `P-521`.
//!
//! Each submodule exposes a generic constructor, parameterized over the
//! hash used to derive `e = H(m)`, plus `_sha256`/`_sha384`/`_sha512`
//! convenience wrappers bound to the hash FIPS 186-4 recommends for that
//! curve's security level.

mod p192;
mod p224;
mod p256;
mod p384;
mod p521;

pub use p192::{p192, p192_sha256};
pub use p224::{p224, p224_sha256};
pub use p256::{p256, p256_sha256};
pub use p384::{p384, p384_sha384};
pub use p521::{p521, p521_sha512};

use digest::Digest;
use num_bigint::BigUint;
use num_traits::Num;

use crate::curve::Curve;
use crate::error::Result;
use crate::params::Params;

/// Build validated [`Params`] from decimal-string FIPS 186-4 literals.
///
/// Uses [`Params::from_validated`] rather than [`Params::new`]: these
/// constants are fixed at compile time and the underlying curve was
/// constructed successfully long before this crate existed, so re-running
/// primality testing and `[n]G = Infinity` on every call would be pure
/// overhead.
fn build<D: Digest>(p: &str, a: &str, b: &str, gx: &str, gy: &str, n: &str) -> Result<Params<D>> {
    let p = parse_dec(p);
    let a = parse_dec(a);
    let b = parse_dec(b);
    let gx = parse_dec(gx);
    let gy = parse_dec(gy);
    let n = parse_dec(n);

    let curve = Curve::new(a, b, p)?;
    let g = curve.point(gx, gy)?;
    Ok(Params::from_validated(curve, g, n))
}

fn parse_dec(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 10).expect("FIPS 186-4 curve literal is valid decimal")
}
