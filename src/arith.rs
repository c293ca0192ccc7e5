//! Modular arithmetic primitives (L0).
//!
//! Everything the curve and signature layers need from big-integer math
//! lives here: extended GCD, modular inverse, Miller-Rabin primality, and
//! unbiased random sampling from a CSPRNG.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Extended Euclidean algorithm.
///
/// Returns `(g, u, v)` with `g = gcd(a, b)` and `u*a + v*b = g`.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let new_r = &old_r - &q * &r;
        old_r = r;
        r = new_r;

        let new_s = &old_s - &q * &s;
        old_s = s;
        s = new_s;

        let new_t = &old_t - &q * &t;
        old_t = t;
        t = new_t;
    }

    (old_r, old_s, old_t)
}

/// Modular inverse of `a` mod `n`, via [`xgcd`].
///
/// Fails with [`Error::NotInvertible`] if `gcd(a, n) != 1`.
pub fn inv_mod(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    let a_signed = BigInt::from(a.clone());
    let n_signed = BigInt::from(n.clone());

    let (g, u, _v) = xgcd(&a_signed, &n_signed);
    if g.abs() != BigInt::one() {
        return Err(Error::NotInvertible);
    }

    let u = u.mod_floor(&n_signed);
    Ok(u.to_biguint().expect("mod_floor result is non-negative"))
}

/// `(a + b) mod m`
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, always returning a value in `[0, m)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = BigInt::from(a.clone());
    let b = BigInt::from(b.clone());
    let m_signed = BigInt::from(m.clone());
    (a - b).mod_floor(&m_signed).to_biguint().expect("mod_floor result is non-negative")
}

/// `(-a) mod m`
pub fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        m - a
    }
}

/// `(a * b) mod m`
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Read `num_bytes` cryptographically strong random bytes and interpret
/// them as a big-endian non-negative integer.
pub fn random_integer<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, num_bytes: usize) -> BigUint {
    assert!(num_bytes > 0, "random_integer: num_bytes must be positive");
    let mut buf = vec![0u8; num_bytes];
    rng.fill_bytes(&mut buf);
    BigUint::from_bytes_be(&buf)
}

/// Return an integer uniformly distributed in `[1, n-1]`, without bias.
///
/// Samples `bitlen(n)/8 + 1` bytes and resamples while the draw exceeds
/// `n - 2`; the rejection loop terminates with probability 1 and an
/// expected iteration count under 2.
pub fn random_integer_unbias<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, n: &BigUint) -> BigUint {
    assert!(*n > BigUint::one(), "random_integer_unbias: n must be > 1");
    let num_bytes = (n.bits() / 8) as usize + 1;
    let upper_bound = n - BigUint::from(2u8);

    loop {
        let r = random_integer(rng, num_bytes);
        if r <= upper_bound {
            return r + BigUint::one();
        }
    }
}

/// The small primes trial-divided before Miller-Rabin proper.
const SMALL_PRIMES: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Miller-Rabin probabilistic primality test.
///
/// Returns `false` for `n < 2`. Trial-divides against [`SMALL_PRIMES`] first,
/// then performs `k` random-base rounds. The false-positive rate is bounded
/// by `4^-k`.
pub fn is_prime<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, n: &BigUint, k: u32) -> bool {
    if *n < BigUint::from(2u8) {
        return false;
    }

    for &p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // Factor n - 1 = 2^s * d with d odd.
    let one = BigUint::one();
    let n_minus_one = n - &one;
    let mut s: u32 = 0;
    let mut d = n_minus_one.clone();
    while (&d % 2u8).is_zero() {
        d >>= 1usize;
        s += 1;
    }

    let two = BigUint::from(2u8);
    'rounds: for _ in 0..k {
        let a = random_integer_unbias_range(rng, &two, &n_minus_one);
        let mut x = a.modpow(&d, n);

        if x == one || x == n_minus_one {
            continue 'rounds;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'rounds;
            }
            if x == one {
                return false;
            }
        }

        return false;
    }

    true
}

/// Sample uniformly in `[lo, hi]` (inclusive), used for Miller-Rabin bases.
fn random_integer_unbias_range<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    lo: &BigUint,
    hi: &BigUint,
) -> BigUint {
    let span = hi - lo;
    if span.is_zero() {
        return lo.clone();
    }
    // random_integer_unbias returns a value in [1, span], which we shift
    // into [lo, lo + span] = [lo, hi].
    lo + (random_integer_unbias(rng, &(&span + &BigUint::one())) - BigUint::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::from_seed([7u8; 32])
    }

    #[test]
    fn xgcd_bezout_identity() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, u, v) = xgcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&u * &a + &v * &b, g);
    }

    #[test]
    fn inv_mod_round_trip() {
        let n = BigUint::from(97u32);
        let a = BigUint::from(13u32);
        let inv = inv_mod(&a, &n).unwrap();
        assert_eq!((&a * &inv) % &n, BigUint::one());
    }

    #[test]
    fn inv_mod_rejects_non_coprime() {
        let n = BigUint::from(9u32);
        let a = BigUint::from(6u32);
        assert_eq!(inv_mod(&a, &n), Err(Error::NotInvertible));
    }

    #[test]
    fn is_prime_known_primes() {
        let mut r = rng();
        for p in [2u32, 3, 5, 29] {
            assert!(is_prime(&mut r, &BigUint::from(p), 64));
        }
        // 2^52 + 1 = 4503599627370497 is prime.
        assert!(is_prime(&mut r, &BigUint::from(4_503_599_627_370_497u64), 64));
    }

    #[test]
    fn is_prime_rejects_composites() {
        let mut r = rng();
        assert!(!is_prime(&mut r, &BigUint::from(0u32), 64));
        assert!(!is_prime(&mut r, &BigUint::from(1u32), 64));
        assert!(!is_prime(&mut r, &BigUint::from(4u32), 64));
        // product of two primes
        assert!(!is_prime(&mut r, &BigUint::from(101u32 * 103u32), 64));
        // even and > 2
        assert!(!is_prime(&mut r, &BigUint::from(100_000u32), 64));
    }

    #[test]
    fn random_integer_unbias_is_in_range() {
        let mut r = rng();
        let n = BigUint::from(1000u32);
        for _ in 0..1000 {
            let v = random_integer_unbias(&mut r, &n);
            assert!(v >= BigUint::one());
            assert!(v < n);
        }
    }
}
