//! Pure Rust implementation of the Elliptic Curve Digital Signature
//! Algorithm (ECDSA) over short-Weierstrass curves in prime fields, as
//! specified in FIPS 186-4.
//!
//! The crate is layered the way the underlying math is layered:
//!
//! - [`arith`] — modular arithmetic: extended GCD, modular inverse,
//!   Miller-Rabin primality, unbiased CSPRNG sampling.
//! - [`curve`] and [`point`] — the curve equation and its point group,
//!   with scalar multiplication via a Montgomery ladder.
//! - [`params`] — validated domain parameters `(curve, G, n, H)`.
//! - [`keys`] and [`signature`] — key containers and the sign/verify
//!   algorithms built on top of `params`.
//! - [`curves`] — the five FIPS 186-4 named curves.
//!
//! ```
//! use ecdsa_fp::curves::p256_sha256;
//! use rand::{CryptoRng, RngCore};
//!
//! # fn doctest(rng: &mut (impl RngCore + CryptoRng)) {
//! let params = p256_sha256().expect("P-256 constants are valid");
//! let (public, private) = params.generate_keypair(rng);
//!
//! let signature = private.sign(rng, b"message");
//! assert!(public.verify(b"message", &signature));
//! # }
//! ```

pub mod arith;
pub mod curve;
pub mod curves;
pub mod error;
pub mod keys;
pub mod params;
pub mod point;
pub mod signature;

pub use curve::Curve;
pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
pub use params::Params;
pub use point::Point;
pub use signature::Signature;
