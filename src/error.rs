//! Error types returned by this crate.

use core::fmt;

/// Result alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conditions raised by curve, parameter, key and signature
/// construction.
///
/// [`PublicKey::verify`](crate::PublicKey::verify) never raises any of
/// these for a malformed-but-in-range signature — it returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `4a^3 + 27b^2 ≡ 0 (mod p)`: the curve equation has repeated roots.
    CurveSingular,
    /// `(x, y)` does not satisfy `y^2 = x^3 + ax + b (mod p)`.
    PointNotOnCurve,
    /// A binary point operation was attempted between points of different
    /// curves.
    CurveMismatch,
    /// `gcd(a, n) != 1`; `a` has no inverse mod `n`.
    NotInvertible,
    /// The supplied generator is the point at infinity.
    GeneratorInfinite,
    /// The supplied generator does not lie on the supplied curve.
    GeneratorOffCurve,
    /// The supplied order is not prime.
    OrderNotPrime,
    /// `[n]G != Infinity` for the supplied generator and order.
    BadGeneratorOrder,
    /// A private scalar `d` was outside `(0, n)`.
    InvalidPrivateKey,
    /// A public point `Q` was infinite or off the declared curve.
    InvalidPublicKey,
    /// A caller-supplied nonce produced `r = 0` or `s = 0`. Unlike a
    /// library-drawn nonce, this is not retried.
    DegenerateSignature,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CurveSingular => write!(f, "ecdsa: curve is singular"),
            Error::PointNotOnCurve => write!(f, "ecdsa: point is not on the curve"),
            Error::CurveMismatch => write!(f, "ecdsa: points belong to different curves"),
            Error::NotInvertible => write!(f, "ecdsa: value has no modular inverse"),
            Error::GeneratorInfinite => write!(f, "ecdsa: generator cannot be the point at infinity"),
            Error::GeneratorOffCurve => write!(f, "ecdsa: generator is not on the curve"),
            Error::OrderNotPrime => write!(f, "ecdsa: generator order must be prime"),
            Error::BadGeneratorOrder => write!(f, "ecdsa: [n]G is not the point at infinity"),
            Error::InvalidPrivateKey => write!(f, "ecdsa: private scalar is out of range"),
            Error::InvalidPublicKey => write!(f, "ecdsa: public point is invalid"),
            Error::DegenerateSignature => write!(f, "ecdsa: signature with r=0 or s=0"),
        }
    }
}

impl std::error::Error for Error {}
