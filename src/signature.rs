//! The `(r, s)` signature pair.

use core::fmt;

use num_bigint::BigUint;

/// An ECDSA signature: the pair `(r, s)` produced by
/// [`PrivateKey::sign`](crate::PrivateKey::sign).
///
/// Carries no curve or hash tag of its own — interpreting a [`Signature`]
/// requires the [`Params`](crate::Params) it was produced under, the same
/// way `dsa::Signature` is just the bare `(r, s)` pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Bundle `r` and `s` with no range checking of their own; range
    /// checks happen against a particular `n` at verification time.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature").field("r", &self.r).field("s", &self.s).finish()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r={}, s={})", self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let sig = Signature::new(BigUint::from(3u32), BigUint::from(7u32));
        assert_eq!(*sig.r(), BigUint::from(3u32));
        assert_eq!(*sig.s(), BigUint::from(7u32));
    }
}
