//! `P-224`, a.k.a. `secp224r1`.

use core::marker::PhantomData;

use digest::Digest;
use sha2::Sha256;

use crate::error::Result;
use crate::params::Params;

const P: &str = "26959946667150639794667015087019630673557916260026308143510066298881";
const A: &str = "26959946667150639794667015087019630673557916260026308143510066298878";
const B: &str = "18958286285566608000408668544493926415504680968679321075787234672564";
const GX: &str = "19277929113566293071110308034699488026831934219452440156649784352033";
const GY: &str = "19926808758034470970197974370888749184205991990603949537637343198772";
const N: &str = "26959946667150639794667015087019625940457807714424391721682722368061";

/// `P-224` domain parameters, generic over the hash used for `H(m)`.
pub fn p224<D: Digest>(_hash: PhantomData<D>) -> Result<Params<D>> {
    super::build(P, A, B, GX, GY, N)
}

/// `P-224` domain parameters with SHA-256, its FIPS 186-4-recommended hash.
pub fn p224_sha256() -> Result<Params<Sha256>> {
    p224(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_params() {
        assert!(p224_sha256().is_ok());
    }
}
