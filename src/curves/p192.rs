//! `P-192`, a.k.a. `secp192r1`.

use core::marker::PhantomData;

use digest::Digest;
use sha2::Sha256;

use crate::error::Result;
use crate::params::Params;

const P: &str = "6277101735386680763835789423207666416083908700390324961279";
const A: &str = "6277101735386680763835789423207666416083908700390324961276";
const B: &str = "2455155546008943817740293915197451784769108058161191238065";
const GX: &str = "602046282375688656758213480587526111916698976636884684818";
const GY: &str = "174050332293622031404857552280219410364023488927386650641";
const N: &str = "6277101735386680763835789423176059013767194773182842284081";

/// `P-192` domain parameters, generic over the hash used for `H(m)`.
pub fn p192<D: Digest>(_hash: PhantomData<D>) -> Result<Params<D>> {
    super::build(P, A, B, GX, GY, N)
}

/// `P-192` domain parameters with SHA-256, its FIPS 186-4-recommended hash.
pub fn p192_sha256() -> Result<Params<Sha256>> {
    p192(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_params() {
        assert!(p192_sha256().is_ok());
    }
}
