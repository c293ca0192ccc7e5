//! `P-256`, a.k.a. `secp256r1`/`prime256v1`.

use core::marker::PhantomData;

use digest::Digest;
use sha2::Sha256;

use crate::error::Result;
use crate::params::Params;

const P: &str = "115792089210356248762697446949407573530086143415290314195533631308867097853951";
const A: &str = "115792089210356248762697446949407573530086143415290314195533631308867097853948";
const B: &str = "41058363725152142129326129780047268409114441015993725554835256314039467401291";
const GX: &str = "48439561293906451759052585252797914202762949526041747995844080717082404635286";
const GY: &str = "36134250956749795798585127919587881956611106672985015071877198253568414405109";
const N: &str = "115792089210356248762697446949407573529996955224135760342422259061068512044369";

/// `P-256` domain parameters, generic over the hash used for `H(m)`.
pub fn p256<D: Digest>(_hash: PhantomData<D>) -> Result<Params<D>> {
    super::build(P, A, B, GX, GY, N)
}

/// `P-256` domain parameters with SHA-256, its FIPS 186-4-recommended hash.
pub fn p256_sha256() -> Result<Params<Sha256>> {
    p256(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_params() {
        assert!(p256_sha256().is_ok());
    }
}
