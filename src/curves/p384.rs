//! `P-384`, a.k.a. `secp384r1`.

use core::marker::PhantomData;

use digest::Digest;
use sha2::Sha384;

use crate::error::Result;
use crate::params::Params;

const P: &str = "39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319";
const A: &str = "39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112316";
const B: &str = "27580193559959705877849011840389048093056905856361568521428707301988689241309860865136260764883745107765439761230575";
const GX: &str = "26247035095799689268623156744566981891852923491109213387815615900925518854738050089022388053975719786650872476732087";
const GY: &str = "8325710961489029985546751289520108179287853048861315594709205902480503199884419224438643760392947333078086511627871";
const N: &str = "39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956334363542643";

/// `P-384` domain parameters, generic over the hash used for `H(m)`.
pub fn p384<D: Digest>(_hash: PhantomData<D>) -> Result<Params<D>> {
    super::build(P, A, B, GX, GY, N)
}

/// `P-384` domain parameters with SHA-384, its FIPS 186-4-recommended hash.
pub fn p384_sha384() -> Result<Params<Sha384>> {
    p384(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_params() {
        assert!(p384_sha384().is_ok());
    }
}
