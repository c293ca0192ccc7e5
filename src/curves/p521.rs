//! `P-521`, a.k.a. `secp521r1`.

use core::marker::PhantomData;

use digest::Digest;
use sha2::Sha512;

use crate::error::Result;
use crate::params::Params;

const P: &str = "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151";
const A: &str = "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057148";
const B: &str = "1093849038073734274511112390766805569936207598951683748994586394495953116150735016013708737573759623248592132296706313309438452531591012912142327488478985984";
const GX: &str = "2661740802050217063228768716723360960729859168756973147706671368418802944996427808491545080627771902352094241225065558662157113545570916814161637315895999846";
const GY: &str = "3757180025770020463545507224491183603594455134769762486694567779615544477440556316691234405012945539562144444537289428522585666729196580810124344277578376784";
const N: &str = "6864797660130609714981900799081393217269435300143305409394463459185543183397655394245057746333217197532963996371363321113864768612440380340372808892707005449";

/// `P-521` domain parameters, generic over the hash used for `H(m)`.
pub fn p521<D: Digest>(_hash: PhantomData<D>) -> Result<Params<D>> {
    super::build(P, A, B, GX, GY, N)
}

/// `P-521` domain parameters with SHA-512, its FIPS 186-4-recommended hash.
pub fn p521_sha512() -> Result<Params<Sha512>> {
    p521(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_params() {
        assert!(p521_sha512().is_ok());
    }
}
