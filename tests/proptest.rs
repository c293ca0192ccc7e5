//! Property-based tests over the toy curve's full signing group.

use ecdsa_fp::curve::Curve;
use ecdsa_fp::params::Params;
use num_bigint::BigUint;
use proptest::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::Sha256;

fn toy_params() -> Params<Sha256> {
    let curve = Curve::new(BigUint::from(2u32), BigUint::from(3u32), BigUint::from(97u32)).unwrap();
    let g = curve.point(BigUint::from(3u32), BigUint::from(6u32)).unwrap();
    let n = BigUint::from(5u32);
    let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
    Params::new(&mut rng, curve, g, n).unwrap()
}

proptest! {
    #[test]
    fn any_message_signed_by_a_key_verifies_under_that_key(seed in any::<[u8; 32]>(), msg in any::<Vec<u8>>()) {
        let params = toy_params();
        let mut rng = ChaCha8Rng::from_seed(seed);
        let (public, private) = params.generate_keypair(&mut rng);

        let sig = private.sign(&mut rng, &msg);
        prop_assert!(public.verify(&msg, &sig));
    }

    #[test]
    fn a_signature_never_verifies_under_an_unrelated_key(
        seed_a in any::<[u8; 32]>(),
        seed_b in any::<[u8; 32]>(),
        msg in any::<Vec<u8>>(),
    ) {
        prop_assume!(seed_a != seed_b);
        let params = toy_params();
        let mut rng_a = ChaCha8Rng::from_seed(seed_a);
        let mut rng_b = ChaCha8Rng::from_seed(seed_b);
        let (_, private_a) = params.generate_keypair(&mut rng_a);
        let (public_b, _) = params.generate_keypair(&mut rng_b);

        let sig = private_a.sign(&mut rng_a, &msg);
        if private_a.public_key() != &public_b {
            prop_assert!(!public_b.verify(&msg, &sig));
        }
    }
}
