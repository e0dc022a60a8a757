//! Property-based tests for the toy curve group law and signatures

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toyecc_algorithms::ec::toy::{CurveParams, CurvePoint};
use toyecc_sign::{brute_force_private_key, ToyEcdsa};
use toyecc_tests::MULTIPLES_OF_G;

/// Any element of the group generated by G, including the identity
fn group_element() -> impl Strategy<Value = CurvePoint> {
    (0usize..19).prop_map(|k| match MULTIPLES_OF_G[k] {
        None => CurvePoint::Infinity,
        Some((x, y)) => CurvePoint::affine(x, y),
    })
}

proptest! {
    #[test]
    fn scalar_mult_matches_table(k in 0u64..1000) {
        let params = CurveParams::toy();
        let expected = match MULTIPLES_OF_G[(k % 19) as usize] {
            None => CurvePoint::Infinity,
            Some((x, y)) => CurvePoint::affine(x, y),
        };
        prop_assert_eq!(params.scalar_mult_base_g(k).unwrap(), expected);
    }

    #[test]
    fn addition_is_associative(p in group_element(), q in group_element(), r in group_element()) {
        let params = CurveParams::toy();
        let left = params.add(params.add(p, q).unwrap(), r).unwrap();
        let right = params.add(p, params.add(q, r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn addition_has_inverses(p in group_element()) {
        let params = CurveParams::toy();
        let neg = params.negate(p).unwrap();
        prop_assert_eq!(params.add(p, neg).unwrap(), CurvePoint::Infinity);
    }

    #[test]
    fn scalar_mult_is_linear(j in 0u64..200, k in 0u64..200, p in group_element()) {
        let params = CurveParams::toy();
        let lhs = params.scalar_mult(j + k, p).unwrap();
        let rhs = params
            .add(params.scalar_mult(j, p).unwrap(), params.scalar_mult(k, p).unwrap())
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn sign_verify_roundtrip(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..64)) {
        let scheme = ToyEcdsa::toy();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = scheme.generate_keys(&mut rng).unwrap();
        let sig = scheme.sign(&message, keypair.secret_key(), &mut rng).unwrap();
        prop_assert!(scheme.verify(&message, &sig, keypair.public_key()));
    }

    #[test]
    fn brute_force_finds_unique_key(seed in any::<u64>()) {
        let scheme = ToyEcdsa::toy();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keypair = scheme.generate_keys(&mut rng).unwrap();

        let params = scheme.params();
        let matches = (1..params.n())
            .filter(|&d| params.scalar_mult_base_g(d).unwrap() == keypair.public_key().point())
            .count();
        prop_assert_eq!(matches, 1);

        let recovered = brute_force_private_key(params, keypair.public_key());
        prop_assert_eq!(recovered.as_ref(), Some(keypair.secret_key()));
    }
}
