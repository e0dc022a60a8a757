use super::*;
use crate::traditional::ecdsa::ToyEcdsa;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toyecc_algorithms::ec::toy::CurvePoint;

#[test]
fn test_recovers_every_private_key() {
    let scheme = ToyEcdsa::toy();
    let params = *scheme.params();

    for d in 1..params.n() {
        let secret = SecretKey::new(&params, d).unwrap();
        let public = scheme.derive_public_key(&secret).unwrap();

        let report = brute_force_with_stats(&params, &public);
        assert_eq!(report.recovered.as_ref().map(SecretKey::value), Some(d));
        assert_eq!(report.candidates_tried, d);
    }
}

#[test]
fn test_recovered_key_signs_for_original_public_key() {
    let scheme = ToyEcdsa::toy();
    let mut rng = ChaCha20Rng::seed_from_u64(19);
    let message = b"Send 1 BTC to Alice";

    for _ in 0..20 {
        let keypair = scheme.generate_keys(&mut rng).unwrap();
        let recovered = brute_force_private_key(scheme.params(), keypair.public_key()).unwrap();
        assert_eq!(&recovered, keypair.secret_key());

        let sig = scheme.sign(message, &recovered, &mut rng).unwrap();
        assert!(scheme.verify(message, &sig, keypair.public_key()));
    }
}

#[test]
fn test_known_public_key() {
    let params = CurveParams::toy();
    let public = PublicKey::from_point(&params, CurvePoint::affine(6, 3)).unwrap();
    let recovered = brute_force_private_key(&params, &public).unwrap();
    assert_eq!(recovered.value(), 2);
}

#[test]
fn test_point_outside_the_group_is_not_found() {
    // (5, 2) is not a multiple of G
    let params = CurveParams::toy();
    let public = PublicKey::from_point(&params, CurvePoint::affine(5, 2)).unwrap();

    let report = brute_force_with_stats(&params, &public);
    assert!(report.recovered.is_none());
    assert_eq!(report.candidates_tried, 18);
}
