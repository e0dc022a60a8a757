//! Integration tests for toy ECDSA through the facade crate

use rand::rngs::OsRng;
use toyecc::prelude::*;
use toyecc::sign::Signature as ToySignature;
use toyecc_params::traditional::ecdsa::TOY_DEMO_MESSAGE;
use toyecc_tests::{FailingRng, ScriptedRng};

#[test]
fn test_demo_flow_with_known_keys() {
    let scheme = ToyEcdsa::toy();
    let message = TOY_DEMO_MESSAGE.as_bytes();

    // d = 2, then k = 8
    let mut rng = ScriptedRng::new(&[2, 8]);
    let keypair = scheme.generate_keys(&mut rng).unwrap();
    assert_eq!(keypair.secret_key().value(), 2);
    assert_eq!(keypair.public_key().point(), CurvePoint::affine(6, 3));

    let signature = scheme.sign(message, keypair.secret_key(), &mut rng).unwrap();
    assert_eq!(signature, ToySignature::new(13, 3));
    assert!(scheme.verify(message, &signature, keypair.public_key()));
    assert_eq!(rng.consumed(), 2);

    let report = brute_force_with_stats(scheme.params(), keypair.public_key());
    assert_eq!(report.candidates_tried, 2);
    let recovered = report.recovered.unwrap();
    assert_eq!(&recovered, keypair.secret_key());

    let forged = scheme.sign(message, &recovered, &mut OsRng).unwrap();
    assert!(scheme.verify(message, &forged, keypair.public_key()));
}

#[test]
fn test_ecdsa_toy_signature() {
    let mut rng = OsRng;

    let keypair = EcdsaToy::keypair(&mut rng).unwrap();
    let public_key = EcdsaToy::public_key(&keypair);
    let secret_key = EcdsaToy::secret_key(&keypair);

    let message = b"Test message for toy ECDSA";
    let signature = EcdsaToy::sign(message, &secret_key).unwrap();
    assert!(EcdsaToy::verify(message, &signature, &public_key).is_ok());

    let der = signature.to_bytes();
    let parsed = <ToySignature as SignatureBytes>::from_bytes(&der).unwrap();
    assert!(EcdsaToy::verify(message, &parsed, &public_key).is_ok());
}

#[test]
fn test_rng_failure_surfaces_as_api_error() {
    let err = EcdsaToy::keypair(&mut FailingRng).unwrap_err();
    assert!(matches!(err, Error::RandomGenerationError { .. }));
}

#[test]
fn test_free_functions() {
    let params = CurveParams::toy();
    let g = params.generator();

    assert_eq!(
        toyecc::point_add(&params, g, g).unwrap(),
        CurvePoint::affine(6, 3)
    );
    assert_eq!(
        toyecc::scalar_mult(&params, 19, g).unwrap(),
        CurvePoint::Infinity
    );

    let d = Scalar::new(&params, 8).unwrap();
    let q = toyecc::scalar_mult_base_g(&params, &d).unwrap();
    let public = PublicKey::from_point(&params, q).unwrap();
    let recovered = toyecc::brute_force_private_key(&params, &public).unwrap();
    assert_eq!(recovered.value(), 8);
}

#[test]
fn test_signatures_are_malleable() {
    // (r, s) and (r, n − s) both verify
    let scheme = ToyEcdsa::toy();
    let keypair = scheme.generate_keys(&mut ScriptedRng::new(&[2])).unwrap();
    let message = TOY_DEMO_MESSAGE.as_bytes();

    assert!(scheme.verify(message, &ToySignature::new(13, 3), keypair.public_key()));
    assert!(scheme.verify(message, &ToySignature::new(13, 16), keypair.public_key()));
}
