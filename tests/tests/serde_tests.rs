//! Serialization of public values behind the `serde` feature

use toyecc_algorithms::ec::toy::CurvePoint;
use toyecc_sign::{PublicKey, Signature, ToyEcdsa};
use toyecc_tests::ScriptedRng;

#[test]
fn test_signature_json_roundtrip() {
    let sig = Signature::new(13, 3);
    let json = serde_json::to_string(&sig).unwrap();
    assert_eq!(json, r#"{"r":13,"s":3}"#);
    assert_eq!(serde_json::from_str::<Signature>(&json).unwrap(), sig);
}

#[test]
fn test_point_json_roundtrip() {
    for point in [CurvePoint::Infinity, CurvePoint::affine(6, 3)] {
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(serde_json::from_str::<CurvePoint>(&json).unwrap(), point);
    }
}

#[test]
fn test_public_key_json_roundtrip() {
    let scheme = ToyEcdsa::toy();
    let keypair = scheme.generate_keys(&mut ScriptedRng::new(&[2])).unwrap();
    let json = serde_json::to_string(keypair.public_key()).unwrap();
    assert_eq!(
        serde_json::from_str::<PublicKey>(&json).unwrap(),
        *keypair.public_key()
    );
}
