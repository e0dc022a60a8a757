// Import math functions from common crate
use toyecc_common::math_common::{gcd, is_prime, mod_exp, mod_inv};

use toyecc_algorithms::ec::toy::CurveParams;
use toyecc_params::traditional::ecdsa::TOY_P17;

#[test]
fn test_modular_exponentiation() {
    assert_eq!(mod_exp(2, 10, 1000), 24); // 2^10 mod 1000 = 1024 mod 1000 = 24
    assert_eq!(mod_exp(3, 4, 10), 1); // 3^4 mod 10 = 81 mod 10 = 1
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, 8), 4);
    assert_eq!(gcd(17, 13), 1);
    assert_eq!(gcd(0, 5), 5);
    assert_eq!(gcd(5, 0), 5);
}

#[test]
fn test_mod_inv() {
    // 3 * 5 ≡ 1 (mod 14)
    assert_eq!(mod_inv(3, 14), Some(5));

    // 7 * 13 ≡ 1 (mod 15)
    assert_eq!(mod_inv(7, 15), Some(13));

    // No inverse exists when gcd(a, m) != 1
    assert_eq!(mod_inv(4, 8), None);
    assert_eq!(mod_inv(0, 17), None);
}

#[test]
fn test_toy_constants_are_consistent() {
    assert!(is_prime(TOY_P17.p));
    assert!(is_prime(TOY_P17.n));

    let params = CurveParams::from_constants(&TOY_P17).unwrap();
    assert!(params.scalar_mult_base_g(TOY_P17.n).unwrap().is_identity());
}
