//! Exhaustive private-key recovery
//!
//! With a group of order n the private key is one of n − 1 candidates.
//! Trying each d and comparing d·G with the public key recovers it in at
//! most n − 1 scalar multiplications, which is instant for n = 19 and
//! infeasible for a 256-bit group.

use toyecc_algorithms::ec::toy::CurveParams;

use crate::traditional::ecdsa::{PublicKey, SecretKey};

/// Outcome of a brute-force scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceReport {
    /// The private key whose multiple of G equals the public key, if any
    pub recovered: Option<SecretKey>,
    /// Number of candidates d that were multiplied out
    pub candidates_tried: u64,
}

/// Scan d = 1, 2, …, n − 1 and return the first d with d·G = Q
pub fn brute_force_private_key(params: &CurveParams, public_key: &PublicKey) -> Option<SecretKey> {
    brute_force_with_stats(params, public_key).recovered
}

/// Same scan as [`brute_force_private_key`], also counting candidates
pub fn brute_force_with_stats(params: &CurveParams, public_key: &PublicKey) -> BruteForceReport {
    let target = public_key.point();
    let mut candidates_tried = 0;

    for d in 1..params.n() {
        candidates_tried += 1;
        if params.scalar_mult_base_g(d).ok() == Some(target) {
            return BruteForceReport {
                recovered: SecretKey::new(params, d).ok(),
                candidates_tried,
            };
        }
    }

    BruteForceReport {
        recovered: None,
        candidates_tried,
    }
}

#[cfg(test)]
mod tests;
