//! Digital Signature Schemes
//!
//! This crate implements ECDSA-style signing and verification over the
//! toyecc demonstration curve, together with the exhaustive key search
//! that shows why such a small group offers no security.

#![forbid(unsafe_code)]

pub mod attack;
pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    EcdsaToy, KeyPair, PublicKey, SecretKey, Signature, ToyEcdsa, SIGN_RETRY_WARN_THRESHOLD,
};

// Re-exports from the key-recovery attack
pub use attack::{brute_force_private_key, brute_force_with_stats, BruteForceReport};
