//! Traditional signature schemes
//!
//! Elliptic-curve signatures over the toy demonstration curve.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{
    EcdsaToy, KeyPair, PublicKey, SecretKey, Signature, ToyEcdsa, SIGN_RETRY_WARN_THRESHOLD,
};
