//! ECDSA signature implementations
//!
//! The toy curve variant signs with a fresh random ephemeral key per
//! signature and hashes messages with SHA-256 reduced mod n.

pub mod common;
pub mod toy;

// Re-export toy curve types
pub use toy::{
    EcdsaToy, KeyPair, PublicKey, SecretKey, Signature, ToyEcdsa, SIGN_RETRY_WARN_THRESHOLD,
};
