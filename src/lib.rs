//! # toyecc
//!
//! Elliptic-curve signatures over a deliberately tiny prime field, for
//! teaching. The curve is y² = x³ + 2x + b over 𝔽₁₇ with generator
//! G = (5, 1) of order 19, so every key can be found by hand.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! toyecc = "0.1"
//! ```
//!
//! ```
//! use toyecc::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let scheme = ToyEcdsa::toy();
//! let keypair = scheme.generate_keys(&mut OsRng)?;
//! let sig = scheme.sign(b"Send 1 BTC to Alice", keypair.secret_key(), &mut OsRng)?;
//! assert!(scheme.verify(b"Send 1 BTC to Alice", &sig, keypair.public_key()));
//!
//! let recovered = brute_force_private_key(scheme.params(), keypair.public_key());
//! assert_eq!(recovered.as_ref(), Some(keypair.secret_key()));
//! # Ok::<(), toyecc::sign::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for points, public keys and signatures
//! - `trace`: report slow signing loops on stderr
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`toyecc-api`]: Error type and the `Signature` trait
//! - [`toyecc-params`]: Curve constants
//! - [`toyecc-common`]: Modular arithmetic helpers
//! - [`toyecc-algorithms`]: Curve group law and scalars
//! - [`toyecc-sign`]: Signatures and key recovery

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use toyecc_algorithms as algorithms;
pub use toyecc_api as api;
pub use toyecc_common as common;
pub use toyecc_params as params;
pub use toyecc_sign as sign;

pub use toyecc_algorithms::ec::toy::{point_add, scalar_mult, scalar_mult_base_g};
pub use toyecc_sign::brute_force_private_key;

/// Common imports for toyecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::signature::{SignatureBytes, SignatureDerive};
    pub use crate::api::Signature;

    // Curve arithmetic
    pub use crate::algorithms::ec::toy::{CurveParams, CurvePoint, Scalar};

    // Signatures and key recovery
    pub use crate::sign::{
        brute_force_private_key, brute_force_with_stats, BruteForceReport, EcdsaToy, KeyPair,
        PublicKey, SecretKey, ToyEcdsa,
    };
}
