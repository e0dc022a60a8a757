//! Curve arithmetic for the toyecc library
//!
//! This crate provides the elliptic-curve group law and scalar
//! multiplication that the signature crate builds on. All operations are
//! pure functions of their inputs and an explicit [`ec::CurveParams`]
//! value, so they can be called from any thread without synchronization.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::{CurveParams, CurvePoint};
