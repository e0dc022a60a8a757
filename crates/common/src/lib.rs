//! Common implementations and shared functionality for the toyecc library
//!
//! This crate provides the modular arithmetic used by both the curve
//! arithmetic and the signature protocol. Every helper works on `u64`
//! operands and widens internally, so no intermediate product overflows.

#![forbid(unsafe_code)]

pub mod math_common;

pub use math_common::{gcd, is_prime, mod_add, mod_exp, mod_inv, mod_mul, mod_neg, mod_sub};
