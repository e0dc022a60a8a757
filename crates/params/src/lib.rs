//! Constant values for the toyecc library
//!
//! Kept in a dependency-free crate so every layer reads the same numbers.

#![no_std]

pub mod traditional;
