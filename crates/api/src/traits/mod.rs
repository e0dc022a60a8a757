//! Traits implemented by toyecc schemes

pub mod signature;

pub use signature::Signature;
