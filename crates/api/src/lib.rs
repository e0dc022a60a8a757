//! Public API traits and types for the toyecc library
//!
//! This crate provides the public API surface shared by every toyecc crate:
//! the top-level error type and the trait that signature schemes implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::signature;
