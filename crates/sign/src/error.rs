//! Error types for the signature crate

use thiserror::Error;
use toyecc_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material is out of range or belongs to another curve
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Signature bytes could not be encoded or decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Curve arithmetic or scalar sampling failed
    #[error("Curve arithmetic error: {0}")]
    Algorithm(#[from] AlgoError),
}

// Convert to api::Error
impl From<Error> for toyecc_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey(msg) => toyecc_api::Error::InvalidKey {
                context: "sign",
                message: msg,
            },
            Error::Encoding(msg) => toyecc_api::Error::SerializationError {
                context: "encoding",
                message: msg,
            },
            Error::Algorithm(e) => e.into(),
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
