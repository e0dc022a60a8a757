//! Error handling for toy curve arithmetic

use std::borrow::Cow;
use std::fmt;

use toyecc_api::Error as CoreError;

/// The error type for curve and scalar arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A modular inverse was requested for a value with no inverse
    ///
    /// Only reachable with inputs outside the group law's preconditions,
    /// e.g. two distinct points that share an x-coordinate without being
    /// reflections of each other.
    NotInvertible {
        /// Operation that needed the inverse
        context: &'static str,
        /// Modulus the inverse was taken in
        modulus: u64,
    },

    /// The random number generator failed to produce bytes
    Rng {
        /// Operation that was sampling
        context: &'static str,
        /// Message reported by the generator
        details: String,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a NotInvertible error
    pub fn not_invertible(context: &'static str, modulus: u64) -> Self {
        Error::NotInvertible { context, modulus }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NotInvertible { context, modulus } => {
                write!(
                    f,
                    "{}: value has no inverse modulo {} (it is zero)",
                    context, modulus
                )
            }
            Error::Rng { context, details } => {
                write!(f, "Random generation failed in {}: {}", context, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "toy curve parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NotInvertible { context, modulus } => CoreError::ArithmeticError {
                context,
                message: format!("value has no inverse modulo {}", modulus),
            },
            Error::Rng { context, details } => CoreError::RandomGenerationError {
                context,
                message: details,
            },
            Error::Other(msg) => CoreError::Other {
                context: "toy curve",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
