//! Price level error types

use std::fmt;

/// Errors produced by the price-level domain types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLevelError {
    /// A token could not be parsed into the requested enumeration
    UnknownToken {
        /// The token that failed to parse
        token: String,
        /// Name of the type being parsed
        expected: &'static str,
    },
}

impl fmt::Display for PriceLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLevelError::UnknownToken { token, expected } => {
                write!(f, "Unknown {} token: {}", expected, token)
            }
        }
    }
}

impl std::error::Error for PriceLevelError {}
