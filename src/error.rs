//! Error types for the SQL string codec.
//!
//! The codec itself is total once built: encoding and decoding never fail.
//! Errors only arise while selecting a dialect or loading configuration.

use thiserror::Error;

/// Errors raised while constructing or configuring a codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mode value outside the supported dialects
    #[error("Unknown codec mode: {value}")]
    UnknownMode { value: String },
}

impl CodecError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown mode error.
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode {
            value: value.into(),
        }
    }

    /// Check if this error comes from configuration rather than a caller-supplied value.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Get a user-friendly suggestion for how to fix this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check your environment variables and configuration"),
            Self::UnknownMode { .. } => {
                Some("Use 'mysql' (0) for backslash escaping or 'ansi' (1) for quote doubling")
            }
        }
    }
}
