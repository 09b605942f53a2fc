//! Error types for MSISDN handling

use std::path::PathBuf;
use thiserror::Error;

use crate::operator::Operator;

/// Why a raw input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Nothing left after stripping punctuation and the trunk/country prefix
    Empty,
    /// Normalized digits are not exactly ten long
    WrongLength {
        /// Number of digits found after normalization
        len: usize,
    },
}

/// Raised when a raw string cannot be normalized to a Philippine mobile number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "the supplied MSISDN `{input}` is not valid ({reason}); \
     use `msisdn_ph::validate()` to check input before parsing"
)]
pub struct InvalidNumberError {
    input: String,
    reason: InvalidReason,
}

impl InvalidNumberError {
    pub(crate) fn new(input: impl Into<String>, reason: InvalidReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The raw input exactly as the caller supplied it
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The rejection reason
    pub fn reason(&self) -> InvalidReason {
        self.reason
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no digits left after normalization"),
            Self::WrongLength { len } => write!(f, "expected 10 digits, found {}", len),
        }
    }
}

/// Failure to load an operator prefix table
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Table file could not be read
    #[error("failed to read prefix table {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Table is not a JSON array of strings
    #[error("malformed prefix table for {operator}: {source}")]
    Decode {
        /// Operator whose table failed
        operator: Operator,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Entry is not exactly three ASCII digits
    #[error("invalid prefix `{prefix}` in {operator} table")]
    InvalidPrefix {
        /// Operator whose table failed
        operator: Operator,
        /// Offending entry
        prefix: String,
    },
}

/// Failure to load a [`MsisdnConfig`](crate::config::MsisdnConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON for the expected shape
    #[error("config decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured prefix directory could not be loaded
    #[error(transparent)]
    Prefix(#[from] PrefixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        let err = InvalidNumberError::new("12345", InvalidReason::WrongLength { len: 5 });
        let msg = err.to_string();
        assert!(msg.contains("`12345`"));
        assert!(msg.contains("found 5"));
        assert!(msg.contains("validate()"));
        assert_eq!(err.input(), "12345");
    }

    #[test]
    fn test_prefix_error_display() {
        let err = PrefixError::InvalidPrefix {
            operator: Operator::Sun,
            prefix: "9x2".to_string(),
        };
        assert_eq!(err.to_string(), "invalid prefix `9x2` in SUN table");
    }
}
