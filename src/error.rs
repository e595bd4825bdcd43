//! Error types for the epoch converter
//!
//! Provides structured error handling with context and proper error chains.

use std::num::ParseFloatError;
use thiserror::Error;

/// Main error type for the epoch converter
#[derive(Error, Debug)]
pub enum DatetimeError {
    /// Missing, contradictory or invalid command-line arguments
    #[error("{message}")]
    Usage { message: String },

    /// An epoch value that is not a floating-point number
    #[error("{}", describe_parse(.input, .line))]
    EpochParse {
        input: String,
        /// 1-based input line in stream mode
        line: Option<usize>,
        #[source]
        source: ParseFloatError,
    },

    /// Timezone identifier unknown to the timezone-data provider
    #[error("Unknown timezone: {name}")]
    Timezone { name: String },

    /// Epoch outside the representable datetime range
    #[error("Epoch {epoch} is out of range")]
    OutOfRange { epoch: f64 },

    /// Reading input or writing output failed
    #[error("I/O error: {operation} failed")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_parse(input: &str, line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("Invalid epoch on line {line}: {input:?}"),
        None => format!("Invalid epoch: {input:?}"),
    }
}

impl DatetimeError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new epoch parsing error
    pub fn epoch_parse(
        input: impl Into<String>,
        line: Option<usize>,
        source: ParseFloatError,
    ) -> Self {
        Self::EpochParse {
            input: input.into(),
            line,
            source,
        }
    }

    /// Create a new timezone resolution error
    pub fn timezone(name: impl Into<String>) -> Self {
        Self::Timezone { name: name.into() }
    }

    /// Create a new out-of-range error
    pub fn out_of_range(epoch: f64) -> Self {
        Self::OutOfRange { epoch }
    }

    /// Create a new I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Whether the error should be reported together with the help text
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DatetimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_line() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = DatetimeError::epoch_parse("abc", Some(3), source);
        assert_eq!(err.to_string(), "Invalid epoch on line 3: \"abc\"");
        assert!(!err.is_usage());
    }

    #[test]
    fn test_usage_error() {
        let err = DatetimeError::usage("pick one");
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "pick one");
    }
}
