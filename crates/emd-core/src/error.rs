//! Error types for distribution arithmetic and metrics
//!
//! Provides a unified error type for all emd-stats crates.

use thiserror::Error;

/// Core error type for distribution operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operand arities differ in an elementwise operation or metric
    #[error("Arity mismatch: left operand has {left} buckets, right operand has {right}")]
    ArityMismatch { left: usize, right: usize },

    /// A divisor bucket or scalar was the additive identity
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// A token on an input line did not convert to the element type
    #[error("Unparsable token {token:?} at position {position}")]
    Parse { token: String, position: usize },

    /// IO error (for reader-backed ingestion)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a zero divisor bucket
    pub fn zero_bucket(index: usize) -> Self {
        Self::DivisionByZero(format!("divisor bucket at index {index} is zero"))
    }

    /// Create an error for a zero scalar divisor
    pub fn zero_scalar() -> Self {
        Self::DivisionByZero("scalar divisor is zero".to_string())
    }

    /// Check that two operand arities agree
    pub fn check_same_arity(left: usize, right: usize) -> Result<()> {
        if left != right {
            return Err(Error::ArityMismatch { left, right });
        }
        Ok(())
    }
}
