//! Error types for gate input validation.

use thiserror::Error;

/// Errors raised before a gate computes anything.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GateError {
    /// Argument cannot be interpreted as a real number.
    #[error("the inputs of a behavior circuit must be a number, got {0:?}")]
    TypeConversion(String),

    /// Argument magnitude exceeds 1.
    #[error("the inputs of a behavior circuit must be within [-1,1], got {0}")]
    DomainRange(f64),

    /// Smoothness of the not gate is NaN or infinite.
    #[error("smoothness must be a finite number, got {0}")]
    InvalidSmoothness(f64),
}

/// Result alias used by every gate.
pub type Result<T> = std::result::Result<T, GateError>;
