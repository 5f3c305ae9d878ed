//! Error types for matrix operations

use thiserror::Error;

/// Errors that can occur during matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Operand sizes disagree
    ///
    /// In the engine every operator is 2^n x 2^n by construction, so hitting
    /// this from engine code indicates a construction bug rather than a
    /// recoverable user error.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
