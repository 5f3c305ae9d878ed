//! Error types for the circuit engine

use qreg_math::MathError;
use thiserror::Error;

/// Errors that can occur in circuit-engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Gate name absent from the gate library
    #[error("Unknown gate '{0}': library contains H, X, Y, Z, S, T")]
    UnknownGate(String),

    /// Qubit index outside the register
    #[error("Invalid qubit index {index} for {num_qubits}-qubit register")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// CNOT with control and target on the same qubit
    #[error("CNOT control and target must differ, both are {qubit}")]
    ControlTargetOverlap { qubit: usize },

    /// Register size outside the supported range
    #[error("Unsupported register size {num_qubits}: must be 1..={max_qubits}")]
    InvalidQubitCount { num_qubits: usize, max_qubits: usize },

    /// Circuit replayed on an engine of a different width
    #[error("Circuit spans {circuit} qubits but engine has {engine}")]
    CircuitSizeMismatch { circuit: usize, engine: usize },

    /// Measurement hit a branch with vanishing probability
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Propagated matrix-layer failure; indicates an operator construction bug
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for circuit-engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
