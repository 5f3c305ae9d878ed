//! Quantum state-vector circuit engine
//!
//! This crate owns the amplitude vector for an N-qubit register and evolves
//! it under the fixed gate library of `qreg-gates`:
//! - [`Engine`]: gate application (full-operator Kronecker path and an
//!   in-place alternative), CNOT by index permutation, probability and
//!   formatted-amplitude snapshots, measurement
//! - [`StateVector`]: the owned amplitude vector
//! - [`Circuit`]: a validated, replayable record of gate placements
//!
//! # Example
//! ```
//! use qreg_engine::Engine;
//!
//! // Bell state: H on q0, then CNOT(0 -> 1)
//! let mut engine = Engine::new(2).unwrap();
//! engine.apply_gate_by_name("H", 0).unwrap();
//! engine.apply_cnot(0, 1).unwrap();
//!
//! let probs = engine.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-10);
//! assert!((probs[3] - 0.5).abs() < 1e-10);
//! ```

pub mod circuit;
pub mod engine;
pub mod error;
pub mod state;

pub use circuit::{Circuit, Instruction};
pub use engine::{Engine, MAX_ENGINE_QUBITS};
pub use error::{EngineError, Result};
pub use state::{StateVector, MAX_STATE_QUBITS};
