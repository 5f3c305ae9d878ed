//! Recorded gate sequences for replay

use crate::error::{EngineError, Result};
use qreg_gates::StandardGate;
use std::fmt;

/// One placed operation in a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Single-qubit gate on one target
    Gate { gate: StandardGate, qubit: usize },
    /// CNOT between two distinct qubits
    ControlledNot { control: usize, target: usize },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Gate { gate, qubit } => write!(f, "{}(q{})", gate, qubit),
            Instruction::ControlledNot { control, target } => {
                write!(f, "CNOT(q{}, q{})", control, target)
            }
        }
    }
}

/// An ordered, validated record of gate placements
///
/// Instructions are validated against the circuit width as they are added,
/// so a recorded circuit always replays cleanly on an engine of the same
/// width. UI collaborators keep one of these as the source of truth and
/// re-run it whenever the register is rebuilt.
///
/// # Example
/// ```
/// use qreg_engine::{Circuit, Engine};
/// use qreg_gates::StandardGate;
///
/// let mut circuit = Circuit::new(2);
/// circuit.add_gate(StandardGate::H, 0).unwrap();
/// circuit.add_cnot(0, 1).unwrap();
///
/// let mut engine = Engine::new(2).unwrap();
/// engine.run(&circuit).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must span at least one qubit");
        Self {
            num_qubits,
            instructions: Vec::new(),
        }
    }

    /// Circuit width in qubits
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of recorded instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The recorded instructions, in placement order
    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Record a single-qubit gate placement
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` if `qubit` is outside the circuit width.
    pub fn add_gate(&mut self, gate: StandardGate, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        self.instructions.push(Instruction::Gate { gate, qubit });
        Ok(())
    }

    /// Record a CNOT placement
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` for an out-of-range qubit and
    /// `ControlTargetOverlap` when `control == target`.
    pub fn add_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(EngineError::ControlTargetOverlap { qubit: control });
        }
        self.instructions
            .push(Instruction::ControlledNot { control, target });
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(EngineError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}
