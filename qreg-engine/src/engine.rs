//! Circuit engine: operator construction and gate application

use crate::circuit::{Circuit, Instruction};
use crate::error::{EngineError, Result};
use crate::state::StateVector;
use qreg_gates::{matrices, StandardGate};
use qreg_math::{format_amplitude, Matrix};

/// Hard cap on register width for the engine
///
/// The faithful gate path materializes a 2^N x 2^N operator, so memory
/// quadruples per added qubit; 12 qubits is a 4^12-amplitude operator and
/// the last size that stays comfortably in RAM.
pub const MAX_ENGINE_QUBITS: usize = 12;

/// Quantum circuit engine over an exclusively-owned amplitude vector
///
/// The engine applies single-qubit gates by expanding them to full-register
/// operators via iterated Kronecker products, and CNOT by direct index
/// permutation. Callers read probabilities and formatted amplitudes after
/// each mutation; the engine pushes nothing.
///
/// The lifecycle is ground state, arbitrarily-evolved state, ground state
/// again on [`reset`](Engine::reset). Changing qubit count means building a
/// new engine; there is no in-place resize.
///
/// # Example
/// ```
/// use qreg_engine::Engine;
/// use qreg_gates::StandardGate;
///
/// let mut engine = Engine::new(2).unwrap();
/// engine.apply_gate(StandardGate::H, 0).unwrap();
/// engine.apply_cnot(0, 1).unwrap();
///
/// let probs = engine.probabilities();
/// assert!((probs[0] - 0.5).abs() < 1e-10);
/// assert!((probs[3] - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    state: StateVector,
}

impl Engine {
    /// Create an engine in the ground state |0...0>
    ///
    /// # Errors
    /// Returns `InvalidQubitCount` for zero qubits or more than
    /// [`MAX_ENGINE_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_ENGINE_QUBITS {
            return Err(EngineError::InvalidQubitCount {
                num_qubits,
                max_qubits: MAX_ENGINE_QUBITS,
            });
        }
        Ok(Self {
            state: StateVector::new(num_qubits)?,
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.state.dimension()
    }

    /// Read-only view of the underlying state
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Return to the ground state |0...0>
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Apply a single-qubit gate through the full-operator path
    ///
    /// Builds the 2^N x 2^N operator as the iterated Kronecker product of
    /// per-qubit factors (the gate matrix at `qubit`, the 2x2 identity
    /// elsewhere) and replaces the state with operator x state. The replace
    /// is transactional: a failure leaves the previous vector untouched.
    ///
    /// Cost is O(4^N) in both time and memory, inherent to the construction;
    /// [`apply_gate_in_place`](Engine::apply_gate_in_place) is the O(2^N)
    /// alternative with identical results.
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` if `qubit` is outside the register.
    pub fn apply_gate(&mut self, gate: StandardGate, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;

        let op = self.single_qubit_operator(gate, qubit);
        let next = op.mul_vec(self.state.amplitudes())?;
        self.state.replace(next);
        Ok(())
    }

    /// Apply a single-qubit gate looked up by display name
    ///
    /// # Errors
    /// Returns `UnknownGate` for names outside {H, X, Y, Z, S, T}, otherwise
    /// as [`apply_gate`](Engine::apply_gate).
    pub fn apply_gate_by_name(&mut self, name: &str, qubit: usize) -> Result<()> {
        let gate = StandardGate::from_name(name)
            .ok_or_else(|| EngineError::UnknownGate(name.to_string()))?;
        self.apply_gate(gate, qubit)
    }

    /// Apply a single-qubit gate by updating only the touched amplitude pairs
    ///
    /// For target qubit `q`, amplitudes pair up across bit `q` of the basis
    /// index; each pair is rotated by the 2x2 gate matrix directly. O(2^N),
    /// no operator allocation. Produces the same state as
    /// [`apply_gate`](Engine::apply_gate) within floating-point tolerance.
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` if `qubit` is outside the register.
    pub fn apply_gate_in_place(&mut self, gate: StandardGate, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;

        let m = gate.matrix();
        let m00 = m[0][0];
        let m01 = m[0][1];
        let m10 = m[1][0];
        let m11 = m[1][1];

        let mask = 1usize << qubit;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if i & mask != 0 {
                continue; // pairs are visited from their bit-clear side
            }
            let j = i | mask;
            let amp0 = amps[i];
            let amp1 = amps[j];
            amps[i] = m00 * amp0 + m01 * amp1;
            amps[j] = m10 * amp0 + m11 * amp1;
        }
        Ok(())
    }

    /// Apply a CNOT as a direct index permutation
    ///
    /// Every basis index with the control bit set swaps amplitudes with its
    /// target-bit-flipped partner; everything else is untouched. O(2^N) with
    /// no matrix construction, which is the whole reason CNOT bypasses the
    /// gate library.
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` for an out-of-range qubit and
    /// `ControlTargetOverlap` when `control == target`. Validation happens
    /// before any amplitude moves.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(EngineError::ControlTargetOverlap { qubit: control });
        }

        let control_mask = 1usize << control;
        let target_mask = 1usize << target;
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            // Visit each swap pair once, from its target-clear side
            if i & control_mask != 0 && i & target_mask == 0 {
                amps.swap(i, i | target_mask);
            }
        }
        Ok(())
    }

    /// Measurement probability of every basis state, in index order
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// Amplitudes rendered for display, in basis-index order
    ///
    /// Formatting collapses near-zero components; the output is not meant to
    /// be parsed back.
    pub fn state_vector(&self, precision: usize) -> Vec<String> {
        self.state
            .amplitudes()
            .iter()
            .map(|&amp| format_amplitude(amp, precision))
            .collect()
    }

    /// Measure one qubit, collapsing the state
    ///
    /// See [`StateVector::measure_qubit`] for the randomness contract.
    pub fn measure_qubit(&mut self, qubit: usize, random_value: f64) -> Result<u8> {
        self.state.measure_qubit(qubit, random_value)
    }

    /// Measure the whole register, collapsing to one basis state
    pub fn measure_all(&mut self, random_value: f64) -> usize {
        self.state.measure_all(random_value)
    }

    /// Replay a recorded circuit from a fresh ground state
    ///
    /// Resets first, then applies every instruction in order. This is how
    /// collaborators rebuild after any structural change: re-run the full
    /// sequence rather than patch the evolved state.
    ///
    /// # Errors
    /// Returns `CircuitSizeMismatch` if the circuit was recorded for a
    /// different register width. Instruction-level errors cannot occur for
    /// instructions a [`Circuit`] accepted.
    pub fn run(&mut self, circuit: &Circuit) -> Result<()> {
        if circuit.num_qubits() != self.num_qubits() {
            return Err(EngineError::CircuitSizeMismatch {
                circuit: circuit.num_qubits(),
                engine: self.num_qubits(),
            });
        }

        self.reset();
        for instruction in circuit.instructions() {
            match *instruction {
                Instruction::Gate { gate, qubit } => self.apply_gate(gate, qubit)?,
                Instruction::ControlledNot { control, target } => {
                    self.apply_cnot(control, target)?
                }
            }
        }
        Ok(())
    }

    /// Build the full-register operator for a single-qubit gate
    ///
    /// Iterated Kronecker product over per-qubit factors, most significant
    /// qubit leftmost, so that qubit 0 indexes the least significant bit of
    /// the basis state.
    pub fn single_qubit_operator(&self, gate: StandardGate, qubit: usize) -> Matrix {
        let gate_matrix = gate.to_matrix();
        let identity = Matrix::from_array_2x2(&matrices::IDENTITY);

        let mut op = Matrix::identity(1);
        for q in (0..self.num_qubits()).rev() {
            let factor = if q == qubit { &gate_matrix } else { &identity };
            op = op.kron(factor);
        }
        op
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits() {
            return Err(EngineError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_engine_ground_state() {
        let engine = Engine::new(2).unwrap();
        assert_eq!(engine.num_qubits(), 2);
        assert_eq!(engine.dimension(), 4);
        assert_eq!(engine.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_register_size_bounds() {
        assert!(matches!(
            Engine::new(0),
            Err(EngineError::InvalidQubitCount { .. })
        ));
        assert!(matches!(
            Engine::new(MAX_ENGINE_QUBITS + 1),
            Err(EngineError::InvalidQubitCount { .. })
        ));
        assert!(Engine::new(MAX_ENGINE_QUBITS).is_ok());
    }

    #[test]
    fn test_single_qubit_operator_shape() {
        let engine = Engine::new(3).unwrap();
        let op = engine.single_qubit_operator(StandardGate::H, 1);
        assert_eq!(op.rows(), 8);
        assert_eq!(op.cols(), 8);
    }

    #[test]
    fn test_x_gate_flips_qubit() {
        let mut engine = Engine::new(1).unwrap();
        engine.apply_gate(StandardGate::X, 0).unwrap();
        let probs = engine.probabilities();
        assert_relative_eq!(probs[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(probs[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut engine = Engine::new(1).unwrap();
        engine.apply_gate(StandardGate::H, 0).unwrap();
        let probs = engine.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_gate_by_name() {
        let mut engine = Engine::new(1).unwrap();
        engine.apply_gate_by_name("X", 0).unwrap();
        assert_relative_eq!(engine.probabilities()[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_gate_name_is_error() {
        let mut engine = Engine::new(1).unwrap();
        let result = engine.apply_gate_by_name("Q", 0);
        assert_eq!(result, Err(EngineError::UnknownGate("Q".to_string())));
        // State untouched
        assert_eq!(engine.probabilities(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_invalid_qubit_leaves_state_untouched() {
        let mut engine = Engine::new(2).unwrap();
        engine.apply_gate(StandardGate::H, 0).unwrap();
        let before = engine.state().clone();

        assert!(engine.apply_gate(StandardGate::X, 2).is_err());
        assert!(engine.apply_cnot(0, 5).is_err());
        assert!(engine.apply_cnot(1, 1).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_cnot_control_clear_is_noop() {
        let mut engine = Engine::new(2).unwrap();
        engine.apply_cnot(0, 1).unwrap();
        assert_eq!(engine.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cnot_control_set_flips_target() {
        let mut engine = Engine::new(2).unwrap();
        engine.apply_gate(StandardGate::X, 0).unwrap();
        engine.apply_cnot(0, 1).unwrap();
        let probs = engine.probabilities();
        assert_relative_eq!(probs[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_state_vector_formatting() {
        let mut engine = Engine::new(1).unwrap();
        engine.apply_gate(StandardGate::H, 0).unwrap();
        let dump = engine.state_vector(3);
        assert_eq!(dump, vec!["0.707".to_string(), "0.707".to_string()]);
    }

    #[test]
    fn test_reset_after_evolution() {
        let mut engine = Engine::new(2).unwrap();
        engine.apply_gate(StandardGate::H, 0).unwrap();
        engine.apply_cnot(0, 1).unwrap();
        engine.reset();
        assert_eq!(engine.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_in_place_path_matches_operator_path() {
        for gate in StandardGate::ALL {
            for qubit in 0..3 {
                let mut full = Engine::new(3).unwrap();
                let mut fast = Engine::new(3).unwrap();

                // Start both from the same non-trivial state
                for engine in [&mut full, &mut fast] {
                    engine.apply_gate(StandardGate::H, 0).unwrap();
                    engine.apply_gate(StandardGate::T, 1).unwrap();
                    engine.apply_cnot(0, 2).unwrap();
                }

                full.apply_gate(gate, qubit).unwrap();
                fast.apply_gate_in_place(gate, qubit).unwrap();

                for (a, b) in full
                    .state()
                    .amplitudes()
                    .iter()
                    .zip(fast.state().amplitudes())
                {
                    assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
                    assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
                }
            }
        }
    }
}
