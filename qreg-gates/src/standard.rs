//! Name-keyed access to the standard gate set

use crate::matrices;
use num_complex::Complex64;
use qreg_math::Matrix;
use std::fmt;

/// The single-qubit gates this simulator exposes
///
/// The set is closed by design; every variant maps to one of the `const`
/// tables in [`crate::matrices`]. Lookup by display name is the entry point
/// UI collaborators use when placing gates.
///
/// # Example
/// ```
/// use qreg_gates::StandardGate;
///
/// assert_eq!(StandardGate::from_name("T"), Some(StandardGate::T));
/// assert_eq!(StandardGate::from_name("CNOT"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardGate {
    /// Hadamard
    H,
    /// Pauli-X (NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Phase gate (sqrt of Z)
    S,
    /// pi/8 gate (sqrt of S)
    T,
}

impl StandardGate {
    /// Every gate in the library, in display order
    pub const ALL: [StandardGate; 6] = [
        StandardGate::H,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::S,
        StandardGate::T,
    ];

    /// Look up a gate by its display name
    ///
    /// Returns `None` for names outside the library; callers decide whether
    /// that is an error (the engine surfaces it as one).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "H" => Some(Self::H),
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            "Z" => Some(Self::Z),
            "S" => Some(Self::S),
            "T" => Some(Self::T),
            _ => None,
        }
    }

    /// Display name of the gate
    pub const fn name(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::S => "S",
            Self::T => "T",
        }
    }

    /// The pre-computed 2x2 unitary for this gate
    pub const fn matrix(&self) -> &'static [[Complex64; 2]; 2] {
        match self {
            Self::H => &matrices::HADAMARD,
            Self::X => &matrices::PAULI_X,
            Self::Y => &matrices::PAULI_Y,
            Self::Z => &matrices::PAULI_Z,
            Self::S => &matrices::S_GATE,
            Self::T => &matrices::T_GATE,
        }
    }

    /// The gate matrix as a typed [`Matrix`] for operator composition
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_array_2x2(self.matrix())
    }

    /// Whether the gate is its own inverse
    pub const fn is_hermitian(&self) -> bool {
        matches!(self, Self::H | Self::X | Self::Y | Self::Z)
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
