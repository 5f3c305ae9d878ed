//! Compile-time constant gate matrices
//!
//! The library is the closed set this simulator exposes: Hadamard, the three
//! Paulis, the S and T phase gates, plus the 2x2 identity used as the
//! neutral Kronecker factor.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// 1/sqrt(2)
const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate
/// H = 1/sqrt(2) * [[1,  1],
///                  [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate (NOT)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate (phase gate, sqrt(Z))
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// T gate (pi/8 gate, sqrt(S))
/// T = [[1, 0],
///      [0, e^(i pi/4)]]
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)], // e^(i pi/4) = (1+i)/sqrt(2)
];

/// Identity gate
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];
