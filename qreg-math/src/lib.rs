//! Math primitives for the qreg quantum state-vector simulator
//!
//! This crate provides the two building blocks the engine layers on top of:
//! - [`Matrix`]: dense complex matrix with Kronecker product and
//!   matrix-vector multiplication
//! - [`format_amplitude`]: display formatting for complex amplitudes
//!
//! Complex scalar arithmetic is [`num_complex::Complex64`] throughout; this
//! crate only adds what that type does not already cover.
//!
//! # Example
//! ```
//! use qreg_math::Matrix;
//! use num_complex::Complex64;
//!
//! let id = Matrix::identity(2);
//! let vec = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
//! assert_eq!(id.mul_vec(&vec).unwrap(), vec);
//! ```

pub mod error;
pub mod format;
pub mod matrix;

pub use error::MathError;
pub use format::{format_amplitude, DISPLAY_EPSILON};
pub use matrix::Matrix;
pub use num_complex::Complex64;

/// Type alias for results in qreg-math
pub type Result<T> = std::result::Result<T, MathError>;
