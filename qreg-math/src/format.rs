//! Display formatting for complex amplitudes
//!
//! Gate arithmetic leaves tiny residues (1e-16-ish real or imaginary parts)
//! on amplitudes that are mathematically zero. The formatter collapses any
//! component below [`DISPLAY_EPSILON`] so state-vector dumps stay readable.
//! Output is for display only; there is no round-trip parser.

use num_complex::Complex64;

/// Components with absolute value below this render as zero
pub const DISPLAY_EPSILON: f64 = 1e-4;

/// Render a complex amplitude with the given number of decimal places
///
/// Produces one of four shapes depending on which components survive the
/// near-zero collapse:
/// - both zero: `"0.000"`
/// - purely real: `"0.707"` / `"-0.707"`
/// - purely imaginary: `"0.707i"` / `"-0.707i"`
/// - full: `"0.500+0.500i"` / `"0.500-0.500i"`
///
/// # Example
/// ```
/// use qreg_math::format_amplitude;
/// use num_complex::Complex64;
///
/// let z = Complex64::new(0.5, -0.5);
/// assert_eq!(format_amplitude(z, 3), "0.500-0.500i");
/// ```
pub fn format_amplitude(z: Complex64, precision: usize) -> String {
    let re_zero = z.re.abs() < DISPLAY_EPSILON;
    let im_zero = z.im.abs() < DISPLAY_EPSILON;

    match (re_zero, im_zero) {
        (true, true) => format!("{:.precision$}", 0.0),
        (false, true) => format!("{:.precision$}", z.re),
        (true, false) => format!("{:.precision$}i", z.im),
        (false, false) => {
            if z.im < 0.0 {
                format!("{:.precision$}-{:.precision$}i", z.re, -z.im)
            } else {
                format!("{:.precision$}+{:.precision$}i", z.re, z.im)
            }
        }
    }
}
