//! Scalar type selection and floating-point comparison helpers.
//!
//! Every coordinate in the crate is a [`Real`], selected by the mutually
//! exclusive `f64` (default) / `f32` features. All equality between
//! coordinates goes through the tolerant comparisons below — geometric
//! predicates never compare floats exactly.

use crate::errors::GeometryError;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Absolute tolerance used by the geometric predicates.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Absolute tolerance used by the geometric predicates.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Scaled machine-epsilon comparison with an absolute floor of [`EPSILON`].
///
/// The relative part covers large magnitudes, the absolute floor covers
/// results near zero where a pure ULP test becomes vacuously strict.
#[inline]
pub fn almost_equal(a: Real, b: Real) -> bool {
    let diff = (a - b).abs();
    diff <= Real::EPSILON * (a + b).abs() * 4.0 || diff < EPSILON
}

/// Compare two numbers, treating them as equal when they differ by less
/// than `precision`.
#[inline]
pub fn approx_eq(a: Real, b: Real, precision: Real) -> bool {
    (a - b).abs() <= precision
}

/// Round to `digits` decimal places. Negative `digits` is a parameter error.
pub fn round_to(number: Real, digits: i32) -> Result<Real, GeometryError> {
    if digits < 0 {
        return Err(GeometryError::NegativeDigits(digits));
    }
    let mult = (10.0 as Real).powi(digits);
    Ok((number * mult).round() / mult)
}

/// Compare two numbers after rounding both to `digits` decimal places.
pub fn approx_eq_digits(a: Real, b: Real, digits: i32) -> Result<bool, GeometryError> {
    Ok(round_to(a, digits)? == round_to(b, digits)?)
}

/// Is the number within tolerance of zero?
#[inline]
pub fn is_zero(a: Real) -> bool {
    a.abs() <= EPSILON
}

/// Sign of a number: `1` above zero, `-1` below, `0` within tolerance of it.
#[inline]
pub fn sign(a: Real) -> i8 {
    if is_zero(a) {
        0
    } else if a < 0.0 {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_to_digits() {
        assert_eq!(round_to(1.2345, 2).unwrap(), 1.23);
        assert_eq!(round_to(1.5, 0).unwrap(), 2.0);
        assert!(round_to(1.0, -1).is_err());
    }

    #[test]
    fn approx_comparisons() {
        assert!(approx_eq(1.0, 1.005, 0.01));
        assert!(!approx_eq(1.0, 1.02, 0.01));
        assert!(approx_eq_digits(1.234, 1.2344, 3).unwrap());
        assert!(almost_equal(0.1 + 0.2, 0.3));
    }

    #[test]
    fn sign_of() {
        assert_eq!(sign(3.0), 1);
        assert_eq!(sign(-2.5), -1);
        assert_eq!(sign(0.0), 0);
        assert!(is_zero(0.0));
    }
}
