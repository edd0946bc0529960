//! Degree-valued angles constrained to a declared range.

use crate::errors::GeometryError;
use crate::float_types::Real;
use std::cmp::Ordering;
use std::ops::{Add, Div, Sub};

/// The range an [`Angle`] is constrained to.
///
/// The range is fixed at construction; arithmetic renormalizes results back
/// into it by wrapping over the range span (for the 360°-span variants this
/// is the usual "modulo 360°" rule).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleRange {
    /// `[0°, 360°]`
    Full,
    /// `[-360°, 360°]`
    Signed,
    /// `[-90°, 90°]`
    Latitude,
    /// A caller-supplied `[min, max]`
    Custom { min: Real, max: Real },
}

impl AngleRange {
    /// Inclusive `(min, max)` bounds of this range.
    pub fn bounds(&self) -> (Real, Real) {
        match self {
            AngleRange::Full => (0.0, 360.0),
            AngleRange::Signed => (-360.0, 360.0),
            AngleRange::Latitude => (-90.0, 90.0),
            AngleRange::Custom { min, max } => (*min, *max),
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let (min, max) = self.bounds();
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GeometryError::InvalidAngleRange { min, max });
        }
        Ok(())
    }

    /// Wrap an arithmetic result back into the range.
    fn wrap(&self, value: Real) -> Real {
        let (min, max) = self.bounds();
        if (min..=max).contains(&value) {
            return value;
        }
        min + (value - min).rem_euclid(max - min)
    }
}

/// An immutable angle in degrees, guaranteed to lie within its declared
/// [`AngleRange`].
///
/// # Example
/// ```
/// # use geom2d::angle::Angle;
/// let a = Angle::new(350.0).unwrap();
/// let b = Angle::new(20.0).unwrap();
/// assert_eq!((a + b).degrees(), 10.0);
/// assert!(Angle::new(361.0).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Angle {
    degrees: Real,
    range: AngleRange,
}

impl Angle {
    /// An angle in the default `[0°, 360°]` range.
    pub fn new(degrees: Real) -> Result<Self, GeometryError> {
        Self::with_range(degrees, AngleRange::Full)
    }

    /// An angle constrained to `range`. Out-of-range or non-finite values
    /// are rejected, never clamped.
    pub fn with_range(degrees: Real, range: AngleRange) -> Result<Self, GeometryError> {
        range.validate()?;
        let (min, max) = range.bounds();
        if !degrees.is_finite() || degrees < min || degrees > max {
            return Err(GeometryError::AngleOutOfRange {
                value: degrees,
                min,
                max,
            });
        }
        Ok(Self { degrees, range })
    }

    /// The 360° angle.
    pub fn full() -> Self {
        Self {
            degrees: 360.0,
            range: AngleRange::Full,
        }
    }

    /// Value in degrees.
    #[inline]
    pub fn degrees(&self) -> Real {
        self.degrees
    }

    /// Value in radians.
    #[inline]
    pub fn radians(&self) -> Real {
        self.degrees.to_radians()
    }

    /// The range this angle is constrained to.
    #[inline]
    pub fn range(&self) -> AngleRange {
        self.range
    }

    /// Divide by a scalar, renormalizing into the range.
    ///
    /// A zero or non-finite divisor is an error (the quotient would not be
    /// a representable angle).
    pub fn checked_div(self, divisor: Real) -> Result<Self, GeometryError> {
        let quotient = self.degrees / divisor;
        if !quotient.is_finite() {
            let (min, max) = self.range.bounds();
            return Err(GeometryError::AngleOutOfRange {
                value: quotient,
                min,
                max,
            });
        }
        Ok(Self {
            degrees: self.range.wrap(quotient),
            range: self.range,
        })
    }
}

/// Angles compare by degree value alone; the declared range does not
/// participate.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.degrees.partial_cmp(&other.degrees)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle {
            degrees: self.range.wrap(self.degrees + rhs.degrees),
            range: self.range,
        }
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle {
            degrees: self.range.wrap(self.degrees - rhs.degrees),
            range: self.range,
        }
    }
}

impl Div<Real> for Angle {
    type Output = Angle;

    /// # Panics
    /// On a zero or non-finite divisor; use [`Angle::checked_div`] to handle
    /// that case as a value.
    fn div(self, rhs: Real) -> Angle {
        match self.checked_div(rhs) {
            Ok(angle) => angle,
            Err(err) => panic!("{err}"),
        }
    }
}
