//! Construction and parameter errors
//!
//! Invalid construction never clamps or truncates silently — every invariant
//! violation surfaces here, carrying the offending value.

use crate::float_types::Real;
use crate::point::Point;
use std::fmt::Display;

/// All the ways a caller can hand the kernel invalid data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (AngleOutOfRange) Degree value outside the declared range
    AngleOutOfRange { value: Real, min: Real, max: Real },
    /// (InvalidAngleRange) Declared range is empty or non-finite
    InvalidAngleRange { min: Real, max: Real },
    /// (NonFiniteCoordinate) A coordinate is NaN or infinite
    NonFiniteCoordinate(Point),
    /// (CoincidentPoints) Two points expected to be distinct are equal
    CoincidentPoints(Point),
    /// (InfiniteSlope) `y = kx + b` cannot express a vertical line
    InfiniteSlope,
    /// (CollinearPoints) Three (or more) points lie on a single line
    CollinearPoints,
    /// (NegativeRadius) Circle radius must be non-negative
    NegativeRadius(Real),
    /// (PointNotOnCircle) The point does not lie on the circle boundary
    PointNotOnCircle(Point),
    /// (EndpointNotOnLine) A segment endpoint does not satisfy its line
    EndpointNotOnLine(Point),
    /// (NotAnEndpoint) The point is not an endpoint of the segment
    NotAnEndpoint(Point),
    /// (TooFewPoints) An operation needs more input points
    TooFewPoints { needed: usize, got: usize },
    /// (NotARectangle) Clip/query window must be an axis-aligned 4-gon
    NotARectangle(String),
    /// (NegativeDigits) Rounding/comparison precision must be non-negative
    NegativeDigits(i32),
    /// (CoordinateOutOfSpan) Query coordinate outside the segment's span
    CoordinateOutOfSpan { value: Real, min: Real, max: Real },
    /// (UnconstrainedCoordinate) The coordinate does not pick a unique point
    UnconstrainedCoordinate(Real),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::AngleOutOfRange { value, min, max } => write!(
                f,
                "(AngleOutOfRange) Cannot construct angle of {value}° in range [{min}°, {max}°]"
            ),
            GeometryError::InvalidAngleRange { min, max } => {
                write!(f, "(InvalidAngleRange) [{min}°, {max}°] is not a usable range")
            },
            GeometryError::NonFiniteCoordinate(point) => {
                write!(f, "(NonFiniteCoordinate) The point {point} has a NaN or infinite coordinate")
            },
            GeometryError::CoincidentPoints(point) => {
                write!(f, "(CoincidentPoints) Points expected to be distinct are both {point}")
            },
            GeometryError::InfiniteSlope => {
                write!(f, "(InfiniteSlope) Cannot construct line x = ? from equation y = kx + b")
            },
            GeometryError::CollinearPoints => {
                write!(f, "(CollinearPoints) The given points lie on a single line")
            },
            GeometryError::NegativeRadius(radius) => {
                write!(f, "(NegativeRadius) Circle radius must be non-negative, got {radius}")
            },
            GeometryError::PointNotOnCircle(point) => {
                write!(f, "(PointNotOnCircle) The point {point} is not on the circle boundary")
            },
            GeometryError::EndpointNotOnLine(point) => {
                write!(f, "(EndpointNotOnLine) Segment endpoint {point} is not on the source line")
            },
            GeometryError::NotAnEndpoint(point) => {
                write!(f, "(NotAnEndpoint) The point {point} is not an endpoint of this segment")
            },
            GeometryError::TooFewPoints { needed, got } => {
                write!(f, "(TooFewPoints) The operation needs at least {needed} points, got {got}")
            },
            GeometryError::NotARectangle(reason) => {
                write!(f, "(NotARectangle) {reason}")
            },
            GeometryError::NegativeDigits(digits) => {
                write!(f, "(NegativeDigits) Precision must be non-negative, got {digits}")
            },
            GeometryError::CoordinateOutOfSpan { value, min, max } => write!(
                f,
                "(CoordinateOutOfSpan) Coordinate {value} is outside the segment span [{min}, {max}]"
            ),
            GeometryError::UnconstrainedCoordinate(value) => write!(
                f,
                "(UnconstrainedCoordinate) Coordinate {value} does not select a unique point on the segment"
            ),
        }
    }
}
