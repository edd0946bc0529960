//! Infinite lines with explicit degeneracy classification.
//!
//! A line is stored as one of three equation shapes rather than a raw
//! `y = kx + b`, because vertical lines have no finite slope:
//!
//! - [`Line::ConstX`] — `x = c` (vertical)
//! - [`Line::ConstY`] — `y = c` (horizontal)
//! - [`Line::Normal`] — `y = kx + b`
//!
//! Every query dispatches on the variant, so no code path ever divides by a
//! zero coordinate difference.

use crate::errors::GeometryError;
use crate::float_types::{Real, almost_equal, approx_eq};
use crate::point::Point;

/// An infinite line in the plane, classified by its degeneracy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    /// `x = c` — vertical, not expressible as `y = kx + b`
    ConstX { x: Real },
    /// `y = c` — horizontal
    ConstY { y: Real },
    /// `y = kx + b`
    Normal { k: Real, b: Real },
}

impl Line {
    /// The line through two distinct, finite points.
    ///
    /// The variant is chosen by which coordinate difference vanishes:
    /// Δx = 0 gives [`Line::ConstX`], Δy = 0 gives [`Line::ConstY`],
    /// otherwise [`Line::Normal`].
    pub fn through(a: &Point, b: &Point) -> Result<Self, GeometryError> {
        if !a.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(a.clone()));
        }
        if !b.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(b.clone()));
        }
        if a == b {
            return Err(GeometryError::CoincidentPoints(a.clone()));
        }

        let x_diff = b.x() - a.x();
        let y_diff = b.y() - a.y();
        if x_diff == 0.0 {
            Ok(Line::ConstX { x: a.x() })
        } else if y_diff == 0.0 {
            Ok(Line::ConstY { y: a.y() })
        } else {
            Ok(Line::Normal {
                k: y_diff / x_diff,
                b: (-a.x() * y_diff + a.y() * x_diff) / x_diff,
            })
        }
    }

    /// A line from the explicit equation `y = kx + b`.
    ///
    /// An infinite slope is rejected — vertical lines cannot be written in
    /// this form; `k = 0` classifies as [`Line::ConstY`].
    pub fn from_slope_intercept(k: Real, b: Real) -> Result<Self, GeometryError> {
        if k.is_infinite() {
            return Err(GeometryError::InfiniteSlope);
        }
        if k == 0.0 {
            Ok(Line::ConstY { y: b })
        } else {
            Ok(Line::Normal { k, b })
        }
    }

    /// `y` at the given `x`, when the line determines one.
    ///
    /// `None` for a vertical line — there `x` either matches every `y` or
    /// none at all.
    pub fn y_at(&self, x: Real) -> Option<Real> {
        match self {
            Line::ConstX { .. } => None,
            Line::ConstY { y } => Some(*y),
            Line::Normal { k, b } => Some(k * x + b),
        }
    }

    /// `x` at the given `y`, when the line determines one.
    pub fn x_at(&self, y: Real) -> Option<Real> {
        match self {
            Line::ConstX { x } => Some(*x),
            Line::ConstY { .. } => None,
            Line::Normal { k, b } => Some((y - b) / k),
        }
    }

    /// Slope of the line; `None` for vertical lines.
    pub fn slope(&self) -> Option<Real> {
        match self {
            Line::ConstX { .. } => None,
            Line::ConstY { .. } => Some(0.0),
            Line::Normal { k, .. } => Some(*k),
        }
    }

    /// `y`-intercept; `None` for vertical lines.
    pub fn intercept(&self) -> Option<Real> {
        match self {
            Line::ConstX { .. } => None,
            Line::ConstY { y } => Some(*y),
            Line::Normal { b, .. } => Some(*b),
        }
    }

    /// Does the line pass through some point with this `x`?
    pub fn covers_x(&self, x: Real) -> bool {
        match self {
            Line::ConstX { x: c } => almost_equal(*c, x),
            Line::ConstY { .. } | Line::Normal { .. } => true,
        }
    }

    /// Does the line pass through some point with this `y`?
    pub fn covers_y(&self, y: Real) -> bool {
        match self {
            Line::ConstY { y: c } => almost_equal(*c, y),
            Line::ConstX { .. } => false,
            Line::Normal { .. } => true,
        }
    }

    /// Tolerant membership test — never an exact float comparison.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Line::ConstX { x } => almost_equal(*x, point.x()),
            Line::ConstY { y } => almost_equal(*y, point.y()),
            Line::Normal { k, b } => almost_equal(k * point.x() + b, point.y()),
        }
    }

    /// Intersection point of two lines.
    ///
    /// Two lines of the same variant are parallel (or coincident) and yield
    /// [`Point::at_infinity`] — never an error; the same sentinel covers
    /// equal-slope [`Line::Normal`] pairs.
    pub fn intersect(first: &Line, second: &Line) -> Point {
        match (first, second) {
            (Line::ConstX { .. }, Line::ConstX { .. })
            | (Line::ConstY { .. }, Line::ConstY { .. }) => Point::at_infinity(),
            (Line::Normal { k: k1, b: b1 }, Line::Normal { k: k2, b: b2 }) => {
                if k1 == k2 {
                    return Point::at_infinity();
                }
                let x = (b2 - b1) / (k1 - k2);
                Point::new(x, k2 * x + b2)
            },
            (Line::ConstX { x }, Line::ConstY { y })
            | (Line::ConstY { y }, Line::ConstX { x }) => Point::new(*x, *y),
            (Line::Normal { k, b }, Line::ConstX { x })
            | (Line::ConstX { x }, Line::Normal { k, b }) => Point::new(*x, k * x + b),
            (Line::Normal { k, b }, Line::ConstY { y })
            | (Line::ConstY { y }, Line::Normal { k, b }) => Point::new((y - b) / k, *y),
        }
    }

    /// The perpendicular to this line passing through `point`.
    pub fn perpendicular_through(&self, point: &Point) -> Line {
        match self {
            Line::ConstX { .. } => Line::ConstY { y: point.y() },
            Line::ConstY { .. } => Line::ConstX { x: point.x() },
            Line::Normal { k, .. } => Line::Normal {
                k: -1.0 / k,
                b: point.y() + point.x() / k,
            },
        }
    }

    /// Are the two lines perpendicular, comparing slopes within `precision`?
    pub fn is_perpendicular(&self, other: &Line, precision: Real) -> bool {
        match self {
            Line::ConstX { .. } => matches!(other, Line::ConstY { .. }),
            Line::ConstY { .. } => matches!(other, Line::ConstX { .. }),
            Line::Normal { k, .. } => match other {
                Line::Normal { k: other_k, .. } => approx_eq(*other_k, -1.0 / k, precision),
                _ => false,
            },
        }
    }

    /// Do three points lie on a single line? A coincident pair counts as
    /// collinear with anything.
    pub fn collinear(a: &Point, b: &Point, c: &Point) -> bool {
        match Line::through(a, b) {
            Ok(line) => line.contains(c),
            Err(_) => true,
        }
    }
}
