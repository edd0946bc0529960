//! Circles, the boundary-point ↔ angle bijection, and circle arcs.

use crate::angle::Angle;
use crate::errors::GeometryError;
use crate::float_types::{Real, almost_equal, approx_eq_digits};
use crate::line::Line;
use crate::point::Point;

/// Which coordinate to hold fixed when snapping a near-miss point onto the
/// circle boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapAxis {
    /// Keep the point's `x`, move its `y` onto the boundary
    HoldX,
    /// Keep the point's `y`, move its `x` onto the boundary
    HoldY,
}

/// A circle: center point and non-negative finite radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: Real,
}

impl Circle {
    pub fn new(center: Point, radius: Real) -> Result<Self, GeometryError> {
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate(center));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// The circumcircle of three non-collinear points.
    pub fn circumscribed(a: &Point, b: &Point, c: &Point) -> Result<Self, GeometryError> {
        if Line::collinear(a, b, c) {
            return Err(GeometryError::CollinearPoints);
        }

        let (ax, ay) = (a.x(), a.y());
        let (bx, by) = (b.x(), b.y());
        let (cx, cy) = (c.x(), c.y());
        let denominator = ax * (by - cy) + bx * (cy - ay) + cx * (ay - by);

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;
        let x = -0.5 * (ay * (b_sq - c_sq) + by * (c_sq - a_sq) + cy * (a_sq - b_sq))
            / denominator;
        let y = 0.5 * (ax * (b_sq - c_sq) + bx * (c_sq - a_sq) + cx * (a_sq - b_sq))
            / denominator;

        let center = Point::new(x, y);
        let radius = center.distance_to(a);
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The two boundary `y` values at a given `x`, upper root first.
    ///
    /// Meaningful for `x` within the circle's horizontal span; the
    /// discriminant is clamped at zero so a grazing `x` returns the tangent
    /// point twice.
    pub fn y_roots(&self, x: Real) -> (Real, Real) {
        let dx = x - self.center.x();
        let value = (self.radius * self.radius - dx * dx).max(0.0).sqrt();
        (self.center.y() + value, self.center.y() - value)
    }

    /// The two boundary `x` values at a given `y`, greater root first.
    pub fn x_roots(&self, y: Real) -> (Real, Real) {
        let dy = y - self.center.y();
        let value = (self.radius * self.radius - dy * dy).max(0.0).sqrt();
        (self.center.x() + value, self.center.x() - value)
    }

    /// Tolerant boundary membership.
    pub fn contains(&self, p: &Point) -> bool {
        let dx = p.x() - self.center.x();
        let dy = p.y() - self.center.y();
        almost_equal(dx * dx + dy * dy, self.radius * self.radius)
    }

    /// Boundary membership with precision limited to `digits` decimal
    /// places. Negative `digits` is a parameter error.
    pub fn contains_rounded(&self, p: &Point, digits: i32) -> Result<bool, GeometryError> {
        let dx = p.x() - self.center.x();
        let dy = p.y() - self.center.y();
        approx_eq_digits(dx * dx + dy * dy, self.radius * self.radius, digits)
    }

    /// Snap a near-miss point onto the boundary, holding the chosen
    /// coordinate fixed and picking the nearer of the two roots.
    pub fn snap_to_boundary(&self, p: &Point, axis: SnapAxis) -> Point {
        match axis {
            SnapAxis::HoldX => {
                let (upper, lower) = self.y_roots(p.x());
                let y = if (upper - p.y()).abs() < (lower - p.y()).abs() {
                    upper
                } else {
                    lower
                };
                Point::new(p.x(), y)
            },
            SnapAxis::HoldY => {
                let (greater, lesser) = self.x_roots(p.y());
                let x = if (greater - p.x()).abs() < (lesser - p.x()).abs() {
                    greater
                } else {
                    lesser
                };
                Point::new(x, p.y())
            },
        }
    }

    /// The angle of a boundary point, measured from the positive x-axis
    /// through the center, in `[0°, 360°)`.
    ///
    /// Off-boundary points are snapped first (holding `y`), so the result
    /// for those is approximate by construction.
    pub fn angle_of(&self, p: &Point) -> Result<Angle, GeometryError> {
        let exact = if self.contains(p) {
            p.clone()
        } else {
            self.snap_to_boundary(p, SnapAxis::HoldY)
        };

        let line = Line::through(&self.center, &exact)?;
        match line {
            Line::ConstX { .. } => {
                if exact.y() > self.center.y() {
                    Angle::new(90.0)
                } else {
                    Angle::new(270.0)
                }
            },
            Line::ConstY { .. } => {
                if exact.x() > self.center.x() {
                    Angle::new(0.0)
                } else {
                    Angle::new(180.0)
                }
            },
            Line::Normal { k, .. } => {
                // atan covers (-90°, 90°); shift by the side of the center
                let mut degrees = k.atan().to_degrees();
                if exact.x() < self.center.x() {
                    degrees += 180.0;
                } else if degrees < 0.0 {
                    degrees += 360.0;
                }
                Angle::new(degrees)
            },
        }
    }

    /// The boundary point at a given angle — the inverse of
    /// [`Circle::angle_of`].
    ///
    /// Picks the upper y-root for angles up to 180° and the lower one past
    /// it; this half-selection keeps the angle ↔ point pair a bijection.
    pub fn point_at(&self, angle: &Angle) -> Point {
        let x = angle.radians().cos() * self.radius + self.center.x();
        let (upper, lower) = self.y_roots(x);
        let y = if angle.degrees() > 180.0 { lower } else { upper };
        Point::new(x, y)
    }
}

/// An arc of a borrowed [`Circle`], stored as an angle interval. The arc
/// must not outlive its circle.
#[derive(Clone, Debug)]
pub struct CircleArc<'a> {
    circle: &'a Circle,
    /// Start and end angle; the arc runs counter-clockwise from the first
    /// to the second, wrapping through 0° when the first is greater.
    bounds: [Angle; 2],
}

impl<'a> CircleArc<'a> {
    /// Arc through three distinct boundary points: two endpoints and a
    /// point between them selecting which of the two arcs is meant.
    pub fn new(
        circle: &'a Circle,
        a: &Point,
        b: &Point,
        between: &Point,
    ) -> Result<Self, GeometryError> {
        for point in [a, b, between] {
            if !circle.contains(point) {
                return Err(GeometryError::PointNotOnCircle(point.clone()));
            }
        }
        if a == b || b == between || a == between {
            return Err(GeometryError::CoincidentPoints(if a == b {
                a.clone()
            } else {
                between.clone()
            }));
        }

        let angle_a = circle.angle_of(a)?;
        let angle_b = circle.angle_of(b)?;
        let angle_between = circle.angle_of(between)?;

        let (lo, hi) = if angle_a <= angle_b {
            (angle_a, angle_b)
        } else {
            (angle_b, angle_a)
        };
        let bounds = if lo <= angle_between && angle_between <= hi {
            [lo, hi]
        } else {
            // the selector sits on the other side: take the wrapping arc
            [hi, lo]
        };
        Ok(Self { circle, bounds })
    }

    /// Like [`CircleArc::new`] but snapping all three points onto the
    /// boundary first.
    pub fn snapped(
        circle: &'a Circle,
        a: &Point,
        b: &Point,
        between: &Point,
        axis: SnapAxis,
    ) -> Result<Self, GeometryError> {
        Self::new(
            circle,
            &circle.snap_to_boundary(a, axis),
            &circle.snap_to_boundary(b, axis),
            &circle.snap_to_boundary(between, axis),
        )
    }

    #[inline]
    pub fn circle(&self) -> &Circle {
        self.circle
    }

    /// Start and end angle of the arc.
    #[inline]
    pub fn bounds(&self) -> (Angle, Angle) {
        (self.bounds[0], self.bounds[1])
    }

    /// Does the point (snapped if off-boundary) fall on this arc?
    pub fn contains(&self, p: &Point) -> Result<bool, GeometryError> {
        let angle = self.circle.angle_of(p)?;
        let [start, end] = self.bounds;
        if start <= end {
            Ok(start <= angle && angle <= end)
        } else {
            Ok(angle >= start || angle <= end)
        }
    }

    /// The boundary point halfway along the arc.
    pub fn midpoint(&self) -> Result<Point, GeometryError> {
        let [start, end] = self.bounds;
        let degrees = if start < end {
            (start.degrees() + end.degrees()) / 2.0
        } else if start > end {
            let span = 360.0 - start.degrees() + end.degrees();
            (start.degrees() + span / 2.0).rem_euclid(360.0)
        } else {
            start.degrees()
        };
        Ok(self.circle.point_at(&Angle::new(degrees)?))
    }
}
