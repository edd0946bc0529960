//! Bounded line segments and the segment-intersection predicates.

use crate::errors::GeometryError;
use crate::float_types::{EPSILON, Real, almost_equal, sign};
use crate::line::Line;
use crate::point::Point;

mod sweep;
pub use sweep::any_intersection;

/// A line segment: a supporting [`Line`] plus two endpoints on it.
///
/// Zero-length segments are permitted; they carry no supporting line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    line: Option<Line>,
    a: Point,
    b: Point,
}

impl LineSegment {
    /// Segment between two finite points. Equal points give a degenerate
    /// zero-length segment with no supporting line.
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        if a == b {
            if !a.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate(a));
            }
            return Ok(Self { line: None, a, b });
        }
        let line = Line::through(&a, &b)?;
        Ok(Self {
            line: Some(line),
            a,
            b,
        })
    }

    /// Segment from an explicit line and endpoints; both endpoints must
    /// satisfy the line's membership predicate (within tolerance).
    pub fn from_line(line: Line, a: Point, b: Point) -> Result<Self, GeometryError> {
        if !line.contains(&a) {
            return Err(GeometryError::EndpointNotOnLine(a));
        }
        if !line.contains(&b) {
            return Err(GeometryError::EndpointNotOnLine(b));
        }
        Ok(Self {
            line: Some(line),
            a,
            b,
        })
    }

    /// Both endpoints, in construction order.
    #[inline]
    pub fn endpoints(&self) -> (&Point, &Point) {
        (&self.a, &self.b)
    }

    #[inline]
    pub fn start(&self) -> &Point {
        &self.a
    }

    #[inline]
    pub fn end(&self) -> &Point {
        &self.b
    }

    /// The supporting line; `None` for zero-length segments.
    #[inline]
    pub fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.line.is_none()
    }

    pub fn length(&self) -> Real {
        self.a.distance_to(&self.b)
    }

    pub fn min_x(&self) -> Real {
        self.a.x().min(self.b.x())
    }

    pub fn max_x(&self) -> Real {
        self.a.x().max(self.b.x())
    }

    pub fn min_y(&self) -> Real {
        self.a.y().min(self.b.y())
    }

    pub fn max_y(&self) -> Real {
        self.a.y().max(self.b.y())
    }

    /// On-segment test: `p` belongs iff its distances to the endpoints sum
    /// to the segment length, within tolerance. Accepts the endpoints.
    pub fn contains(&self, p: &Point) -> bool {
        almost_equal(
            p.distance_to(&self.a) + p.distance_to(&self.b),
            self.a.distance_to(&self.b),
        )
    }

    /// The unique point on the segment with the given `x`.
    ///
    /// `x` outside the segment's span is a parameter error; on a vertical
    /// segment no `x` selects a unique point.
    pub fn point_by_x(&self, x: Real) -> Result<Point, GeometryError> {
        let (min, max) = (self.min_x(), self.max_x());
        if x < min - EPSILON || x > max + EPSILON {
            return Err(GeometryError::CoordinateOutOfSpan { value: x, min, max });
        }
        match &self.line {
            None => Ok(self.a.clone()),
            Some(Line::ConstX { .. }) => Err(GeometryError::UnconstrainedCoordinate(x)),
            Some(line) => {
                // covers_x holds for ConstY and Normal, y_at is total there
                let y = line.y_at(x).unwrap_or_default();
                Ok(Point::new(x, y))
            },
        }
    }

    /// The unique point on the segment with the given `y`.
    pub fn point_by_y(&self, y: Real) -> Result<Point, GeometryError> {
        let (min, max) = (self.min_y(), self.max_y());
        if y < min - EPSILON || y > max + EPSILON {
            return Err(GeometryError::CoordinateOutOfSpan { value: y, min, max });
        }
        match &self.line {
            None => Ok(self.a.clone()),
            Some(Line::ConstY { .. }) => Err(GeometryError::UnconstrainedCoordinate(y)),
            Some(line) => {
                let x = line.x_at(y).unwrap_or_default();
                Ok(Point::new(x, y))
            },
        }
    }

    /// Slide this segment along `other`, which must share exactly one
    /// endpoint with it: the shared endpoint lands on the far end of
    /// `other` and the whole segment translates rigidly with it.
    pub fn translate_along(&self, other: &LineSegment) -> Result<LineSegment, GeometryError> {
        let delta = if self.a == other.a {
            &other.b - &self.a
        } else if self.b == other.a {
            &other.b - &self.b
        } else if self.b == other.b {
            &other.a - &self.b
        } else if self.a == other.b {
            &other.a - &self.a
        } else {
            return Err(GeometryError::NotAnEndpoint(other.a.clone()));
        };
        LineSegment::new(&self.a + &delta, &self.b + &delta)
    }

    /// Robust two-segment intersection predicate over raw endpoints.
    ///
    /// Proper crossings are detected by opposite orientation signs on both
    /// sides; any endpoint lying on the other segment (including a shared
    /// endpoint) counts as an intersection.
    pub fn segments_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
        let d1 = orientation(p3, p4, p1);
        let d2 = orientation(p3, p4, p2);
        let d3 = orientation(p1, p2, p3);
        let d4 = orientation(p1, p2, p4);

        if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0))
            && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
        {
            return true;
        }
        (d1 == 0 && within_bounds(p3, p4, p1))
            || (d2 == 0 && within_bounds(p3, p4, p2))
            || (d3 == 0 && within_bounds(p1, p2, p3))
            || (d4 == 0 && within_bounds(p1, p2, p4))
    }

    /// Does this segment intersect `other` (endpoint touches included)?
    pub fn intersects(&self, other: &LineSegment) -> bool {
        Self::segments_intersect(&self.a, &self.b, &other.a, &other.b)
    }
}

/// Orientation of `c` relative to the directed line `a → b`:
/// `1` left (counter-clockwise), `-1` right, `0` collinear.
#[inline]
fn orientation(a: &Point, b: &Point, c: &Point) -> i8 {
    sign((b - a).perp(&(c - a)))
}

/// Is `p` inside the bounding box of `a`–`b` (with tolerance)?
fn within_bounds(a: &Point, b: &Point, p: &Point) -> bool {
    p.x() >= a.x().min(b.x()) - EPSILON
        && p.x() <= a.x().max(b.x()) + EPSILON
        && p.y() >= a.y().min(b.y()) - EPSILON
        && p.y() <= a.y().max(b.y()) + EPSILON
}

#[cfg(test)]
mod test {
    use super::*;

    fn seg(x0: Real, y0: Real, x1: Real, y1: Real) -> LineSegment {
        LineSegment::new(Point::new(x0, y0), Point::new(x1, y1)).unwrap()
    }

    #[test]
    fn construction() {
        let s = seg(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length(), 5.0);
        assert!(!s.is_degenerate());

        let zero = LineSegment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0)).unwrap();
        assert!(zero.is_degenerate());
        assert_eq!(zero.length(), 0.0);
    }

    #[test]
    fn from_line_validates_endpoints() {
        let line = Line::Normal { k: 1.0, b: 0.0 };
        assert!(
            LineSegment::from_line(line, Point::new(0.0, 0.0), Point::new(2.0, 2.0)).is_ok()
        );
        assert!(matches!(
            LineSegment::from_line(line, Point::new(0.0, 0.0), Point::new(2.0, 3.0)),
            Err(GeometryError::EndpointNotOnLine(_))
        ));
    }

    #[test]
    fn membership_accepts_endpoints() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!(s.contains(&Point::new(2.0, 0.0)));
        assert!(s.contains(&Point::new(0.0, 0.0)));
        assert!(s.contains(&Point::new(4.0, 0.0)));
        assert!(!s.contains(&Point::new(5.0, 0.0)));
        assert!(!s.contains(&Point::new(2.0, 0.1)));
    }

    #[test]
    fn point_by_coordinate() {
        let s = seg(0.0, 0.0, 2.0, 4.0);
        assert_eq!(s.point_by_x(1.0).unwrap(), Point::new(1.0, 2.0));
        assert_eq!(s.point_by_y(4.0).unwrap(), Point::new(2.0, 4.0));
        assert!(matches!(
            s.point_by_x(3.0),
            Err(GeometryError::CoordinateOutOfSpan { .. })
        ));

        let vertical = seg(1.0, 0.0, 1.0, 5.0);
        assert!(matches!(
            vertical.point_by_x(1.0),
            Err(GeometryError::UnconstrainedCoordinate(_))
        ));
        assert_eq!(vertical.point_by_y(2.0).unwrap(), Point::new(1.0, 2.0));
    }

    #[test]
    fn translate_along_shared_endpoint() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        let rail = seg(1.0, 0.0, 1.0, 2.0);
        let moved = s.translate_along(&rail).unwrap();
        assert_eq!(moved.start(), &Point::new(0.0, 2.0));
        assert_eq!(moved.end(), &Point::new(1.0, 2.0));

        let disjoint = seg(5.0, 5.0, 6.0, 5.0);
        assert!(matches!(
            s.translate_along(&disjoint),
            Err(GeometryError::NotAnEndpoint(_))
        ));
    }

    #[test]
    fn proper_crossing() {
        assert!(LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(10.0, 10.0),
            &Point::new(0.0, 10.0),
            &Point::new(10.0, 0.0),
        ));
    }

    #[test]
    fn endpoint_touch_counts() {
        // shared endpoint
        assert!(LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 1.0),
            &Point::new(1.0, 1.0),
            &Point::new(2.0, 0.0),
        ));
        // T-junction: endpoint in the interior of the other segment
        assert!(LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(4.0, 0.0),
            &Point::new(2.0, 0.0),
            &Point::new(2.0, 3.0),
        ));
    }

    #[test]
    fn disjoint_pairs() {
        assert!(!LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 0.0),
            &Point::new(2.0, 0.0),
            &Point::new(3.0, 0.0),
        ));
        assert!(!LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 1.0),
            &Point::new(0.0, 1.0),
            &Point::new(-1.0, 2.0),
        ));
    }

    #[test]
    fn collinear_overlap_counts() {
        assert!(LineSegment::segments_intersect(
            &Point::new(0.0, 0.0),
            &Point::new(2.0, 0.0),
            &Point::new(1.0, 0.0),
            &Point::new(3.0, 0.0),
        ));
    }
}
