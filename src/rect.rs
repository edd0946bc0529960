//! Axis-aligned rectangles: the clip window and the batch query window.

use crate::errors::GeometryError;
use crate::float_types::{Real, is_zero};
use crate::point::Point;
use crate::polygon::Polygon;
use nalgebra::Point2;

/// An axis-aligned rectangle. Membership is boundary-inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Rect {
    /// Rectangle from two opposite corners, in any order.
    pub fn from_corners(a: Point2<Real>, b: Point2<Real>) -> Self {
        Self {
            mins: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            maxs: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Validate a polygon as an axis-aligned rectangle window.
    ///
    /// The polygon must have exactly four vertices and every edge must be
    /// axis-parallel; anything else is a hard error, never a best-effort
    /// bounding box.
    pub fn try_from_polygon(polygon: &Polygon) -> Result<Self, GeometryError> {
        if polygon.len() != 4 {
            return Err(GeometryError::NotARectangle(format!(
                "window must have exactly 4 vertices, got {}",
                polygon.len()
            )));
        }
        for i in 0..4 {
            let a = polygon.vertex(i as isize);
            let b = polygon.vertex(i as isize + 1);
            let dx = b.x() - a.x();
            let dy = b.y() - a.y();
            if !is_zero(dx) && !is_zero(dy) {
                return Err(GeometryError::NotARectangle(format!(
                    "edge {a} → {b} is not axis-parallel"
                )));
            }
        }

        let xs: Vec<Real> = polygon.vertices().iter().map(Point::x).collect();
        let ys: Vec<Real> = polygon.vertices().iter().map(Point::y).collect();
        let rect = Self {
            mins: Point2::new(
                xs.iter().cloned().fold(Real::MAX, Real::min),
                ys.iter().cloned().fold(Real::MAX, Real::min),
            ),
            maxs: Point2::new(
                xs.iter().cloned().fold(Real::MIN, Real::max),
                ys.iter().cloned().fold(Real::MIN, Real::max),
            ),
        };
        if is_zero(rect.width()) || is_zero(rect.height()) {
            return Err(GeometryError::NotARectangle(
                "window has zero width or height".into(),
            ));
        }
        Ok(rect)
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
        )
    }

    /// Boundary-inclusive membership.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.mins.x <= p.x() && p.x() <= self.maxs.x && self.mins.y <= p.y() && p.y() <= self.maxs.y
    }

    /// Is `other` entirely inside this rectangle?
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.mins.x <= other.mins.x
            && self.mins.y <= other.mins.y
            && other.maxs.x <= self.maxs.x
            && other.maxs.y <= self.maxs.y
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
    }
}
