//! Test support library
//! Provides shared helpers & fixtures for the integration tests.
#![allow(dead_code)]

use geom2d::float_types::Real;
use geom2d::{LineSegment, Point, Polygon};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Shorthand 2D point.
pub fn pt(x: Real, y: Real) -> Point {
    Point::new(x, y)
}

/// Shorthand segment between two 2D points.
pub fn seg(x0: Real, y0: Real, x1: Real, y1: Real) -> LineSegment {
    LineSegment::new(pt(x0, y0), pt(x1, y1)).expect("valid test segment")
}

/// An axis-aligned square `[0, size]²` as a polygon.
pub fn square(size: Real) -> Polygon {
    Polygon::new(vec![
        pt(0.0, 0.0),
        pt(size, 0.0),
        pt(size, size),
        pt(0.0, size),
    ])
    .expect("valid square")
}

/// Vertex multiset of a polygon, quantized for order-insensitive equality.
pub fn vertex_set(polygon: &Polygon) -> Vec<(i64, i64)> {
    point_set(polygon.vertices())
}

/// Quantized multiset of points, for order-insensitive set comparison.
pub fn point_set(points: &[Point]) -> Vec<(i64, i64)> {
    let mut keys: Vec<(i64, i64)> = points
        .iter()
        .map(|p| ((p.x() * 4096.0).round() as i64, (p.y() * 4096.0).round() as i64))
        .collect();
    keys.sort_unstable();
    keys
}
