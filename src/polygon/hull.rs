//! Convex hull construction by two independent methods.

use super::Polygon;
use crate::errors::GeometryError;
use crate::float_types::{Real, is_zero, sign};
use crate::point::Point;
use std::cmp::Ordering;

/// Which hull algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvexHullMethod {
    /// Graham's scan: polar sort around the centroid, then turn-pruning
    Graham,
    /// Jarvis's march, a.k.a. gift wrapping
    Jarvis,
}

impl Polygon {
    /// The convex hull of a point set as a simple counter-clockwise ring.
    ///
    /// Collinear boundary points are dropped — only corners survive.
    /// Fewer than three input points, or an entirely collinear set, is an
    /// error.
    pub fn convex_hull(
        points: &[Point],
        method: ConvexHullMethod,
    ) -> Result<Polygon, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                needed: 3,
                got: points.len(),
            });
        }
        let ring = match method {
            ConvexHullMethod::Graham => graham(points)?,
            ConvexHullMethod::Jarvis => jarvis(points)?,
        };
        Polygon::new(ring)
    }
}

/// Graham's scan around the centroid.
///
/// Points are sorted by polar angle (ties broken by larger radius first, so
/// the nearer duplicate-angle point is discarded), then any vertex making a
/// non-left turn with its ring neighbors is removed, with wraparound, until
/// the ring is convex.
fn graham(points: &[Point]) -> Result<Vec<Point>, GeometryError> {
    let centroid = Point::centroid(points);

    let mut polar: Vec<(Real, Real, &Point)> = points
        .iter()
        .map(|p| {
            let dx = p.x() - centroid.x();
            let dy = p.y() - centroid.y();
            (dy.atan2(dx).rem_euclid(crate::float_types::TAU), dx.hypot(dy), p)
        })
        .collect();
    polar.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
    });

    // one point per angle: the sort put the farthest first
    let mut ring: Vec<Point> = Vec::with_capacity(polar.len());
    let mut last_angle = Real::NAN;
    for (angle, _, p) in polar {
        if !last_angle.is_nan() && is_zero(angle - last_angle) {
            continue;
        }
        last_angle = angle;
        ring.push(p.clone());
    }

    prune_non_left_turns(&mut ring)?;
    Ok(ring)
}

/// Remove every vertex that makes a clockwise or straight turn, wrapping
/// around the ring until it stabilizes.
fn prune_non_left_turns(ring: &mut Vec<Point>) -> Result<(), GeometryError> {
    loop {
        if ring.len() < 3 {
            return Err(GeometryError::CollinearPoints);
        }
        let mut removed = false;
        let mut i = 0;
        while i < ring.len() && ring.len() >= 3 {
            let n = ring.len();
            let prev = &ring[(i + n - 1) % n];
            let cur = &ring[i];
            let next = &ring[(i + 1) % n];
            if sign((cur - prev).perp(&(next - cur))) <= 0 {
                ring.remove(i);
                removed = true;
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
        if !removed {
            return Ok(());
        }
    }
}

/// Jarvis's gift wrapping from the lowest point.
///
/// From each hull vertex, the next one is the candidate with every other
/// point on its left; angle ties go to the farther point, which drops
/// collinear boundary points.
fn jarvis(points: &[Point]) -> Result<Vec<Point>, GeometryError> {
    let mut pts: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !pts.contains(p) {
            pts.push(p.clone());
        }
    }
    if pts.len() < 3 {
        return Err(GeometryError::CollinearPoints);
    }

    let start = lowest_point_index(&pts);
    let mut hull: Vec<Point> = vec![pts[start].clone()];
    let mut current = start;
    loop {
        let mut candidate = (current + 1) % pts.len();
        for i in 0..pts.len() {
            if i == current {
                continue;
            }
            let turn = sign((&pts[candidate] - &pts[current]).perp(&(&pts[i] - &pts[current])));
            let farther = pts[current].distance_to(&pts[i])
                > pts[current].distance_to(&pts[candidate]);
            if turn < 0 || (turn == 0 && farther) {
                candidate = i;
            }
        }
        if candidate == start {
            break;
        }
        hull.push(pts[candidate].clone());
        current = candidate;
        if hull.len() > pts.len() {
            // cannot happen for distinct points; guards float pathologies
            return Err(GeometryError::CollinearPoints);
        }
    }

    if hull.len() < 3 {
        return Err(GeometryError::CollinearPoints);
    }
    Ok(hull)
}

fn lowest_point_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.y() < b.y() || (p.y() == b.y() && p.x() < b.x()) {
            best = i;
        }
    }
    best
}
