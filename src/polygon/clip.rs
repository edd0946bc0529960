//! Segment clipping against an axis-aligned rectangular window, by three
//! independent methods. All three accept the same subsegment (up to
//! floating tolerance), which the tests cross-validate.

use super::Polygon;
use crate::errors::GeometryError;
use crate::float_types::{Real, is_zero};
use crate::point::Point;
use crate::rect::Rect;
use crate::segment::LineSegment;
use nalgebra::Vector2;

/// Which clipping algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipSegmentMethod {
    /// Outcode-driven border pushing
    CohenSutherland,
    /// Uniform subdivision into unambiguous subsegments
    SprouleSutherland,
    /// Parametric clipping by inward edge normals
    CyrusBeck,
}

/// Subsegments shorter than this are unambiguously inside or outside.
const SUBSEGMENT_LENGTH: Real = 0.001;

// Cohen–Sutherland outcodes
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

impl Polygon {
    /// Clip a segment against this polygon, which must be an axis-aligned
    /// rectangle (anything else is a hard error).
    ///
    /// `Ok(None)` means the segment lies wholly outside the window.
    pub fn clip_segment(
        &self,
        segment: &LineSegment,
        method: ClipSegmentMethod,
    ) -> Result<Option<LineSegment>, GeometryError> {
        let window = Rect::try_from_polygon(self)?;
        match method {
            ClipSegmentMethod::CohenSutherland => cohen_sutherland(&window, segment),
            ClipSegmentMethod::SprouleSutherland => sproule_sutherland(&window, segment),
            ClipSegmentMethod::CyrusBeck => cyrus_beck(&window, segment),
        }
    }
}

fn outcode(window: &Rect, x: Real, y: Real) -> u8 {
    let mut code = 0;
    if x < window.mins.x {
        code |= LEFT;
    } else if x > window.maxs.x {
        code |= RIGHT;
    }
    if y < window.mins.y {
        code |= BOTTOM;
    } else if y > window.maxs.y {
        code |= TOP;
    }
    code
}

/// Cohen–Sutherland: classify both endpoints by outcode, trivially accept
/// or reject, otherwise push the out-of-window endpoint to the border it
/// violates and re-test.
fn cohen_sutherland(
    window: &Rect,
    segment: &LineSegment,
) -> Result<Option<LineSegment>, GeometryError> {
    let (start, end) = segment.endpoints();
    let (mut x0, mut y0) = (start.x(), start.y());
    let (mut x1, mut y1) = (end.x(), end.y());
    let mut code0 = outcode(window, x0, y0);
    let mut code1 = outcode(window, x1, y1);

    loop {
        if code0 | code1 == 0 {
            return Ok(Some(LineSegment::new(
                Point::new(x0, y0),
                Point::new(x1, y1),
            )?));
        }
        if code0 & code1 != 0 {
            return Ok(None);
        }

        // one endpoint is outside; move it onto the violated border.
        // The selected bit's coordinate difference is nonzero, or both
        // endpoints would share the bit and we would have rejected above.
        let code = if code0 != 0 { code0 } else { code1 };
        let (x, y) = if code & TOP != 0 {
            (x0 + (x1 - x0) * (window.maxs.y - y0) / (y1 - y0), window.maxs.y)
        } else if code & BOTTOM != 0 {
            (x0 + (x1 - x0) * (window.mins.y - y0) / (y1 - y0), window.mins.y)
        } else if code & RIGHT != 0 {
            (window.maxs.x, y0 + (y1 - y0) * (window.maxs.x - x0) / (x1 - x0))
        } else {
            (window.mins.x, y0 + (y1 - y0) * (window.mins.x - x0) / (x1 - x0))
        };
        if code == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(window, x0, y0);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(window, x1, y1);
        }
    }
}

/// Sproule–Sutherland: subdivide into subsegments short enough to be
/// unambiguous, scan them in order, and return the envelope of the
/// contiguous inside run.
fn sproule_sutherland(
    window: &Rect,
    segment: &LineSegment,
) -> Result<Option<LineSegment>, GeometryError> {
    let (a, b) = segment.endpoints();
    let length = segment.length();
    if is_zero(length) {
        if window.contains(a) {
            return Ok(Some(segment.clone()));
        }
        return Ok(None);
    }

    let n = (length / SUBSEGMENT_LENGTH).floor() as usize + 1;
    let point_at = |i: usize| {
        let t = i as Real / n as Real;
        Point::new(
            a.x() + (b.x() - a.x()) * t,
            a.y() + (b.y() - a.y()) * t,
        )
    };

    let mut run: Option<(usize, usize)> = None;
    let mut prev_inside = window.contains(a);
    for i in 0..n {
        let next_inside = window.contains(&point_at(i + 1));
        if prev_inside && next_inside {
            run = match run {
                None => Some((i, i)),
                Some((first, _)) => Some((first, i)),
            };
        } else if run.is_some() {
            break;
        }
        prev_inside = next_inside;
    }

    match run {
        None => Ok(None),
        Some((first, last)) => Ok(Some(LineSegment::new(point_at(first), point_at(last + 1))?)),
    }
}

/// Cyrus–Beck: parametric clip `p(t) = p0 + t·D` against each window edge
/// with inward normal `N`, via `t = -(N·w)/(N·D)`. Entering edges raise
/// `t0`, leaving edges lower `t1`; an empty `[t0, t1]` is a rejection.
fn cyrus_beck(
    window: &Rect,
    segment: &LineSegment,
) -> Result<Option<LineSegment>, GeometryError> {
    let (start, end) = segment.endpoints();
    let p0 = Vector2::new(start.x(), start.y());
    let p1 = Vector2::new(end.x(), end.y());
    let direction = p1 - p0;

    if is_zero(direction.norm()) {
        if window.contains(start) {
            return Ok(Some(segment.clone()));
        }
        return Ok(None);
    }

    // (inward normal, a point on the edge) for each window edge
    let edges: [(Vector2<Real>, Vector2<Real>); 4] = [
        (Vector2::new(1.0, 0.0), Vector2::new(window.mins.x, window.mins.y)),
        (Vector2::new(-1.0, 0.0), Vector2::new(window.maxs.x, window.maxs.y)),
        (Vector2::new(0.0, 1.0), Vector2::new(window.mins.x, window.mins.y)),
        (Vector2::new(0.0, -1.0), Vector2::new(window.maxs.x, window.maxs.y)),
    ];

    let mut t0: Real = 0.0;
    let mut t1: Real = 1.0;
    for (normal, edge_point) in edges {
        let den = normal.dot(&direction);
        let num = normal.dot(&(p0 - edge_point));
        if is_zero(den) {
            // parallel to the edge: fully on the outer side is a rejection
            if num < 0.0 {
                return Ok(None);
            }
            continue;
        }
        let t = -num / den;
        if den > 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
    }

    if t0 > t1 {
        return Ok(None);
    }
    let clipped_start = p0 + direction * t0;
    let clipped_end = p0 + direction * t1;
    Ok(Some(LineSegment::new(
        Point::new(clipped_start.x, clipped_start.y),
        Point::new(clipped_end.x, clipped_end.y),
    )?))
}
