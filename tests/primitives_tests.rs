//! Cross-component properties of the primitive types: angles, lines,
//! circles, and the infinity sentinel contract.

mod support;

use geom2d::float_types::Real;
use geom2d::{Angle, AngleRange, Circle, Line, LineSegment, Point};

use crate::support::{approx_eq, pt};

#[test]
fn angle_arithmetic_stays_in_declared_range() {
    let ranges = [
        AngleRange::Full,
        AngleRange::Signed,
        AngleRange::Latitude,
        AngleRange::Custom { min: -45.0, max: 45.0 },
    ];
    for range in ranges {
        let (min, max) = range.bounds();
        let values = [min, min + (max - min) * 0.25, (min + max) / 2.0, max];
        for &va in &values {
            for &vb in &values {
                let a = Angle::with_range(va, range).unwrap();
                let b = Angle::with_range(vb, range).unwrap();
                for result in [a + b, a - b] {
                    assert!(
                        result.degrees() >= min && result.degrees() <= max,
                        "{va}°, {vb}° escaped [{min}, {max}] as {}°",
                        result.degrees()
                    );
                }
            }
        }
    }
}

#[test]
fn equal_angles_compare_equal() {
    for value in [0.0, 1.5, 90.0, 359.999, 360.0] {
        assert_eq!(Angle::new(value).unwrap(), Angle::new(value).unwrap());
    }
}

#[test]
fn line_with_itself_intersects_at_infinity() {
    let lines = [
        Line::ConstX { x: 3.0 },
        Line::ConstY { y: -2.0 },
        Line::Normal { k: 0.5, b: 1.0 },
    ];
    for line in &lines {
        assert!(
            Line::intersect(line, line).is_at_infinity(),
            "{line:?} with itself must hit the infinity sentinel"
        );
    }
}

#[test]
fn line_intersection_is_symmetric_and_consistent() {
    let a = Line::through(&pt(0.0, 0.0), &pt(2.0, 2.0)).unwrap();
    let b = Line::through(&pt(0.0, 2.0), &pt(2.0, 0.0)).unwrap();
    let ab = Line::intersect(&a, &b);
    let ba = Line::intersect(&b, &a);
    assert_eq!(ab, pt(1.0, 1.0));
    assert_eq!(ab, ba);
    assert!(a.contains(&ab));
    assert!(b.contains(&ab));
}

#[test]
fn segment_endpoints_satisfy_their_line() {
    let endpoints = [
        (pt(0.0, 0.0), pt(5.0, 3.0)),
        (pt(1.0, 1.0), pt(1.0, 9.0)),
        (pt(-2.0, 4.0), pt(6.0, 4.0)),
    ];
    for (a, b) in endpoints {
        let segment = LineSegment::new(a.clone(), b.clone()).unwrap();
        let line = segment.line().expect("non-degenerate");
        assert!(line.contains(&a));
        assert!(line.contains(&b));
        assert!(segment.contains(&Point::midpoint(&a, &b)));
    }
}

#[test]
fn circle_angle_point_round_trip() {
    let circles = [
        Circle::new(pt(0.0, 0.0), 1.0).unwrap(),
        Circle::new(pt(3.5, -2.0), 0.25).unwrap(),
        Circle::new(pt(-10.0, 40.0), 12.0).unwrap(),
    ];
    for circle in &circles {
        let mut degrees: Real = 0.0;
        while degrees < 360.0 {
            let angle = Angle::new(degrees).unwrap();
            let point = circle.point_at(&angle);
            assert!(
                circle.contains(&point),
                "point_at({degrees}°) left the boundary of {circle:?}"
            );
            let recovered = circle.angle_of(&point).unwrap();
            assert!(
                approx_eq(recovered.degrees(), degrees, 1e-6),
                "round trip {degrees}° → {}° on {circle:?}",
                recovered.degrees()
            );
            degrees += 0.5;
        }
    }
}

#[test]
fn circle_snap_is_identity_on_boundary() {
    let circle = Circle::new(pt(1.0, 1.0), 2.0).unwrap();
    let on_boundary = pt(3.0, 1.0);
    for axis in [geom2d::SnapAxis::HoldX, geom2d::SnapAxis::HoldY] {
        assert_eq!(circle.snap_to_boundary(&on_boundary, axis), on_boundary);
    }
}

#[test]
fn circumcircle_passes_through_its_three_points() {
    let (a, b, c) = (pt(0.0, 0.0), pt(6.0, 2.0), pt(1.0, 5.0));
    let circle = Circle::circumscribed(&a, &b, &c).unwrap();
    for p in [&a, &b, &c] {
        assert!(circle.contains(p), "{p} is off its own circumcircle");
    }
}
