//! Cross-validation of the three clipping methods and the two batch
//! point-location methods.

mod support;

use geom2d::float_types::Real;
use geom2d::{ClipSegmentMethod, LineSegment, Point, PointLocationMethod, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::support::{approx_eq, point_set, pt, seg, square};

const CLIP_METHODS: [ClipSegmentMethod; 3] = [
    ClipSegmentMethod::CohenSutherland,
    ClipSegmentMethod::SprouleSutherland,
    ClipSegmentMethod::CyrusBeck,
];

/// The subdivision method is only accurate to its 0.001 subsegment length.
const CLIP_TOLERANCE: Real = 0.002;

#[test]
fn canonical_clip_cross_check() {
    // the reference case: square [0,10]², segment (-5,5)-(15,5)
    let window = square(10.0);
    let segment = seg(-5.0, 5.0, 15.0, 5.0);
    for method in CLIP_METHODS {
        let clipped = window
            .clip_segment(&segment, method)
            .unwrap()
            .unwrap_or_else(|| panic!("{method:?} rejected the canonical segment"));
        let (a, b) = clipped.endpoints();
        assert!(
            approx_eq(a.x(), 0.0, CLIP_TOLERANCE) && approx_eq(a.y(), 5.0, CLIP_TOLERANCE),
            "{method:?} start {a}"
        );
        assert!(
            approx_eq(b.x(), 10.0, CLIP_TOLERANCE) && approx_eq(b.y(), 5.0, CLIP_TOLERANCE),
            "{method:?} end {b}"
        );
    }
}

#[test]
fn clip_methods_agree_on_random_segments() {
    let window = square(10.0);
    let mut rng = StdRng::seed_from_u64(0xc11b);
    for _ in 0..100 {
        let segment = seg(
            rng.gen_range(-15.0..25.0),
            rng.gen_range(-15.0..25.0),
            rng.gen_range(-15.0..25.0),
            rng.gen_range(-15.0..25.0),
        );
        let results: Vec<Option<LineSegment>> = CLIP_METHODS
            .iter()
            .map(|&m| window.clip_segment(&segment, m).unwrap())
            .collect();

        for (result, method) in results.iter().zip(CLIP_METHODS) {
            if let Some(clipped) = result {
                // every accepted endpoint is inside (or on) the window
                let (a, b) = clipped.endpoints();
                for p in [a, b] {
                    assert!(
                        p.x() >= -CLIP_TOLERANCE
                            && p.x() <= 10.0 + CLIP_TOLERANCE
                            && p.y() >= -CLIP_TOLERANCE
                            && p.y() <= 10.0 + CLIP_TOLERANCE,
                        "{method:?} produced out-of-window endpoint {p}"
                    );
                }
            }
        }

        for pair in results.windows(2) {
            match (&pair[0], &pair[1]) {
                (None, None) => {},
                (Some(a), Some(b)) => {
                    let (a0, a1) = a.endpoints();
                    let (b0, b1) = b.endpoints();
                    assert!(
                        approx_eq(a0.x(), b0.x(), CLIP_TOLERANCE)
                            && approx_eq(a0.y(), b0.y(), CLIP_TOLERANCE)
                            && approx_eq(a1.x(), b1.x(), CLIP_TOLERANCE)
                            && approx_eq(a1.y(), b1.y(), CLIP_TOLERANCE),
                        "clip results diverge on {segment:?}"
                    );
                },
                (a, b) => {
                    // accept/reject may legitimately differ only for
                    // segments grazing the window within tolerance
                    let kept = a.as_ref().or(b.as_ref()).unwrap();
                    assert!(
                        kept.length() < CLIP_TOLERANCE,
                        "accept/reject disagreement on {segment:?}"
                    );
                },
            }
        }
    }
}

#[test]
fn simple_and_grid_location_agree_on_random_input() {
    let mut rng = StdRng::seed_from_u64(0x10ca7e);
    for _ in 0..10 {
        let points: Vec<Point> = (0..300)
            .map(|_| pt(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)))
            .collect();
        let window = Polygon::new(vec![
            pt(-5.0, -8.0),
            pt(12.0, -8.0),
            pt(12.0, 6.0),
            pt(-5.0, 6.0),
        ])
        .unwrap();

        let simple = window
            .locate_points(&points, PointLocationMethod::Simple)
            .unwrap();
        let grid = window
            .locate_points(&points, PointLocationMethod::Grid)
            .unwrap();
        assert_eq!(point_set(&simple), point_set(&grid));
        assert!(!simple.is_empty(), "seeded window should catch some points");
    }
}

#[test]
fn location_agrees_when_window_exceeds_point_bounds() {
    let points: Vec<Point> = (0..25)
        .map(|i| pt((i % 5) as Real, (i / 5) as Real))
        .collect();
    let huge = Polygon::new(vec![
        pt(-100.0, -100.0),
        pt(100.0, -100.0),
        pt(100.0, 100.0),
        pt(-100.0, 100.0),
    ])
    .unwrap();
    let simple = huge
        .locate_points(&points, PointLocationMethod::Simple)
        .unwrap();
    let grid = huge.locate_points(&points, PointLocationMethod::Grid).unwrap();
    assert_eq!(simple.len(), 25);
    assert_eq!(point_set(&simple), point_set(&grid));
}

#[test]
fn location_on_lattice_points_and_window_edges() {
    // every point sits on a cell boundary or the window border
    let points: Vec<Point> = (0..=10)
        .flat_map(|i| (0..=10).map(move |j| pt(i as Real, j as Real)))
        .collect();
    let window = square(5.0);
    let simple = window
        .locate_points(&points, PointLocationMethod::Simple)
        .unwrap();
    let grid = window
        .locate_points(&points, PointLocationMethod::Grid)
        .unwrap();
    assert_eq!(simple.len(), 36); // [0,5]² lattice, boundary-inclusive
    assert_eq!(point_set(&simple), point_set(&grid));
}
