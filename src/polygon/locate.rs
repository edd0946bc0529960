//! Batch point location: which input points fall inside a query window?
//!
//! The `Simple` method is the exact O(n) scan and doubles as the
//! correctness baseline; the `Grid` method buckets the input points once
//! and then answers window queries in near O(k), re-testing only the
//! points of cells that straddle the window boundary.

use super::Polygon;
use crate::errors::GeometryError;
use crate::float_types::{Real, is_zero};
use crate::point::Point;
use crate::rect::Rect;
use hashbrown::HashMap;
use nalgebra::Point2;

/// Which point-location strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointLocationMethod {
    /// Exact linear scan
    Simple,
    /// Grid-bucketed index with boundary-cell re-testing
    Grid,
}

/// Bucketing target: roughly this many points per grid cell.
const CELL_DENSITY: Real = 3.0;

/// All input points inside the window (boundary-inclusive), by the chosen
/// method. Both methods return the same point set.
pub fn locate_points(
    points: &[Point],
    window: &Rect,
    method: PointLocationMethod,
) -> Vec<Point> {
    match method {
        PointLocationMethod::Simple => points
            .iter()
            .filter(|p| window.contains(p))
            .cloned()
            .collect(),
        PointLocationMethod::Grid => PointGrid::build(points).query(window),
    }
}

impl Polygon {
    /// [`locate_points`] with this polygon as the query window; the polygon
    /// must be an axis-aligned rectangle.
    pub fn locate_points(
        &self,
        points: &[Point],
        method: PointLocationMethod,
    ) -> Result<Vec<Point>, GeometryError> {
        let window = Rect::try_from_polygon(self)?;
        Ok(locate_points(points, &window, method))
    }
}

/// A one-shot spatial index over a borrowed point set.
///
/// The bounding box of the inputs is partitioned into `⌈√(n/density)⌉`
/// rows and columns and every point is bucketed into exactly one cell, so
/// no point can be double counted when a query touches cell boundaries.
pub struct PointGrid<'a> {
    points: &'a [Point],
    bounds: Rect,
    side: usize,
    cell_width: Real,
    cell_height: Real,
    cells: HashMap<(usize, usize), Vec<usize>>,
}

impl<'a> PointGrid<'a> {
    /// Bucket the points. O(n).
    pub fn build(points: &'a [Point]) -> Self {
        let mut mins = Point2::new(Real::MAX, Real::MAX);
        let mut maxs = Point2::new(Real::MIN, Real::MIN);
        for p in points {
            mins.x = mins.x.min(p.x());
            mins.y = mins.y.min(p.y());
            maxs.x = maxs.x.max(p.x());
            maxs.y = maxs.y.max(p.y());
        }
        if points.is_empty() {
            mins = Point2::new(0.0, 0.0);
            maxs = Point2::new(0.0, 0.0);
        }
        let bounds = Rect { mins, maxs };

        let side = ((points.len() as Real / CELL_DENSITY).sqrt().ceil() as usize).max(1);
        let cell_width = bounds.width() / side as Real;
        let cell_height = bounds.height() / side as Real;

        let mut grid = Self {
            points,
            bounds,
            side,
            cell_width,
            cell_height,
            cells: HashMap::new(),
        };
        for (i, p) in points.iter().enumerate() {
            let cell = grid.cell_of(p);
            grid.cells.entry(cell).or_default().push(i);
        }
        grid
    }

    /// The single cell a point belongs to (clamped to the grid).
    fn cell_of(&self, p: &Point) -> (usize, usize) {
        (
            self.axis_index(p.x() - self.bounds.mins.x, self.cell_width),
            self.axis_index(p.y() - self.bounds.mins.y, self.cell_height),
        )
    }

    fn axis_index(&self, offset: Real, cell_size: Real) -> usize {
        if is_zero(cell_size) {
            return 0;
        }
        ((offset / cell_size).floor() as isize).clamp(0, self.side as isize - 1) as usize
    }

    /// The rectangle covered by a cell.
    fn cell_rect(&self, col: usize, row: usize) -> Rect {
        let min_x = self.bounds.mins.x + col as Real * self.cell_width;
        let min_y = self.bounds.mins.y + row as Real * self.cell_height;
        Rect {
            mins: Point2::new(min_x, min_y),
            maxs: Point2::new(min_x + self.cell_width, min_y + self.cell_height),
        }
    }

    /// All indexed points inside the window: interior cells are accepted
    /// wholesale, boundary cells are re-tested against the exact predicate.
    pub fn query(&self, window: &Rect) -> Vec<Point> {
        if !self.bounds.intersects(window) {
            return Vec::new();
        }

        let (col_min, row_min) = (
            self.axis_index(window.mins.x - self.bounds.mins.x, self.cell_width),
            self.axis_index(window.mins.y - self.bounds.mins.y, self.cell_height),
        );
        let (col_max, row_max) = (
            self.axis_index(window.maxs.x - self.bounds.mins.x, self.cell_width),
            self.axis_index(window.maxs.y - self.bounds.mins.y, self.cell_height),
        );

        let mut found = Vec::new();
        for col in col_min..=col_max {
            for row in row_min..=row_max {
                let Some(indices) = self.cells.get(&(col, row)) else {
                    continue;
                };
                if window.contains_rect(&self.cell_rect(col, row)) {
                    found.extend(indices.iter().map(|&i| self.points[i].clone()));
                } else {
                    found.extend(
                        indices
                            .iter()
                            .map(|&i| &self.points[i])
                            .filter(|p| window.contains(p))
                            .cloned(),
                    );
                }
            }
        }
        found
    }
}
