//! Variable-dimension points from which every other primitive is composed.
//!
//! A [`Point`] is an ordered sequence of real coordinates — typically two,
//! but the length is dynamic so the same type serves homogeneous/cross
//! product tricks and polar bookkeeping. Points of different lengths are
//! compatible everywhere: the shorter operand is treated as zero-padded.

use crate::float_types::{EPSILON, Real};
use nalgebra::DVector;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point (or vector — the kernel does not distinguish) with a dynamic
/// number of real coordinates.
#[derive(Clone, Debug)]
pub struct Point {
    coords: DVector<Real>,
}

impl Point {
    /// Create a 2D point.
    #[inline]
    pub fn new(x: Real, y: Real) -> Self {
        Self {
            coords: DVector::from_column_slice(&[x, y]),
        }
    }

    /// The 2D origin.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// A zero point with `len` coordinates (at least one).
    pub fn with_len(len: usize) -> Self {
        Self {
            coords: DVector::zeros(len.max(1)),
        }
    }

    /// A point from an explicit coordinate slice.
    pub fn from_slice(coords: &[Real]) -> Self {
        if coords.is_empty() {
            return Self::with_len(1);
        }
        Self {
            coords: DVector::from_column_slice(coords),
        }
    }

    /// The sentinel returned by [`crate::line::Line::intersect`] for
    /// parallel/coincident lines.
    #[inline]
    pub fn at_infinity() -> Self {
        Self::new(Real::INFINITY, Real::INFINITY)
    }

    /// Does any coordinate sit at infinity?
    pub fn is_at_infinity(&self) -> bool {
        self.coords.iter().any(|c| c.is_infinite())
    }

    /// Are all coordinates finite?
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Number of stored coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// A point always stores at least one coordinate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Coordinate `i`, reading past the stored length as zero.
    #[inline]
    pub fn coord(&self, i: usize) -> Real {
        if i < self.coords.len() { self.coords[i] } else { 0.0 }
    }

    /// Set coordinate `i`, growing the point as needed.
    pub fn set(&mut self, i: usize, value: Real) {
        if i >= self.coords.len() {
            self.resize(i + 1);
        }
        self.coords[i] = value;
    }

    #[inline]
    pub fn x(&self) -> Real {
        self.coord(0)
    }

    #[inline]
    pub fn y(&self) -> Real {
        self.coord(1)
    }

    #[inline]
    pub fn z(&self) -> Real {
        self.coord(2)
    }

    #[inline]
    pub fn w(&self) -> Real {
        self.coord(3)
    }

    /// Grow or shrink to `len` coordinates, zero-filling on growth.
    pub fn resize(&mut self, len: usize) {
        self.coords = self.coords.clone().resize_vertically(len.max(1), 0.0);
    }

    /// Count of non-zero coordinates.
    pub fn dimension(&self) -> usize {
        self.coords.iter().filter(|c| **c != 0.0).count()
    }

    /// Euclidean length of the coordinate vector.
    pub fn norm(&self) -> Real {
        self.coords.norm()
    }

    /// Euclidean distance, zero-padding the shorter point.
    pub fn distance_to(&self, other: &Point) -> Real {
        let len = self.len().max(other.len());
        (0..len)
            .map(|i| {
                let d = self.coord(i) - other.coord(i);
                d * d
            })
            .sum::<Real>()
            .sqrt()
    }

    /// Dot product over the shared coordinates.
    pub fn dot(&self, other: &Point) -> Real {
        let len = self.len().min(other.len());
        (0..len).map(|i| self.coord(i) * other.coord(i)).sum()
    }

    /// 2D cross product (the "perp" product): `x·other.y − y·other.x`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn perp(&self, other: &Point) -> Real {
        self.x() * other.y() - self.y() * other.x()
    }

    /// 3D cross product, zero-padding both operands to three coordinates.
    pub fn cross(&self, other: &Point) -> Point {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Point::from_slice(&[ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Angle between two coordinate vectors, in radians.
    pub fn angle_to(&self, other: &Point) -> Real {
        let cos = self.dot(other) / (self.norm() * other.norm());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Angle ∠aob at vertex `o`, in radians.
    pub fn angle_at(o: &Point, a: &Point, b: &Point) -> Real {
        (a - o).angle_to(&(b - o))
    }

    /// Midpoint of two points.
    pub fn midpoint(a: &Point, b: &Point) -> Point {
        let len = a.len().max(b.len());
        Point::from_slice(
            &(0..len)
                .map(|i| (a.coord(i) + b.coord(i)) / 2.0)
                .collect::<Vec<_>>(),
        )
    }

    /// Coordinate-wise average of a non-empty point set.
    pub fn centroid(points: &[Point]) -> Point {
        let len = points.iter().map(Point::len).max().unwrap_or(1);
        let n = points.len().max(1) as Real;
        Point::from_slice(
            &(0..len)
                .map(|i| points.iter().map(|p| p.coord(i)).sum::<Real>() / n)
                .collect::<Vec<_>>(),
        )
    }
}

impl PartialEq for Point {
    /// Exact coordinate equality with zero-padding of the shorter point.
    fn eq(&self, other: &Self) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| self.coord(i) == other.coord(i))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl Add for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        let len = self.len().max(rhs.len());
        Point::from_slice(
            &(0..len)
                .map(|i| self.coord(i) + rhs.coord(i))
                .collect::<Vec<_>>(),
        )
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        &self + &rhs
    }
}

impl Sub for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Point {
        let len = self.len().max(rhs.len());
        Point::from_slice(
            &(0..len)
                .map(|i| self.coord(i) - rhs.coord(i))
                .collect::<Vec<_>>(),
        )
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        &self - &rhs
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            coords: -self.coords.clone(),
        }
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point { coords: -self.coords }
    }
}

impl AddAssign<&Point> for Point {
    fn add_assign(&mut self, rhs: &Point) {
        if self.len() < rhs.len() {
            self.resize(rhs.len());
        }
        for i in 0..rhs.len() {
            self.coords[i] += rhs.coord(i);
        }
    }
}

impl SubAssign<&Point> for Point {
    fn sub_assign(&mut self, rhs: &Point) {
        if self.len() < rhs.len() {
            self.resize(rhs.len());
        }
        for i in 0..rhs.len() {
            self.coords[i] -= rhs.coord(i);
        }
    }
}

impl approx::AbsDiffEq for Point {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| (self.coord(i) - other.coord(i)).abs() <= epsilon)
    }
}

impl approx::RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        Real::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| {
            approx::RelativeEq::relative_eq(
                &self.coord(i),
                &other.coord(i),
                epsilon,
                max_relative,
            )
        })
    }
}
