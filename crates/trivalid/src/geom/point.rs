use std::fmt;
use std::ops::{Neg, Sub};

use nalgebra::Vector2;

use crate::exact::{ScalarDeg1, ScalarDeg2, ScalarError};

/// Grid point. Ordered lexicographically by `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: ScalarDeg1,
    pub y: ScalarDeg1,
}

impl Point {
    #[inline]
    pub fn new(x: ScalarDeg1, y: ScalarDeg1) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to the grid.
    pub fn try_from_f64(x: f64, y: f64) -> Result<Self, ScalarError> {
        Ok(Self {
            x: ScalarDeg1::try_from_f64(x)?,
            y: ScalarDeg1::try_from_f64(y)?,
        })
    }

    /// Construct from raw grid coordinates.
    pub fn from_raw(x: i64, y: i64) -> Result<Self, ScalarError> {
        Ok(Self {
            x: ScalarDeg1::from_raw(x)?,
            y: ScalarDeg1::from_raw(y)?,
        })
    }

    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x.to_f64(), p.y.to_f64())
    }
}

impl TryFrom<Vector2<f64>> for Point {
    type Error = ScalarError;
    fn try_from(v: Vector2<f64>) -> Result<Self, Self::Error> {
        Point::try_from_f64(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Difference of two points; components are degree-1 scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: ScalarDeg1,
    pub y: ScalarDeg1,
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// `u.x * v.y - u.y * v.x`, exact. Positive when `v` turns left from `u`.
#[inline]
pub fn cross(u: Vector, v: Vector) -> ScalarDeg2 {
    u.x * v.y - u.y * v.x
}

#[inline]
pub fn dot(u: Vector, v: Vector) -> ScalarDeg2 {
    u.x * v.x + u.y * v.y
}

/// Directed segment `start -> end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }
}
