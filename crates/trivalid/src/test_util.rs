//! Shared fixtures for unit tests.

use crate::geom::{Point, Polygon, Triangle};

pub(crate) fn pt(x: f64, y: f64) -> Point {
    Point::try_from_f64(x, y).unwrap()
}

pub(crate) fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
    Triangle::new(pt(a.0, a.1), pt(b.0, b.1), pt(c.0, c.1))
}

pub(crate) fn poly(coords: &[(f64, f64)]) -> Polygon {
    Polygon::try_from_vertices(coords.iter().map(|&(x, y)| pt(x, y)).collect()).unwrap()
}

pub(crate) fn unit_square() -> Polygon {
    poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// Counter-clockwise ring with a notch at (2, 1) between the two top corners.
pub(crate) fn notched() -> Polygon {
    poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 1.0), (0.0, 4.0)])
}
