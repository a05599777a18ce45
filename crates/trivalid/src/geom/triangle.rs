use std::fmt;
use std::ops::Index;

use super::point::{Point, Segment};

/// Three grid points in stored order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Edge `i` runs from vertex `i` to its successor.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.0[i], self.0[(i + 1) % 3])
    }

    pub fn edges(&self) -> [Segment; 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }

    /// Same points, opposite winding.
    pub fn reversed(&self) -> Triangle {
        Triangle([self.0[0], self.0[2], self.0[1]])
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(v: [Point; 3]) -> Self {
        Triangle(v)
    }
}

impl Index<usize> for Triangle {
    type Output = Point;
    #[inline]
    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Triangle {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
