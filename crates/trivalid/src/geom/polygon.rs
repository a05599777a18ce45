use thiserror::Error;

use super::point::{cross, Point, Segment};
use crate::exact::{ScalarDeg2, ScalarError};
use crate::predicates::{on_segment, segments_intersect};

/// Reasons a vertex ring cannot be used as a polygon.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolygonError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {0} repeats its predecessor")]
    DuplicateVertex(usize),
    #[error("polygon has zero signed area")]
    ZeroArea,
    #[error("polygon is wound clockwise")]
    NotCounterClockwise,
    #[error(transparent)]
    Coordinate(#[from] ScalarError),
}

/// Borrowed, read-only view of a counter-clockwise ring.
///
/// The only check on construction is the vertex count; simplicity and winding
/// are the producer's responsibility (see `Polygon`).
#[derive(Clone, Copy, Debug)]
pub struct PolygonView<'a> {
    vertices: &'a [Point],
}

impl<'a> PolygonView<'a> {
    pub fn new(vertices: &'a [Point]) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &'a [Point] {
        self.vertices
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, Point> {
        self.vertices.iter()
    }

    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.vertices[i], self.vertices[(i + 1) % self.vertices.len()])
    }

    /// All `n` edges including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + 'a {
        let v = self.vertices;
        (0..v.len()).map(move |i| Segment::new(v[i], v[(i + 1) % v.len()]))
    }

    /// Twice the signed area (positive for counter-clockwise rings).
    pub fn signed_area2(&self) -> ScalarDeg2 {
        let p0 = self.vertices[0];
        // Partial sums may wrap; the final twice-area of an in-domain ring fits.
        self.vertices
            .windows(2)
            .fold(ScalarDeg2::ZERO, |acc, w| {
                acc.wrapping_add(cross(w[0] - p0, w[1] - p0))
            })
    }
}

/// Owned counter-clockwise ring with at least 3 vertices, no consecutive
/// duplicates and positive area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Accept `vertices` as-is if they already satisfy the ring invariants.
    pub fn try_from_vertices(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        let n = vertices.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices(n));
        }
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(PolygonError::DuplicateVertex((i + 1) % n));
            }
        }
        let area = PolygonView { vertices: &vertices }.signed_area2();
        if area.is_zero() {
            return Err(PolygonError::ZeroArea);
        }
        if area.is_negative() {
            return Err(PolygonError::NotCounterClockwise);
        }
        Ok(Self { vertices })
    }

    /// Normalize a raw ring: drop repeated consecutive vertices and the closing
    /// duplicate, reverse clockwise rings, then validate.
    pub fn from_ring(mut vertices: Vec<Point>) -> Result<Self, PolygonError> {
        vertices.dedup();
        while vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        let clockwise = vertices.len() >= 3 && {
            let view = PolygonView { vertices: &vertices };
            view.signed_area2().is_negative()
        };
        if clockwise {
            vertices.reverse();
        }
        Self::try_from_vertices(vertices)
    }

    /// `from_ring` over float coordinates rounded to the grid.
    pub fn from_f64_ring<I>(coords: I) -> Result<Self, PolygonError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let vertices = coords
            .into_iter()
            .map(|(x, y)| Point::try_from_f64(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_ring(vertices)
    }

    #[inline]
    pub fn view(&self) -> PolygonView<'_> {
        PolygonView {
            vertices: &self.vertices,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn signed_area2(&self) -> ScalarDeg2 {
        self.view().signed_area2()
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Exact O(n²) simplicity check.
    ///
    /// Non-adjacent edges may not touch at all; adjacent edges share exactly
    /// their common vertex and may not fold back onto each other.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();
        let view = self.view();
        for i in 0..n {
            let a = view.edge(i);
            for j in (i + 1)..n {
                let b = view.edge(j);
                if j == i + 1 {
                    if on_segment(a, b.end) || on_segment(b, a.start) {
                        return false;
                    }
                } else if i == 0 && j == n - 1 {
                    if on_segment(a, b.start) || on_segment(b, a.end) {
                        return false;
                    }
                } else if segments_intersect(a, b) {
                    return false;
                }
            }
        }
        true
    }
}

impl<'a> From<&'a Polygon> for PolygonView<'a> {
    fn from(p: &'a Polygon) -> Self {
        p.view()
    }
}
