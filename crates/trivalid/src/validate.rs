//! Triangulation validator.
//!
//! Decides whether a set of triangles is a triangulation of a simple
//! counter-clockwise polygon that reuses its vertices verbatim, using only the
//! exact predicates of `crate::predicates`.
//!
//! Checks, in order, stopping at the first failure:
//! 1. count: exactly `n - 2` triangles,
//! 2. membership: every triangle vertex is a polygon vertex (exact equality),
//! 3. validity: every triangle is non-degenerate and counter-clockwise,
//! 4. containment: every triangle lies inside the polygon,
//! 5. overlap: no two triangles have intersecting interiors (all pairs).
//!
//! The cheap structural checks run first; the quadratic pair scan runs last.

use std::collections::HashSet;

use thiserror::Error;

use crate::geom::{Point, PolygonView, Triangle};
use crate::predicates::{intersect, is_within, validate_convex_polygon_vertices};

/// First rule a candidate triangulation violates. Indices refer to the
/// caller's triangle slice.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("incorrect number of triangles: expected {expected}, actual {actual}")]
    WrongTriangleCount { expected: usize, actual: usize },
    #[error("triangles[{triangle}], vertex {vertex} {point} does not occur in the polygon")]
    UnknownVertex {
        triangle: usize,
        vertex: usize,
        point: Point,
    },
    #[error("triangles[{triangle}] is degenerate or not counter-clockwise")]
    DegenerateOrMiswoundTriangle { triangle: usize },
    #[error("triangles[{triangle}] is not contained within the polygon")]
    TriangleNotContained { triangle: usize },
    #[error("triangles[{first}] and triangles[{second}] overlap")]
    TrianglesOverlap { first: usize, second: usize },
}

/// Fieldless counterpart of `Violation`, for tallies and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    WrongTriangleCount,
    UnknownVertex,
    DegenerateOrMiswoundTriangle,
    TriangleNotContained,
    TrianglesOverlap,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::WrongTriangleCount { .. } => ViolationKind::WrongTriangleCount,
            Violation::UnknownVertex { .. } => ViolationKind::UnknownVertex,
            Violation::DegenerateOrMiswoundTriangle { .. } => {
                ViolationKind::DegenerateOrMiswoundTriangle
            }
            Violation::TriangleNotContained { .. } => ViolationKind::TriangleNotContained,
            Violation::TrianglesOverlap { .. } => ViolationKind::TrianglesOverlap,
        }
    }
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::WrongTriangleCount => "wrong_triangle_count",
            ViolationKind::UnknownVertex => "unknown_vertex",
            ViolationKind::DegenerateOrMiswoundTriangle => "degenerate_or_miswound_triangle",
            ViolationKind::TriangleNotContained => "triangle_not_contained",
            ViolationKind::TrianglesOverlap => "triangles_overlap",
        }
    }
}

/// Validate that `triangles` tessellate `polygon` using only its vertices.
///
/// Pre: `polygon` is simple and counter-clockwise without repeated vertices;
/// this is not re-checked. Malformed triangulations never panic, they yield
/// the first `Violation`.
///
/// Each check runs over the whole slice before the next one starts. When
/// several triangles are bad, the reported violation is the first failing
/// check, not the first failing triangle: a miswound `triangles[0]` loses to
/// an unknown vertex in `triangles[5]`.
pub fn validate_triangulation(
    polygon: PolygonView<'_>,
    triangles: &[Triangle],
) -> Result<(), Violation> {
    let result = check(polygon, triangles);
    if let Err(violation) = &result {
        tracing::debug!(
            vertices = polygon.len(),
            triangles = triangles.len(),
            kind = violation.kind().as_str(),
            "rejected triangulation: {violation}"
        );
    }
    result
}

/// `validate_triangulation(..).is_ok()`.
#[inline]
pub fn is_valid_triangulation(polygon: PolygonView<'_>, triangles: &[Triangle]) -> bool {
    validate_triangulation(polygon, triangles).is_ok()
}

fn check(polygon: PolygonView<'_>, triangles: &[Triangle]) -> Result<(), Violation> {
    let expected = polygon.len() - 2;
    if triangles.len() != expected {
        return Err(Violation::WrongTriangleCount {
            expected,
            actual: triangles.len(),
        });
    }

    let vertex_set: HashSet<Point> = polygon.iter().copied().collect();
    for (i, triangle) in triangles.iter().enumerate() {
        for (j, point) in triangle.iter().enumerate() {
            if !vertex_set.contains(point) {
                return Err(Violation::UnknownVertex {
                    triangle: i,
                    vertex: j,
                    point: *point,
                });
            }
        }
    }

    if let Some(i) = triangles
        .iter()
        .position(|t| !validate_convex_polygon_vertices(t))
    {
        return Err(Violation::DegenerateOrMiswoundTriangle { triangle: i });
    }

    if let Some(i) = triangles.iter().position(|t| !is_within(polygon, t)) {
        return Err(Violation::TriangleNotContained { triangle: i });
    }

    for (i, a) in triangles.iter().enumerate() {
        for (j, b) in triangles.iter().enumerate().skip(i + 1) {
            if intersect(a, b) {
                return Err(Violation::TrianglesOverlap {
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
