//! Exact validation of polygon triangulations.
//!
//! Layers, leaves first:
//! - `exact`: fixed-point scalars whose cross products never round.
//! - `geom`: points, vectors, segments, triangles, polygon rings.
//! - `predicates`: orientation, proper crossing, containment, separating axes.
//! - `validate`: the triangulation validator built on the predicates.
//!
//! Around the core:
//! - `triangulate`: producers to judge (ear clipping, earcut, libtess2, fan).
//! - `rand`: seeded random simple polygons for tests and benches.

pub mod exact;
pub mod geom;
pub mod predicates;
pub mod rand;
pub mod triangulate;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Polygon, PolygonError, PolygonView, Segment, Triangle, Vector};
pub use validate::{is_valid_triangulation, validate_triangulation, Violation, ViolationKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::exact::{ScalarDeg1, ScalarDeg2, ScalarError};
    pub use crate::geom::{cross, Point, Polygon, PolygonError, PolygonView, Segment, Triangle, Vector};
    pub use crate::predicates::{
        interiors_cross, intersect, is_separating_axis, is_within, orientation_sign,
        point_in_polygon, validate_convex_polygon_vertices, Orientation,
    };
    pub use crate::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::triangulate::{all_triangulators, EarClipping, Earcut, Fan, Tess2, Triangulator};
    pub use crate::validate::{
        is_valid_triangulation, validate_triangulation, Violation, ViolationKind,
    };
}

#[cfg(test)]
pub(crate) mod test_util;
