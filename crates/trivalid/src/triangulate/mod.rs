//! Reference triangulators.
//!
//! Purpose
//! - Give the shootout and the tests producers to judge. The validator treats
//!   every producer as a black box; nothing here is trusted by it.
//!
//! Producers
//! - `EarClipping`: exact-predicate ear clipping, correct for simple rings.
//! - `Earcut`: the `earcut` crate (Mapbox earcut port), indices mapped back
//!   onto the polygon.
//! - `Tess2`: the `tess2-rust` port of libtess2, with and without constrained
//!   Delaunay refinement. Known to emit zero-area triangles now and then.
//! - `Fan`: fan from vertex 0, correct only for convex rings. Serves as a
//!   negative control on concave inputs.

mod ear_clip;
mod earcut_rs;
mod fan;
mod tess2;

pub use ear_clip::EarClipping;
pub use earcut_rs::Earcut;
pub use fan::Fan;
pub use tess2::Tess2;

use crate::geom::{PolygonView, Triangle};

/// A polygon triangulation algorithm.
pub trait Triangulator {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Triangulate a simple counter-clockwise ring. Implementations may return
    /// an incomplete or invalid result on inputs they cannot handle.
    fn triangulate(&self, polygon: PolygonView<'_>) -> Vec<Triangle>;
}

/// Every built-in triangulator, in report order.
pub fn all_triangulators() -> Vec<Box<dyn Triangulator + Send + Sync>> {
    vec![
        Box::new(EarClipping),
        Box::new(Earcut),
        Box::new(Tess2 { cdt: false }),
        Box::new(Tess2 { cdt: true }),
        Box::new(Fan),
    ]
}

/// Look up a built-in triangulator by `name()`.
pub fn triangulator_by_name(name: &str) -> Option<Box<dyn Triangulator + Send + Sync>> {
    all_triangulators().into_iter().find(|t| t.name() == name)
}
