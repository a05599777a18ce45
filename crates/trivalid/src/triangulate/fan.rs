use super::Triangulator;
use crate::geom::{PolygonView, Triangle};

/// Fan triangulation around vertex 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fan;

impl Triangulator for Fan {
    fn name(&self) -> &'static str {
        "fan"
    }

    fn triangulate(&self, polygon: PolygonView<'_>) -> Vec<Triangle> {
        let v = polygon.vertices();
        (1..v.len() - 1)
            .map(|i| Triangle::new(v[0], v[i], v[i + 1]))
            .collect()
    }
}
