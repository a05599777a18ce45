use super::Triangulator;
use crate::geom::{PolygonView, Triangle};

/// Mapbox earcut (the `earcut` crate) on the outer ring, no holes.
///
/// Earcut works in `f64` and filters collinear and repeated vertices, so its
/// output may have fewer than `n - 2` triangles; the indices it returns are
/// mapped back onto the polygon's exact vertices.
#[derive(Clone, Copy, Debug, Default)]
pub struct Earcut;

impl Triangulator for Earcut {
    fn name(&self) -> &'static str {
        "earcut"
    }

    fn triangulate(&self, polygon: PolygonView<'_>) -> Vec<Triangle> {
        let v = polygon.vertices();
        let data: Vec<f64> = v
            .iter()
            .flat_map(|p| {
                let (x, y) = p.to_f64();
                [x, y]
            })
            .collect();
        let holes: [u32; 0] = [];
        let mut indices: Vec<u32> = Vec::with_capacity(3 * v.len());
        ::earcut::Earcut::new().earcut(data.iter().copied(), &holes, &mut indices);

        indices
            .chunks_exact(3)
            .filter_map(|ix| {
                let a = *v.get(ix[0] as usize)?;
                let b = *v.get(ix[1] as usize)?;
                let c = *v.get(ix[2] as usize)?;
                Some(Triangle::new(a, b, c))
            })
            .collect()
    }
}
