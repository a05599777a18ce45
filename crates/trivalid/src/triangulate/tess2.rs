use tess2_rust::tess::TESS_UNDEF;
use tess2_rust::{ElementType, TessOption, Tessellator, WindingRule};

use super::Triangulator;
use crate::geom::{Point, PolygonView, Triangle};

/// libtess2 (the `tess2-rust` port), odd winding rule, triangle output.
///
/// The ring is handed over in `f32`. Output vertices that libtess2 maps back
/// to an input vertex become that exact polygon vertex; vertices it invents
/// keep their rounded coordinates, which the validator then reports as
/// unknown. With `cdt` the monotone triangulation is flipped towards a
/// constrained Delaunay one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tess2 {
    pub cdt: bool,
}

impl Triangulator for Tess2 {
    fn name(&self) -> &'static str {
        if self.cdt {
            "tess2_cdt"
        } else {
            "tess2"
        }
    }

    fn triangulate(&self, polygon: PolygonView<'_>) -> Vec<Triangle> {
        let contour: Vec<f32> = polygon
            .iter()
            .flat_map(|p| {
                let (x, y) = p.to_f64();
                [x as f32, y as f32]
            })
            .collect();

        let mut tess = Tessellator::new();
        tess.set_option(TessOption::ConstrainedDelaunayTriangulation, self.cdt);
        let contour: Vec<f64> = contour.iter().map(|&c| f64::from(c)).collect();
        tess.add_contour(2, &contour);
        if !tess.tessellate(WindingRule::Odd, ElementType::Polygons, 3, 2, None) {
            tracing::warn!(
                vertices = polygon.len(),
                status = ?tess.get_status(),
                "libtess2 failed"
            );
            return Vec::new();
        }

        let out = tess.vertices();
        let remap = tess.vertex_indices();
        let vertex = |k: u32| -> Option<Point> {
            let k = k as usize;
            match remap.get(k) {
                Some(&i) if i != TESS_UNDEF => polygon.vertices().get(i as usize).copied(),
                _ => {
                    let (x, y) = (*out.get(2 * k)?, *out.get(2 * k + 1)?);
                    Point::try_from_f64(f64::from(x), f64::from(y)).ok()
                }
            }
        };

        tess.elements()
            .chunks_exact(3)
            .filter_map(|e| Some(Triangle::new(vertex(e[0])?, vertex(e[1])?, vertex(e[2])?)))
            .collect()
    }
}
