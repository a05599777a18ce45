//! Seeded random star polygons.
//!
//! Purpose
//! - Inputs for tests, benches and the shootout when no GeoJSON data is at
//!   hand. Every ring is star-shaped about the origin (one vertex per angular
//!   sector, angles increasing), so it is simple, and the radial noise makes
//!   it strongly non-convex.
//!
//! Determinism
//! - A draw depends only on its `RadialCfg` and `ReplayToken`; the token's
//!   `seed` and `index` together key the RNG, so draw `k` of a run can be
//!   reproduced on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, Polygon};

/// How many vertices a star gets. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw(self, rng: &mut StdRng) -> usize {
        match self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let min = min.max(3);
                rng.gen_range(min..=max.max(min))
            }
        }
    }
}

/// Shape of the stars drawn by `draw_star_polygon`.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// How far a vertex may wander inside its sector, as a fraction of the
    /// sector width. Kept below one half so neighbours never swap.
    pub angle_jitter_frac: f64,
    /// Relative radius noise: radii fall in `base_radius * [1 - j, 1 + j]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Rotate the whole star by a random angle.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(64),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 100.0,
            random_phase: true,
        }
    }
}

/// Identifies one draw: run `seed`, draw number `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw one star polygon, rounded onto the coordinate grid and normalized.
///
/// `None` when rounding collapses the ring, which takes a tiny `base_radius`
/// or an enormous vertex count.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    use std::f64::consts::TAU;

    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let sector = TAU / n as f64;
    let wander = cfg.angle_jitter_frac.clamp(0.0, 0.49) * sector;
    let noise = cfg.radial_jitter.clamp(0.0, 0.99);
    let radius = cfg.base_radius.max(1e-6);
    let phase = if cfg.random_phase {
        rng.gen_range(0.0..TAU)
    } else {
        0.0
    };

    let mut ring = Vec::with_capacity(n);
    for k in 0..n {
        let theta = phase + k as f64 * sector + rng.gen_range(-1.0..=1.0) * wander;
        let r = radius * (1.0 + rng.gen_range(-1.0..=1.0) * noise);
        ring.push(Point::try_from(Vector2::new(r * theta.cos(), r * theta.sin())).ok()?);
    }
    Polygon::from_ring(ring).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok).expect("poly");
        let p2 = draw_star_polygon(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
        let p3 = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_are_simple_and_ccw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            ..RadialCfg::default()
        };
        for index in 0..50 {
            let p = draw_star_polygon(cfg, ReplayToken { seed: 3, index }).expect("poly");
            assert!(p.len() >= 3);
            assert!(p.signed_area2().is_positive());
            assert!(p.is_simple(), "draw {index} is not simple");
        }
    }
}
