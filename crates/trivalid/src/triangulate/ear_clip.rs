use super::Triangulator;
use crate::geom::{Point, PolygonView, Triangle};
use crate::predicates::{orientation_sign, Orientation};

/// Ear clipping over a doubly linked index ring.
///
/// An ear at `b` (with neighbours `a`, `c`) is a strict left turn whose closed
/// triangle contains no other remaining vertex. Clipping keeps the remaining
/// ring simple, so a simple ring always yields `n - 2` triangles. On rings that
/// are not simple the search can stall; the partial result is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct EarClipping;

impl Triangulator for EarClipping {
    fn name(&self) -> &'static str {
        "ear_clipping"
    }

    fn triangulate(&self, polygon: PolygonView<'_>) -> Vec<Triangle> {
        let v = polygon.vertices();
        let n = v.len();
        let mut ring = Ring::new(n);
        let mut out = Vec::with_capacity(n - 2);

        let mut i = 0usize;
        let mut misses = 0usize;
        while ring.len > 3 {
            if ring.is_ear(v, i) {
                let p = ring.prev[i];
                out.push(Triangle::new(v[p], v[i], v[ring.next[i]]));
                ring.unlink(i);
                // The predecessor may have become an ear.
                i = p;
                misses = 0;
            } else {
                i = ring.next[i];
                misses += 1;
                if misses > ring.len {
                    tracing::warn!(
                        vertices = n,
                        remaining = ring.len,
                        "ear clipping stalled; ring is probably not simple"
                    );
                    return out;
                }
            }
        }
        out.push(Triangle::new(v[ring.prev[i]], v[i], v[ring.next[i]]));
        out
    }
}

struct Ring {
    prev: Vec<usize>,
    next: Vec<usize>,
    len: usize,
}

impl Ring {
    fn new(n: usize) -> Self {
        Self {
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            len: n,
        }
    }

    fn unlink(&mut self, i: usize) {
        let (p, nx) = (self.prev[i], self.next[i]);
        self.next[p] = nx;
        self.prev[nx] = p;
        self.len -= 1;
    }

    fn is_ear(&self, v: &[Point], i: usize) -> bool {
        let (ia, ic) = (self.prev[i], self.next[i]);
        let (a, b, c) = (v[ia], v[i], v[ic]);
        if orientation_sign(a, b - a, c) != Orientation::Left {
            return false;
        }
        let mut k = self.next[ic];
        while k != ia {
            let p = v[k];
            if p != a && p != b && p != c && in_closed_triangle(a, b, c, p) {
                return false;
            }
            k = self.next[k];
        }
        true
    }
}

/// `p` inside or on the boundary of the counter-clockwise triangle `abc`.
fn in_closed_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    orientation_sign(a, b - a, p) != Orientation::Right
        && orientation_sign(b, c - b, p) != Orientation::Right
        && orientation_sign(c, a - c, p) != Orientation::Right
}
