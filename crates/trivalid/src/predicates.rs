//! Exact geometric predicates used by the validator.
//!
//! Every decision reduces to the sign of a `ScalarDeg2` cross product, so the
//! answers are exact for all inputs in the coordinate domain.
//!
//! Sign convention
//! - `cross(dir, p - start) > 0`: `p` is strictly left of the directed edge.
//! - Triangles and polygon rings are counter-clockwise, so "left" is the
//!   interior side of their edges.

use std::cmp::Ordering;

use crate::geom::{cross, dot, Point, PolygonView, Segment, Triangle, Vector};

/// Side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Collinear,
    Right,
}

/// Sign of `cross(edge_dir, point - edge_start)`.
#[inline]
pub fn orientation_sign(edge_start: Point, edge_dir: Vector, point: Point) -> Orientation {
    match cross(edge_dir, point - edge_start).sign() {
        Ordering::Greater => Orientation::Left,
        Ordering::Equal => Orientation::Collinear,
        Ordering::Less => Orientation::Right,
    }
}

/// Whether no vertex of `triangle` lies strictly on the interior (left) side
/// of the edge through `edge_start` with direction `edge_dir`.
///
/// For an edge of a counter-clockwise triangle this means the line through the
/// edge separates the two triangles; touching the line is allowed.
pub fn is_separating_axis(edge_start: Point, edge_dir: Vector, triangle: &Triangle) -> bool {
    triangle
        .iter()
        .all(|&q| orientation_sign(edge_start, edge_dir, q) != Orientation::Left)
}

/// Whether the interiors of two counter-clockwise triangles overlap.
///
/// Separating-axis test over the six edges of both triangles. Triangles that
/// only share a vertex or an edge do not intersect.
pub fn intersect(a: &Triangle, b: &Triangle) -> bool {
    for i in 0..3 {
        let ea = a.edge(i);
        let eb = b.edge(i);
        if is_separating_axis(ea.start, ea.direction(), b)
            || is_separating_axis(eb.start, eb.direction(), a)
        {
            return false;
        }
    }
    true
}

/// Whether `a` and `b` cross properly: each segment has its endpoints strictly
/// on opposite sides of the other's line. Touching endpoints and collinear
/// overlap do not count.
pub fn interiors_cross(a: Segment, b: Segment) -> bool {
    let b_dir = b.direction();
    let a_start_side = cross(b_dir, a.start - b.start);
    let a_end_side = cross(b_dir, a.end - b.start);
    if a_start_side.sign() == a_end_side.sign() || a_start_side.is_zero() || a_end_side.is_zero() {
        return false;
    }

    let a_dir = a.direction();
    let b_start_side = cross(a_dir, b.start - a.start);
    let b_end_side = cross(a_dir, b.end - a.start);
    if b_start_side.sign() == b_end_side.sign() || b_start_side.is_zero() || b_end_side.is_zero() {
        return false;
    }

    true
}

/// Whether `point` lies on the closed segment.
pub fn on_segment(segment: Segment, point: Point) -> bool {
    let d = segment.direction();
    let r = point - segment.start;
    if !cross(d, r).is_zero() {
        return false;
    }
    // Collinear: between the endpoints iff 0 <= r·d <= d·d.
    let t = dot(r, d);
    !t.is_negative() && t <= dot(d, d)
}

/// Whether the closed segments share at least one point.
pub fn segments_intersect(a: Segment, b: Segment) -> bool {
    let o1 = orientation_sign(a.start, a.direction(), b.start);
    let o2 = orientation_sign(a.start, a.direction(), b.end);
    let o3 = orientation_sign(b.start, b.direction(), a.start);
    let o4 = orientation_sign(b.start, b.direction(), a.end);
    let straddles = |p: Orientation, q: Orientation| {
        matches!(
            (p, q),
            (Orientation::Left, Orientation::Right) | (Orientation::Right, Orientation::Left)
        )
    };
    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }
    on_segment(a, b.start) || on_segment(a, b.end) || on_segment(b, a.start) || on_segment(b, a.end)
}

/// Closed containment test (winding number, exact).
///
/// Points on the boundary count as contained: the validator only asks about
/// triangle vertices, and those must coincide with polygon vertices.
pub fn point_in_polygon(polygon: PolygonView<'_>, point: Point) -> bool {
    let mut winding: i64 = 0;
    for edge in polygon.edges() {
        if on_segment(edge, point) {
            return true;
        }
        let side = orientation_sign(edge.start, edge.direction(), point);
        if edge.start.y <= point.y {
            if edge.end.y > point.y && side == Orientation::Left {
                winding += 1;
            }
        } else if edge.end.y <= point.y && side == Orientation::Right {
            winding -= 1;
        }
    }
    winding != 0
}

/// Whether `triangle` lies inside `polygon`: every vertex is contained, no
/// triangle edge properly crosses a polygon edge, and every triangle edge that
/// is not a polygon edge leaves each polygon-vertex endpoint into the interior.
///
/// The last condition catches a triangle sitting in the mouth of a notch: all
/// its corners are polygon vertices and its closing edge only touches the ring
/// at its endpoints.
pub fn is_within(polygon: PolygonView<'_>, triangle: &Triangle) -> bool {
    for i in 0..3 {
        if !point_in_polygon(polygon, triangle[i]) {
            return false;
        }
        let triangle_edge = triangle.edge(i);
        if polygon
            .edges()
            .any(|polygon_edge| interiors_cross(triangle_edge, polygon_edge))
        {
            return false;
        }
        if !diagonal_enters_interior(polygon, triangle_edge)
            || !diagonal_enters_interior(polygon, Segment::new(triangle_edge.end, triangle_edge.start))
        {
            return false;
        }
    }
    true
}

/// Whether `segment` starts into the interior angle of `polygon` at
/// `segment.start`. True when the start is not a polygon vertex or when the
/// segment is a polygon edge.
fn diagonal_enters_interior(polygon: PolygonView<'_>, segment: Segment) -> bool {
    let v = polygon.vertices();
    let n = v.len();
    let Some(k) = v.iter().position(|&p| p == segment.start) else {
        return true;
    };
    let (prev, next) = (v[(k + n - 1) % n], v[(k + 1) % n]);
    if segment.end == prev || segment.end == next {
        return true;
    }
    in_cone(prev, segment.start, next, segment.direction())
}

/// Whether direction `d` from `u` lies strictly inside the interior angle of a
/// counter-clockwise ring at `u`, whose neighbours are `prev` and `next`.
fn in_cone(prev: Point, u: Point, next: Point, d: Vector) -> bool {
    let to_next = next - u;
    let to_prev = prev - u;
    let left_of_next = cross(to_next, d).is_positive();
    let right_of_prev = cross(d, to_prev).is_positive();
    match cross(u - prev, to_next).sign() {
        // Convex corner: the cone is the wedge between the two edges.
        Ordering::Greater => left_of_next && right_of_prev,
        // Straight corner: the open half-plane left of the edges.
        Ordering::Equal => left_of_next,
        // Reflex corner: everything except the closed exterior wedge.
        Ordering::Less => left_of_next || right_of_prev,
    }
}

/// Whether the vertices, in stored order, form a non-degenerate convex polygon
/// wound counter-clockwise: no turn is clockwise and not all are collinear.
pub fn validate_convex_polygon_vertices(triangle: &Triangle) -> bool {
    let mut any_left = false;
    for i in 0..3 {
        let incoming = triangle[(i + 1) % 3] - triangle[i];
        let outgoing = triangle[(i + 2) % 3] - triangle[(i + 1) % 3];
        let turn = cross(incoming, outgoing);
        if turn.is_negative() {
            return false;
        }
        any_left |= turn.is_positive();
    }
    any_left
}
