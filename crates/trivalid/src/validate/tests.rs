use super::*;
use crate::geom::{Point, Polygon};
use crate::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use crate::test_util::{notched, poly, pt, tri, unit_square};
use crate::triangulate::{EarClipping, Triangulator};
use proptest::prelude::*;

fn square_ok() -> Vec<Triangle> {
    vec![
        tri((0.0, 0.0), (1.0, 0.0), (1.0, 1.0)),
        tri((0.0, 0.0), (1.0, 1.0), (0.0, 1.0)),
    ]
}

#[test]
fn square_valid_triangulation() {
    let sq = unit_square();
    assert_eq!(validate_triangulation(sq.view(), &square_ok()), Ok(()));
    assert!(is_valid_triangulation(sq.view(), &square_ok()));
}

#[test]
fn square_gap_and_overlap_is_rejected() {
    let sq = unit_square();
    let tris = vec![
        tri((0.0, 0.0), (1.0, 0.0), (1.0, 1.0)),
        tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
    ];
    let err = validate_triangulation(sq.view(), &tris).unwrap_err();
    assert_eq!(err, Violation::TrianglesOverlap { first: 0, second: 1 });
}

#[test]
fn square_single_triangle_is_wrong_count() {
    let sq = unit_square();
    let err = validate_triangulation(sq.view(), &square_ok()[..1]).unwrap_err();
    assert_eq!(
        err,
        Violation::WrongTriangleCount {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn invented_vertex_is_unknown() {
    let sq = unit_square();
    let tris = vec![
        tri((0.0, 0.0), (1.0, 0.0), (0.5, 0.5)),
        tri((0.0, 0.0), (1.0, 1.0), (0.0, 1.0)),
    ];
    let err = validate_triangulation(sq.view(), &tris).unwrap_err();
    assert_eq!(
        err,
        Violation::UnknownVertex {
            triangle: 0,
            vertex: 2,
            point: pt(0.5, 0.5)
        }
    );
    assert_eq!(err.kind(), ViolationKind::UnknownVertex);
}

#[test]
fn count_is_checked_before_geometry() {
    let n = notched();
    let good = vec![
        tri((0.0, 0.0), (4.0, 0.0), (2.0, 1.0)),
        tri((4.0, 0.0), (4.0, 4.0), (2.0, 1.0)),
        tri((0.0, 0.0), (2.0, 1.0), (0.0, 4.0)),
    ];
    assert_eq!(validate_triangulation(n.view(), &good), Ok(()));

    let mut extra = good.clone();
    extra.push(good[0]);
    assert_eq!(
        validate_triangulation(n.view(), &extra).unwrap_err().kind(),
        ViolationKind::WrongTriangleCount
    );
    assert_eq!(
        validate_triangulation(n.view(), &good[..2]).unwrap_err().kind(),
        ViolationKind::WrongTriangleCount
    );
}

#[test]
fn earlier_check_wins_over_earlier_triangle() {
    let sq = unit_square();
    let tris = vec![
        tri((0.0, 0.0), (1.0, 1.0), (1.0, 0.0)),
        tri((0.0, 0.0), (0.5, 0.5), (0.0, 1.0)),
    ];
    let err = validate_triangulation(sq.view(), &tris).unwrap_err();
    assert_eq!(
        err,
        Violation::UnknownVertex {
            triangle: 1,
            vertex: 1,
            point: pt(0.5, 0.5)
        }
    );
}

#[test]
fn membership_is_exact() {
    let sq = unit_square();
    // Same coordinates built independently still match.
    let rebuilt = Point::from_raw(sq.vertices()[2].x.raw(), sq.vertices()[2].y.raw()).unwrap();
    let tris = vec![
        Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), rebuilt),
        square_ok()[1],
    ];
    assert_eq!(validate_triangulation(sq.view(), &tris), Ok(()));

    // One grid unit off fails.
    let off = Point::from_raw(rebuilt.x.raw() + 1, rebuilt.y.raw()).unwrap();
    let tris = vec![Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), off), square_ok()[1]];
    assert_eq!(
        validate_triangulation(sq.view(), &tris),
        Err(Violation::UnknownVertex {
            triangle: 0,
            vertex: 2,
            point: off
        })
    );
}

#[test]
fn reversed_triangle_is_miswound() {
    let sq = unit_square();
    let mut tris = square_ok();
    tris[1] = tris[1].reversed();
    assert_eq!(
        validate_triangulation(sq.view(), &tris),
        Err(Violation::DegenerateOrMiswoundTriangle { triangle: 1 })
    );
}

#[test]
fn degenerate_triangle_is_rejected() {
    // Pentagon with a vertex on the bottom edge's line.
    let p = Polygon::try_from_vertices(vec![
        pt(0.0, 0.0),
        pt(1.0, 0.0),
        pt(2.0, 0.0),
        pt(2.0, 2.0),
        pt(0.0, 2.0),
    ])
    .unwrap();
    let tris = vec![
        tri((0.0, 0.0), (1.0, 0.0), (2.0, 0.0)),
        tri((0.0, 0.0), (2.0, 0.0), (2.0, 2.0)),
        tri((0.0, 0.0), (2.0, 2.0), (0.0, 2.0)),
    ];
    assert_eq!(
        validate_triangulation(p.view(), &tris),
        Err(Violation::DegenerateOrMiswoundTriangle { triangle: 0 })
    );
}

#[test]
fn triangle_through_notch_is_not_contained() {
    let n = notched();
    let tris = vec![
        tri((0.0, 0.0), (4.0, 0.0), (4.0, 4.0)),
        tri((0.0, 0.0), (4.0, 4.0), (0.0, 4.0)),
        tri((4.0, 4.0), (0.0, 4.0), (2.0, 1.0)),
    ];
    assert_eq!(
        validate_triangulation(n.view(), &tris),
        Err(Violation::TriangleNotContained { triangle: 0 })
    );
}

#[test]
fn triangle_filling_a_notch_is_not_contained() {
    // Area 3 polygon; the three triangles below cover area 4.
    let p = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0), (0.0, 2.0)]);
    let tris = vec![
        tri((0.0, 2.0), (1.0, 1.0), (2.0, 2.0)),
        tri((0.0, 0.0), (2.0, 0.0), (1.0, 1.0)),
        tri((0.0, 0.0), (1.0, 1.0), (0.0, 2.0)),
    ];
    assert_eq!(
        validate_triangulation(p.view(), &tris),
        Err(Violation::TriangleNotContained { triangle: 0 })
    );

    let good = vec![
        tri((0.0, 0.0), (2.0, 0.0), (1.0, 1.0)),
        tri((2.0, 0.0), (2.0, 2.0), (1.0, 1.0)),
        tri((0.0, 0.0), (1.0, 1.0), (0.0, 2.0)),
    ];
    assert_eq!(validate_triangulation(p.view(), &good), Ok(()));
}

#[test]
fn overlap_reports_first_pair() {
    let n = notched();
    let tris = vec![
        tri((0.0, 0.0), (4.0, 0.0), (2.0, 1.0)),
        tri((0.0, 0.0), (2.0, 1.0), (0.0, 4.0)),
        tri((0.0, 0.0), (4.0, 0.0), (2.0, 1.0)),
    ];
    assert_eq!(
        validate_triangulation(n.view(), &tris),
        Err(Violation::TrianglesOverlap { first: 0, second: 2 })
    );
}

#[test]
fn violation_messages_name_the_triangle() {
    let msg = Violation::TriangleNotContained { triangle: 3 }.to_string();
    assert!(msg.contains("triangles[3]"));
    let msg = Violation::WrongTriangleCount {
        expected: 5,
        actual: 4,
    }
    .to_string();
    assert!(msg.contains("expected 5") && msg.contains("actual 4"));
}

#[test]
fn rotated_valid_triangles_stay_valid() {
    // Vertex order within a triangle may start anywhere as long as it is CCW.
    let sq = unit_square();
    let tris = vec![
        tri((1.0, 0.0), (1.0, 1.0), (0.0, 0.0)),
        tri((0.0, 1.0), (0.0, 0.0), (1.0, 1.0)),
    ];
    assert_eq!(validate_triangulation(sq.view(), &tris), Ok(()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ear_clipping_is_accepted(seed in 0u64..1_000, n in 3usize..40) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let poly = draw_star_polygon(cfg, ReplayToken { seed, index: 0 }).unwrap();
        let tris = EarClipping.triangulate(poly.view());
        prop_assert_eq!(validate_triangulation(poly.view(), &tris), Ok(()));
    }

    #[test]
    fn prop_dropping_a_triangle_is_wrong_count(seed in 0u64..1_000, n in 4usize..30) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let poly = draw_star_polygon(cfg, ReplayToken { seed, index: 1 }).unwrap();
        let tris = EarClipping.triangulate(poly.view());
        let err = validate_triangulation(poly.view(), &tris[1..]).unwrap_err();
        prop_assert_eq!(err.kind(), ViolationKind::WrongTriangleCount);
    }

    #[test]
    fn prop_reversing_one_triangle_is_miswound(seed in 0u64..1_000, n in 3usize..30, pick in 0usize..28) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let poly = draw_star_polygon(cfg, ReplayToken { seed, index: 2 }).unwrap();
        let mut tris = EarClipping.triangulate(poly.view());
        let k = pick % tris.len();
        tris[k] = tris[k].reversed();
        prop_assert_eq!(
            validate_triangulation(poly.view(), &tris),
            Err(Violation::DegenerateOrMiswoundTriangle { triangle: k })
        );
    }
}
