use super::*;
use nalgebra::{vector, Vector2};

fn square4() -> Polygon {
    Polygon::from_coords(&[0.0, 4.0, 4.0, 0.0], &[0.0, 0.0, 4.0, 4.0]).unwrap()
}

fn triangle10() -> (Vec<f64>, Vec<f64>) {
    (vec![0.0, 10.0, 5.0], vec![0.0, 0.0, 10.0])
}

#[test]
fn square_inside_outside() {
    let sq = square4();
    assert!(sq.contains_point(vector![2.0, 2.0]));
    assert!(!sq.contains_point(vector![5.0, 5.0]));
    assert!(!sq.contains_point(vector![-1.0, 2.0]));
    assert!(!sq.contains_point(vector![2.0, -0.5]));
}

#[test]
fn square_vertices_follow_strict_convention() {
    // Only (4,0)→(4,4) straddles y=0 with its crossing strictly right of x=0.
    let sq = square4();
    assert!(sq.contains_point(vector![0.0, 0.0]));
    assert!(!sq.contains_point(vector![4.0, 0.0]));
    assert!(!sq.contains_point(vector![4.0, 4.0]));
    assert!(!sq.contains_point(vector![0.0, 4.0]));
    // Same answers with the opposite orientation.
    let rev = sq.reversed();
    for v in sq.vertices() {
        assert_eq!(sq.contains_point(*v), rev.contains_point(*v));
    }
}

#[test]
fn square_edges_half_open() {
    // Bottom and left edges belong to the square, top and right do not.
    let sq = square4();
    assert!(sq.contains_point(vector![2.0, 0.0]));
    assert!(sq.contains_point(vector![0.0, 2.0]));
    assert!(!sq.contains_point(vector![2.0, 4.0]));
    assert!(!sq.contains_point(vector![4.0, 2.0]));
}

#[test]
fn triangle_scenario() {
    let (px, py) = triangle10();
    let out = contains(px, py, vec![5.0, 0.0, 5.0], vec![5.0, 10.0, 1.0]).unwrap();
    assert_eq!(out, QueryOutput::Sequence(vec![true, false, true]));
}

#[test]
fn scalar_query_returns_scalar() {
    let (px, py) = triangle10();
    let out = contains(&px, &py, 5.0, 5.0).unwrap();
    assert_eq!(out.as_scalar(), Some(true));
    let out = contains(&px, &py, 20.0, 5.0).unwrap();
    assert_eq!(out, QueryOutput::Scalar(false));
}

#[test]
fn single_element_sequence_stays_sequence() {
    let (px, py) = triangle10();
    let out = contains(&px, &py, vec![5.0], vec![5.0]).unwrap();
    assert_eq!(out, QueryOutput::Sequence(vec![true]));
    // A scalar paired with a length-1 sequence coerces to a sequence.
    let out = contains(&px, &py, 5.0, vec![5.0]).unwrap();
    assert_eq!(out, QueryOutput::Sequence(vec![true]));
}

#[test]
fn edges_wrap_from_last_vertex() {
    let sq = square4();
    let edges: Vec<Edge> = sq.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0], Edge::new(vector![0.0, 4.0], vector![0.0, 0.0]));
    assert_eq!(edges[1], Edge::new(vector![0.0, 0.0], vector![4.0, 0.0]));
    assert_eq!(edges[3], Edge::new(vector![4.0, 4.0], vector![0.0, 4.0]));
    // Every vertex is an endpoint of exactly two edges.
    for v in sq.vertices() {
        let n = edges.iter().filter(|e| e.p0 == *v || e.p1 == *v).count();
        assert_eq!(n, 2);
    }
}

#[test]
fn level_edges_never_straddle() {
    let e = Edge::new(vector![0.0, 1.0], vector![5.0, 1.0]);
    assert!(!e.straddles(1.0));
    assert!(!e.straddles(0.5));
    let up = Edge::new(vector![0.0, 0.0], vector![2.0, 2.0]);
    assert!(up.straddles(1.0));
    assert!((up.crossing_x(1.0) - 1.0).abs() < 1e-12);
    // The lower endpoint is "not above", the upper endpoint is.
    assert!(up.straddles(0.0));
    assert!(!up.straddles(2.0));
}

#[test]
fn ray_through_vertex_counts_once() {
    // Diamond: the ray from (0,0) passes exactly through vertex (2,0).
    let d = Polygon::from_coords(&[2.0, 0.0, -2.0, 0.0], &[0.0, 2.0, 0.0, -2.0]).unwrap();
    assert!(d.contains_point(vector![0.0, 0.0]));
    assert!(d.contains_point(vector![-1.9, 0.0]));
    assert!(!d.contains_point(vector![-3.0, 0.0]));
    assert!(!d.contains_point(vector![3.0, 0.0]));
}

#[test]
fn concave_polygon_notch() {
    // U shape: notch between x∈(1,2) above y=1.
    let u = Polygon::from_coords(
        &[0.0, 3.0, 3.0, 2.0, 2.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 3.0, 3.0, 1.0, 1.0, 3.0, 3.0],
    )
    .unwrap();
    assert!(u.contains_point(vector![0.5, 2.0]));
    assert!(u.contains_point(vector![2.5, 2.0]));
    assert!(!u.contains_point(vector![1.5, 2.0]));
    assert!(u.contains_point(vector![1.5, 0.5]));
    assert!(!u.contains_point(vector![-0.5, 2.0]));
}

#[test]
fn translation_and_orientation_invariance_on_grid() {
    let u = Polygon::from_coords(
        &[0.0, 3.0, 3.0, 2.0, 2.0, 1.0, 1.0, 0.0],
        &[0.0, 0.0, 3.0, 3.0, 1.0, 1.0, 3.0, 3.0],
    )
    .unwrap();
    let offset = vector![7.0, -3.0];
    let moved = u.translated(offset);
    let rev = u.reversed();
    for i in -2..=10 {
        for j in -2..=10 {
            let p = Vector2::new(i as f64 * 0.5 - 0.25, j as f64 * 0.5 - 0.25);
            let base = u.contains_point(p);
            assert_eq!(base, moved.contains_point(p + offset), "translated at {p:?}");
            assert_eq!(base, rev.contains_point(p), "reversed at {p:?}");
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let (px, py) = triangle10();
    let qx = vec![1.0, 5.0, 9.0, 5.0];
    let qy = vec![1.0, 9.0, 1.0, -1.0];
    let first = contains(&px, &py, &qx, &qy).unwrap();
    for _ in 0..5 {
        assert_eq!(contains(&px, &py, &qx, &qy).unwrap(), first);
    }
}

#[test]
fn polygon_scalar_is_invalid_argument_type() {
    let err = contains(1.0, vec![0.0, 1.0, 2.0], 0.5, 0.5).unwrap_err();
    assert_eq!(
        err,
        ContainmentError::InvalidArgumentType { arg: "polygon_x" }
    );
    let err = contains(vec![0.0, 1.0, 2.0], 1.0, 0.5, 0.5).unwrap_err();
    assert_eq!(
        err,
        ContainmentError::InvalidArgumentType { arg: "polygon_y" }
    );
}

#[test]
fn polygon_length_mismatch_is_rejected() {
    let err = contains(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0], 0.5, 0.5).unwrap_err();
    assert_eq!(
        err,
        ContainmentError::DimensionMismatch {
            args: ("polygon_x", "polygon_y"),
            lens: (4, 3),
        }
    );
}

#[test]
fn two_vertex_polygon_fails_for_every_query() {
    let queries: Vec<(QueryInput, QueryInput)> = vec![
        (QueryInput::Scalar(1.0), QueryInput::Scalar(1.0)),
        (vec![1.0, 2.0].into(), vec![1.0, 2.0].into()),
        (Vec::<f64>::new().into(), Vec::<f64>::new().into()),
        // Even a malformed query reports the polygon first.
        (vec![1.0].into(), vec![1.0, 2.0].into()),
    ];
    for (qx, qy) in queries {
        let err = contains(vec![0.0, 1.0], vec![0.0, 1.0], qx, qy).unwrap_err();
        assert_eq!(err, ContainmentError::InsufficientVertices { got: 2 });
    }
}

#[test]
fn query_shape_mismatch_is_rejected() {
    let (px, py) = triangle10();
    let err = contains(&px, &py, vec![1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        ContainmentError::DimensionMismatch {
            args: ("query_x", "query_y"),
            lens: (2, 3),
        }
    ));
    let err = contains(&px, &py, 1.0, vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, ContainmentError::DimensionMismatch { .. }));
}

#[test]
fn error_messages_name_arguments() {
    let msg = ContainmentError::InsufficientVertices { got: 2 }.to_string();
    assert!(msg.contains("at least three"));
    let msg = ContainmentError::DimensionMismatch {
        args: ("query_x", "query_y"),
        lens: (2, 3),
    }
    .to_string();
    assert!(msg.contains("query_x") && msg.contains("query_y"));
}

#[test]
fn classify_with_cfg_matches_default_path() {
    let sq = square4();
    let xs: Vec<f64> = (0..50).map(|i| i as f64 * 0.11 - 0.5).collect();
    let ys: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37) % 5.0 - 0.5).collect();
    let qx = QueryInput::from(xs);
    let qy = QueryInput::from(ys);
    let cfg = ContainmentCfg {
        min_parallel_len: 1,
    };
    assert_eq!(
        sq.classify(&qx, &qy).unwrap(),
        sq.classify_with(&qx, &qy, cfg).unwrap()
    );
}

#[test]
fn new_rejects_short_vertex_lists() {
    assert_eq!(
        Polygon::new(vec![Vector2::zeros(), Vector2::new(1.0, 0.0)]).unwrap_err(),
        ContainmentError::InsufficientVertices { got: 2 }
    );
    assert!(Polygon::new(Vec::new()).is_err());
}
