//! Entry point: `contains(polygon_x, polygon_y, query_x, query_y)`.
//!
//! Validation order (first failure wins, nothing is classified on failure):
//! 1. polygon coordinates must be sequences (`InvalidArgumentType`);
//! 2. polygon x/y lengths must agree (`DimensionMismatch`);
//! 3. at least three vertices (`InsufficientVertices`);
//! 4. query x/y shapes must agree after scalar coercion (`DimensionMismatch`).

use super::error::ContainmentError;
use super::polygon::Polygon;
use super::query::{QueryInput, QueryOutput};
use super::types::ContainmentCfg;

/// Whether each query point lies inside the closed polygon.
///
/// Returns `QueryOutput::Scalar` iff both query coordinates are scalars,
/// otherwise one flag per point in input order.
///
/// ```
/// use inpolygon::geom2::{contains, QueryOutput};
///
/// let xs = [0.0, 10.0, 5.0];
/// let ys = [0.0, 0.0, 10.0];
/// let hit = contains(xs, ys, 5.0, 5.0).unwrap();
/// assert_eq!(hit, QueryOutput::Scalar(true));
///
/// let mask = contains(xs, ys, vec![5.0, 0.0, 5.0], vec![5.0, 10.0, 1.0]).unwrap();
/// assert_eq!(mask.into_vec(), vec![true, false, true]);
/// ```
pub fn contains(
    polygon_x: impl Into<QueryInput>,
    polygon_y: impl Into<QueryInput>,
    query_x: impl Into<QueryInput>,
    query_y: impl Into<QueryInput>,
) -> Result<QueryOutput, ContainmentError> {
    contains_with(
        polygon_x,
        polygon_y,
        query_x,
        query_y,
        ContainmentCfg::default(),
    )
}

/// `contains` with explicit batch configuration.
pub fn contains_with(
    polygon_x: impl Into<QueryInput>,
    polygon_y: impl Into<QueryInput>,
    query_x: impl Into<QueryInput>,
    query_y: impl Into<QueryInput>,
    cfg: ContainmentCfg,
) -> Result<QueryOutput, ContainmentError> {
    let (px, py) = (polygon_x.into(), polygon_y.into());
    let (qx, qy) = (query_x.into(), query_y.into());
    validated_polygon(&px, &py)
        .and_then(|poly| poly.classify_with(&qx, &qy, cfg))
        .inspect_err(|err| tracing::debug!(%err, "rejected containment query"))
}

fn validated_polygon(px: &QueryInput, py: &QueryInput) -> Result<Polygon, ContainmentError> {
    for (arg, input) in [("polygon_x", px), ("polygon_y", py)] {
        if input.is_scalar() {
            return Err(ContainmentError::InvalidArgumentType { arg });
        }
    }
    Polygon::from_coords(px.as_slice(), py.as_slice())
}
