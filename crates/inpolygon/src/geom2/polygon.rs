//! Closed simple polygon and the ray-casting crossing test.
//!
//! A point is inside when a ray cast towards +x crosses the boundary an odd
//! number of times. An edge counts when exactly one endpoint lies strictly
//! above the point (`y_i > y`) and the crossing lies strictly to the right
//! (`x < x_cross`). The asymmetric split assigns horizontal edges and rays
//! through vertices to exactly one side, so results are deterministic, and it
//! excludes level edges from the interpolation.
//!
//! Orientation (CW or CCW) does not matter. Points exactly on the boundary get
//! whatever the convention gives them; no on-edge detection is attempted.

use nalgebra::Vector2;

use super::error::ContainmentError;
use super::query::{QueryInput, QueryOutput, ResolvedQuery};
use super::types::{ContainmentCfg, Edge};

/// Closed polygon with at least three vertices (last vertex joins the first).
///
/// Invariants:
/// - `verts.len() >= 3`.
/// - No implicit repeat of the first vertex at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Wrap an ordered vertex list; fails below three vertices.
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, ContainmentError> {
        if verts.len() < 3 {
            return Err(ContainmentError::InsufficientVertices { got: verts.len() });
        }
        Ok(Self { verts })
    }

    /// Build from parallel coordinate slices (`xs[i], ys[i]` is vertex `i`).
    pub fn from_coords(xs: &[f64], ys: &[f64]) -> Result<Self, ContainmentError> {
        if xs.len() != ys.len() {
            return Err(ContainmentError::mismatch(
                ("polygon_x", "polygon_y"),
                (xs.len(), ys.len()),
            ));
        }
        Self::new(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Vector2::new(x, y))
                .collect(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// The N edges of the closed boundary: `(v[n-1], v[0])`, `(v[0], v[1])`, …,
    /// `(v[n-2], v[n-1])`. Every vertex appears in exactly two edges.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| Edge::new(self.verts[(i + n - 1) % n], self.verts[i]))
    }

    /// Crossing-number test for a single point.
    pub fn contains_point(&self, q: Vector2<f64>) -> bool {
        let mut inside = false;
        for e in self.edges() {
            if e.straddles(q.y) && q.x < e.crossing_x(q.y) {
                inside = !inside;
            }
        }
        inside
    }

    /// One flag per point, in input order.
    pub fn contains_points(&self, pts: &[Vector2<f64>]) -> Vec<bool> {
        pts.iter().map(|&p| self.contains_point(p)).collect()
    }

    /// Like `contains_points`, but long inputs go through the rayon pool when
    /// the `parallel` feature is enabled.
    #[cfg(feature = "parallel")]
    pub fn contains_points_with(&self, pts: &[Vector2<f64>], cfg: ContainmentCfg) -> Vec<bool> {
        use rayon::prelude::*;
        if pts.len() >= cfg.min_parallel_len {
            return pts.par_iter().map(|&p| self.contains_point(p)).collect();
        }
        self.contains_points(pts)
    }

    /// Like `contains_points`, but long inputs go through the rayon pool when
    /// the `parallel` feature is enabled.
    #[cfg(not(feature = "parallel"))]
    pub fn contains_points_with(&self, pts: &[Vector2<f64>], cfg: ContainmentCfg) -> Vec<bool> {
        let _ = cfg;
        self.contains_points(pts)
    }

    /// Classify a scalar-or-sequence query against this polygon.
    pub fn classify(
        &self,
        qx: &QueryInput,
        qy: &QueryInput,
    ) -> Result<QueryOutput, ContainmentError> {
        self.classify_with(qx, qy, ContainmentCfg::default())
    }

    pub fn classify_with(
        &self,
        qx: &QueryInput,
        qy: &QueryInput,
        cfg: ContainmentCfg,
    ) -> Result<QueryOutput, ContainmentError> {
        let query = ResolvedQuery::resolve(qx, qy)?;
        let mask = self.contains_points_with(&query.points, cfg);
        tracing::trace!(
            vertices = self.len(),
            points = mask.len(),
            inside = mask.iter().filter(|&&b| b).count(),
            "classified"
        );
        Ok(query.shape(mask))
    }

    /// Same vertices, opposite orientation.
    pub fn reversed(&self) -> Self {
        let mut verts = self.verts.clone();
        verts.reverse();
        Self { verts }
    }

    /// Rigid translation by `offset`.
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            verts: self.verts.iter().map(|v| v + offset).collect(),
        }
    }
}
