//! Basic 2D types shared by the containment test.
//!
//! - `Edge`: transient pair of consecutive polygon vertices.
//! - `ContainmentCfg`: knobs for batch classification (no geometric tolerances;
//!   the crossing test is exact up to floating-point evaluation).

use nalgebra::Vector2;

/// Directed polygon edge `p0 → p1`. Produced on demand by `Polygon::edges`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
}

impl Edge {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>) -> Self {
        Self { p0, p1 }
    }

    /// Exactly one endpoint lies strictly above the horizontal line at `y`.
    ///
    /// Level edges (`p0.y == p1.y`) never straddle, so `crossing_x` never
    /// divides by zero when guarded by this predicate.
    #[inline]
    pub fn straddles(&self, y: f64) -> bool {
        (self.p0.y > y) != (self.p1.y > y)
    }

    /// x-coordinate where the edge meets the horizontal line at `y`.
    ///
    /// Pre: `self.straddles(y)`.
    #[inline]
    pub fn crossing_x(&self, y: f64) -> f64 {
        debug_assert!(self.p1.y != self.p0.y, "level edge has no unique crossing");
        (self.p1.x - self.p0.x) * (y - self.p0.y) / (self.p1.y - self.p0.y) + self.p0.x
    }
}

/// Batch classification configuration.
#[derive(Clone, Copy, Debug)]
pub struct ContainmentCfg {
    /// Query sequences at least this long are split across the rayon pool
    /// (only with the `parallel` feature; ignored otherwise).
    pub min_parallel_len: usize,
}

impl Default for ContainmentCfg {
    fn default() -> Self {
        Self {
            min_parallel_len: 4096,
        }
    }
}
