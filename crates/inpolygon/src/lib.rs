//! Point-in-polygon classification for simple 2D polygons.
//!
//! The crate answers one question: for each query point, does it lie inside a
//! closed polygon given by its ordered vertices? The answer comes from the
//! ray-casting crossing test in `geom2`.
//!
//! API Policy
//! - `contains` mirrors the loose "scalar or sequence" calling convention used by
//!   array-oriented callers (CLI, Python bindings).
//! - `Polygon` is the typed surface for Rust callers that already hold points.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{contains, ContainmentError, Polygon, QueryInput, QueryOutput};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_points_in_box, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        contains, contains_with, ContainmentCfg, ContainmentError, Edge, Polygon, QueryInput,
        QueryOutput,
    };
    pub use nalgebra::Vector2 as Vec2;
}
