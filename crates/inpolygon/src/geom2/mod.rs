//! 2D point-in-polygon classification (ray-casting crossing test).
//!
//! Purpose
//! - Decide for query points whether they lie inside a simple polygon given as
//!   an ordered vertex list (closed implicitly, either orientation).
//! - Keep the API small: one free function for scalar-or-sequence coordinates,
//!   plus a typed `Polygon` for callers holding `Vector2` data.
//!
//! Conventions
//! - An edge counts for a query at height `y` iff exactly one endpoint has
//!   `y_i > y`, and its crossing lies strictly right of the query.
//! - Validation happens before any geometry; see `ContainmentError`.
//!
//! Code cross-refs: `Polygon`, `Edge`, `QueryInput`, `QueryOutput`, `contains`

mod contains;
mod error;
mod polygon;
mod query;
pub mod rand;
mod types;

pub use contains::{contains, contains_with};
pub use error::ContainmentError;
pub use polygon::Polygon;
pub use query::{QueryInput, QueryOutput};
pub use types::{ContainmentCfg, Edge};

#[cfg(test)]
mod tests;
