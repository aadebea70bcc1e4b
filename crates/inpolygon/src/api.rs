//! Curated API for the binaries and bindings in this workspace.
//!
//! Keep the CLI and the Python module on these names so the `geom2` layout can
//! change without touching them.

pub use crate::geom2::{
    contains, contains_with, ContainmentCfg, ContainmentError, Polygon, QueryInput, QueryOutput,
};

/// Classify parallel `xs`/`ys` columns against `poly`, one flag per row.
///
/// Pre: `xs.len() == ys.len()`, otherwise `DimensionMismatch`.
pub fn mask_columns(
    poly: &Polygon,
    xs: &[f64],
    ys: &[f64],
    cfg: ContainmentCfg,
) -> Result<Vec<bool>, ContainmentError> {
    let out = poly.classify_with(&QueryInput::from(xs), &QueryInput::from(ys), cfg)?;
    Ok(out.into_vec())
}

/// Share of `true` flags in a mask (0 for an empty mask).
pub fn inside_fraction(mask: &[bool]) -> f64 {
    if mask.is_empty() {
        return 0.0;
    }
    let hits = mask.iter().filter(|&&b| b).count();
    hits as f64 / mask.len() as f64
}
