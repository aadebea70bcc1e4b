//! PyO3 bindings for `inpolygon`.
//!
//! Notes
//! - Keep bindings thin and predictable: Python floats and iterables (lists,
//!   tuples, 1-D NumPy arrays) map onto `QueryInput`, results come back as a
//!   `bool` or a `list[bool]`.
//! - All geometry stays in the `inpolygon` crate.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn inpolygon_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", inpolygon::VERSION)?;
    geom::register(m)?;
    Ok(())
}
