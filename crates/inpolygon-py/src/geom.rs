//! Containment bindings.

use crate::common::{coords_from_py, map_containment_err};
use inpolygon::QueryOutput;
use pyo3::prelude::*;

/// Whether points `(linex, liney)` lie inside the polygon `(polyx, polyy)`.
///
/// Returns a `bool` when both `linex` and `liney` are floats, else a list of
/// bools in input order.
#[pyfunction]
pub fn contains(
    py: Python<'_>,
    polyx: &PyAny,
    polyy: &PyAny,
    linex: &PyAny,
    liney: &PyAny,
) -> PyResult<PyObject> {
    let poly_x = coords_from_py(polyx, "polyx")?;
    let poly_y = coords_from_py(polyy, "polyy")?;
    let query_x = coords_from_py(linex, "linex")?;
    let query_y = coords_from_py(liney, "liney")?;
    let out = py
        .allow_threads(|| inpolygon::contains(poly_x, poly_y, query_x, query_y))
        .map_err(map_containment_err)?;
    Ok(match out {
        QueryOutput::Scalar(inside) => inside.into_py(py),
        QueryOutput::Sequence(mask) => mask.into_py(py),
    })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(contains, m)?)?;
    Ok(())
}
