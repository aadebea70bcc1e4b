use inpolygon::{ContainmentError, QueryInput};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

/// Float → `Scalar`, iterable of floats → `Sequence`, anything else is a `TypeError`.
pub fn coords_from_py(obj: &PyAny, label: &str) -> PyResult<QueryInput> {
    if let Ok(v) = obj.extract::<f64>() {
        return Ok(QueryInput::Scalar(v));
    }
    let iter = obj.iter().map_err(|_| {
        PyTypeError::new_err(format!("{label} must be a float or an iterable of floats"))
    })?;
    let mut values = Vec::new();
    for (idx, item) in iter.enumerate() {
        let value = item?.extract::<f64>().map_err(|_| {
            PyTypeError::new_err(format!("{label}[{idx}] is not a real number"))
        })?;
        values.push(value);
    }
    Ok(QueryInput::Sequence(values))
}

/// Python exception class raised for a containment error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExcKind {
    Type,
    Value,
}

pub fn exc_kind(err: &ContainmentError) -> ExcKind {
    match err {
        ContainmentError::InvalidArgumentType { .. } => ExcKind::Type,
        ContainmentError::DimensionMismatch { .. }
        | ContainmentError::InsufficientVertices { .. } => ExcKind::Value,
    }
}

pub fn map_containment_err(err: ContainmentError) -> PyErr {
    match exc_kind(&err) {
        ExcKind::Type => PyTypeError::new_err(err.to_string()),
        ExcKind::Value => PyValueError::new_err(err.to_string()),
    }
}
