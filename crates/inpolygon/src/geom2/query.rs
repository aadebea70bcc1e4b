//! Scalar-or-sequence query arguments and results.
//!
//! A query coordinate is either a single value or an ordered sequence. The
//! variant is resolved once at entry: two scalars give a scalar result, any
//! sequence coerces both sides to sequences (a scalar becomes length 1) and the
//! lengths must then agree exactly.

use nalgebra::Vector2;

use super::error::ContainmentError;

/// One coordinate argument: a single value or an ordered sequence of values.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryInput {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl QueryInput {
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, QueryInput::Scalar(_))
    }

    /// Length after coercion to a sequence (a scalar counts as one value).
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View as a sequence; a scalar is a one-element slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            QueryInput::Scalar(v) => std::slice::from_ref(v),
            QueryInput::Sequence(vs) => vs,
        }
    }
}

impl From<f64> for QueryInput {
    fn from(v: f64) -> Self {
        QueryInput::Scalar(v)
    }
}

impl From<Vec<f64>> for QueryInput {
    fn from(vs: Vec<f64>) -> Self {
        QueryInput::Sequence(vs)
    }
}

impl From<&[f64]> for QueryInput {
    fn from(vs: &[f64]) -> Self {
        QueryInput::Sequence(vs.to_vec())
    }
}

impl From<&Vec<f64>> for QueryInput {
    fn from(vs: &Vec<f64>) -> Self {
        QueryInput::Sequence(vs.clone())
    }
}

impl<const N: usize> From<[f64; N]> for QueryInput {
    fn from(vs: [f64; N]) -> Self {
        QueryInput::Sequence(vs.to_vec())
    }
}

/// Containment result shaped like the query: one flag or one flag per point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOutput {
    Scalar(bool),
    Sequence(Vec<bool>),
}

impl QueryOutput {
    /// `Some` only for scalar queries; a length-1 sequence stays a sequence.
    #[inline]
    pub fn as_scalar(&self) -> Option<bool> {
        match self {
            QueryOutput::Scalar(b) => Some(*b),
            QueryOutput::Sequence(_) => None,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        match self {
            QueryOutput::Scalar(b) => std::slice::from_ref(b),
            QueryOutput::Sequence(bs) => bs,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<bool> {
        match self {
            QueryOutput::Scalar(b) => vec![b],
            QueryOutput::Sequence(bs) => bs,
        }
    }
}

/// Query points after shape resolution.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedQuery {
    pub points: Vec<Vector2<f64>>,
    pub scalar: bool,
}

impl ResolvedQuery {
    /// Pair up x and y after coercing scalars to one-element sequences.
    pub fn resolve(qx: &QueryInput, qy: &QueryInput) -> Result<Self, ContainmentError> {
        let (xs, ys) = (qx.as_slice(), qy.as_slice());
        if xs.len() != ys.len() {
            return Err(ContainmentError::mismatch(
                ("query_x", "query_y"),
                (xs.len(), ys.len()),
            ));
        }
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect();
        Ok(Self {
            points,
            scalar: qx.is_scalar() && qy.is_scalar(),
        })
    }

    pub fn shape(&self, mask: Vec<bool>) -> QueryOutput {
        debug_assert_eq!(mask.len(), self.points.len());
        if self.scalar {
            QueryOutput::Scalar(mask[0])
        } else {
            QueryOutput::Sequence(mask)
        }
    }
}
