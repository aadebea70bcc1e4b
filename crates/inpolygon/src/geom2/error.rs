//! Validation errors for containment queries.
//!
//! Every variant is a caller contract violation detected before any geometry
//! runs; the crossing test itself cannot fail once inputs are accepted.

use std::fmt;

/// Errors surfaced by `contains` and the `Polygon` constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainmentError {
    /// A polygon coordinate argument was a scalar instead of a sequence.
    InvalidArgumentType { arg: &'static str },
    /// Two coordinate collections that must agree in shape do not.
    DimensionMismatch {
        args: (&'static str, &'static str),
        lens: (usize, usize),
    },
    /// Fewer than three polygon vertices.
    InsufficientVertices { got: usize },
}

impl ContainmentError {
    pub(crate) fn mismatch(args: (&'static str, &'static str), lens: (usize, usize)) -> Self {
        Self::DimensionMismatch { args, lens }
    }
}

impl fmt::Display for ContainmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainmentError::InvalidArgumentType { arg } => {
                write!(f, "{arg} must be a sequence of coordinates, got a scalar")
            }
            ContainmentError::DimensionMismatch { args, lens } => write!(
                f,
                "{}, {} must be of same shape (lengths {} and {})",
                args.0, args.1, lens.0, lens.1
            ),
            ContainmentError::InsufficientVertices { got } => write!(
                f,
                "polygon must consist of at least three points (got {got})"
            ),
        }
    }
}

impl std::error::Error for ContainmentError {}
