//! Error types for closest pair queries.

use thiserror::Error;

/// Result type for closest pair operations.
pub type Result<T> = std::result::Result<T, ClosestPairError>;

/// Errors returned by the solvers.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ClosestPairError {
    /// The point set violates a precondition of the solver
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reason a point set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Fewer than two points were supplied
    #[error("need at least 2 points, got {actual}")]
    TooFewPoints {
        /// Number of points received
        actual: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("point at index {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input
        index: usize,
    },
}

impl ClosestPairError {
    /// Returns the invalid input reason, if this is an input error
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            Self::InvalidInput(reason) => Some(reason),
        }
    }
}

/// Checks the preconditions shared by every solver.
pub(crate) fn validate_points(points: &[crate::Point], check_finite: bool) -> Result<()> {
    if points.len() < 2 {
        tracing::warn!(actual = points.len(), "rejecting point set with fewer than 2 points");
        return Err(InvalidInput::TooFewPoints {
            actual: points.len(),
        }
        .into());
    }
    if check_finite {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            tracing::warn!(index, "rejecting point set with a non-finite coordinate");
            return Err(InvalidInput::NonFiniteCoordinate { index }.into());
        }
    }
    Ok(())
}
