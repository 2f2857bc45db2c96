//! Error types.

use thiserror::Error;

use crate::models::NotFoundReason;

/// Errors raised at the boundaries of the solver.
///
/// Suboptimal tours are never errors: the search always succeeds once a
/// feasible tour exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A coordinate did not have exactly two finite components.
    #[error("invalid coordinate {components:?}: {reason}")]
    InvalidCoordinate {
        /// The rejected components.
        components: Vec<f64>,
        /// Why they were rejected.
        reason: String,
    },
    /// A solver configuration value is out of range.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
    /// A node order is not a depot-anchored permutation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    /// The solver could not produce any tour.
    #[error("no solution: {0}")]
    NoSolution(NotFoundReason),
}

impl RoutingError {
    pub(crate) fn invalid_coordinate(components: &[f64], reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            components: components.to_vec(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
