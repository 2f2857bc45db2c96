//! Constructive heuristics for building an initial tour.
//!
//! - [`cheapest_insertion`] — Insert the node with the cheapest insertion cost, O(n³)
//! - [`path_cheapest_arc`] — Extend the path along its cheapest outgoing arc, O(n²)
//!
//! Both return `None` when no tour can be built: an empty matrix, a depot
//! outside it, or a non-finite arc cost.

mod cheapest_insertion;
mod path_cheapest_arc;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

pub use cheapest_insertion::cheapest_insertion;
pub use path_cheapest_arc::path_cheapest_arc;

/// Strategy used to build the first tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Cheapest insertion.
    #[default]
    CheapestInsertion,
    /// Greedy path extension along the cheapest arc.
    PathCheapestArc,
}

impl FirstSolutionStrategy {
    /// Builds an initial tour with this strategy.
    pub fn construct(self, distances: &DistanceMatrix, depot: usize) -> Option<Tour> {
        match self {
            Self::CheapestInsertion => cheapest_insertion(distances, depot),
            Self::PathCheapestArc => path_cheapest_arc(distances, depot),
        }
    }
}

/// Returns `true` if a tour can be built over `distances` from `depot`.
fn can_construct(distances: &DistanceMatrix, depot: usize) -> bool {
    if depot >= distances.size() {
        return false;
    }
    if !distances.is_finite() {
        log::debug!("construct: non-finite arc cost, n={}", distances.size());
        return false;
    }
    true
}
