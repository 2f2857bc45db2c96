//! Guided local search over tour neighbourhoods.
//!
//! - [`PenaltyMatrix`] / [`PenalizedCost`] — Arc penalties and the augmented cost
//! - [`GuidedLocalSearch`] — Deadline-bounded improvement with incumbent tracking
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

mod penalty;
mod search;

use serde::{Deserialize, Serialize};

pub use penalty::{PenalizedCost, PenaltyMatrix};
pub use search::{GuidedLocalSearch, ImprovementResult, Phase, SearchState};

/// How the improvement phase escapes local optima.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalSearchMetaheuristic {
    /// Penalize long, frequently kept arcs and keep searching.
    #[default]
    GuidedLocalSearch,
    /// Stop at the first local optimum.
    GreedyDescent,
}
