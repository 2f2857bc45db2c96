//! Solve outcomes, route legs, and search statistics.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Tour;
use crate::error::{Result, RoutingError};

/// How the improvement phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// No admissible move remained; the search stopped on its own.
    Converged,
    /// The time budget ran out.
    TimedOut,
}

/// Why no tour was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotFoundReason {
    /// There were no nodes to route.
    EmptyInstance,
    /// Construction could not build a feasible tour (e.g. non-finite arc costs).
    NoFeasibleTour,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInstance => f.write_str("instance has no nodes"),
            Self::NoFeasibleTour => f.write_str("no feasible tour could be constructed"),
        }
    }
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Tour cost right after construction.
    pub construction_cost: f64,
    /// Tour cost of the returned incumbent.
    pub best_cost: f64,
    /// Number of moves applied during improvement.
    pub moves_applied: u64,
    /// Number of times arc penalties were raised.
    pub penalty_rounds: u64,
    /// Wall-clock time spent in construction and improvement.
    pub elapsed: Duration,
}

/// One arc of the extracted route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Node index the leg starts at.
    pub from: usize,
    /// Node index the leg ends at.
    pub to: usize,
    /// Arc length in kilometres.
    pub distance_km: f64,
    /// Distance travelled from the depot up to the end of this leg.
    pub cumulative_km: f64,
}

/// Best tour found by the search over a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The incumbent tour.
    pub tour: Tour,
    /// How the improvement phase ended.
    pub status: SearchStatus,
    /// Search counters.
    pub stats: SearchStats,
}

/// Outcome of searching a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A tour was found.
    Found(SearchResult),
    /// No tour could be produced.
    NotFound(NotFoundReason),
}

/// A solved route mapped back to the caller's payloads.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Coordinate, Stop};
/// use u_tsp::{solve, SolverConfig};
///
/// let stops = vec![Stop::new("depot", Coordinate::new(0.0, 0.0).unwrap())];
/// let solution = solve(&stops, &SolverConfig::default()).into_result().unwrap();
/// assert!(solution.stops().is_empty());
/// assert_eq!(solution.total_distance_km(), 0.0);
/// assert_eq!(solution.order(), &[0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSolution<P> {
    depot: P,
    stops: Vec<P>,
    order: Vec<usize>,
    legs: Vec<Leg>,
    total_distance_km: f64,
    status: SearchStatus,
    stats: SearchStats,
}

impl<P> RouteSolution<P> {
    pub(crate) fn new(
        depot: P,
        stops: Vec<P>,
        order: Vec<usize>,
        legs: Vec<Leg>,
        status: SearchStatus,
        stats: SearchStats,
    ) -> Self {
        let total_distance_km = legs.last().map_or(0.0, |l| l.cumulative_km);
        Self {
            depot,
            stops,
            order,
            legs,
            total_distance_km,
            status,
            stats,
        }
    }

    /// Payload of the depot.
    pub fn depot(&self) -> &P {
        &self.depot
    }

    /// Payloads in visiting order, with the depot stripped from both ends.
    pub fn stops(&self) -> &[P] {
        &self.stops
    }

    /// Node indices in visiting order, depot first and last.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Arcs of the route, closing arc included.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total travelled distance in kilometres, closing arc included.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// How the improvement phase ended.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Search counters.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consumes the solution, returning the payloads in visiting order.
    pub fn into_stops(self) -> Vec<P> {
        self.stops
    }
}

/// Outcome of [`solve`](crate::solve).
///
/// Callers must branch on `NotFound`; an empty stop list inside `Found`
/// means a depot-only instance, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome<P> {
    /// A route was found.
    Found(RouteSolution<P>),
    /// No route could be produced.
    NotFound(NotFoundReason),
}

impl<P> SolveOutcome<P> {
    /// Returns `true` if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route, if one was found.
    pub fn solution(&self) -> Option<&RouteSolution<P>> {
        match self {
            Self::Found(s) => Some(s),
            Self::NotFound(_) => None,
        }
    }

    /// Converts `NotFound` into [`RoutingError::NoSolution`].
    pub fn into_result(self) -> Result<RouteSolution<P>> {
        match self {
            Self::Found(s) => Ok(s),
            Self::NotFound(reason) => Err(RoutingError::NoSolution(reason)),
        }
    }
}
