//! Solve entry points.
//!
//! [`solve`] routes geographic stops; [`solve_matrix`] runs the same pipeline
//! over a caller-supplied cost matrix. Both treat node 0 as the depot.

use std::time::Instant;

use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::gls::{GuidedLocalSearch, Phase};
use crate::local_search::Deadline;
use crate::models::{
    Coordinate, NotFoundReason, RouteSolution, SearchOutcome, SearchResult, SearchStats, SolveOutcome,
    Stop,
};

/// Index of the depot in every instance.
pub const DEPOT: usize = 0;

/// Finds a short closed tour through `stops`, starting and ending at the
/// first stop.
///
/// The improvement phase stops at the configured time limit; whatever is
/// best by then is returned with [`SearchStatus::TimedOut`](crate::models::SearchStatus).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::models::{Coordinate, Stop};
/// use u_tsp::{solve, SolverConfig};
///
/// let stops: Vec<Stop<&str>> = [("D", 0.0, 0.0), ("A", 0.0, 1.0), ("B", 1.0, 1.0), ("C", 1.0, 0.0)]
///     .into_iter()
///     .map(|(name, lon, lat)| Stop::new(name, Coordinate::new(lon, lat).unwrap()))
///     .collect();
/// let config = SolverConfig::default().with_time_limit(Duration::from_millis(200));
///
/// let solution = solve(&stops, &config).into_result().unwrap();
/// assert_eq!(solution.stops().len(), 3);
/// assert_eq!(solution.order().first(), Some(&0));
/// assert_eq!(solution.order().last(), Some(&0));
/// ```
pub fn solve<P: Clone>(stops: &[Stop<P>], config: &SolverConfig) -> SolveOutcome<P> {
    if stops.is_empty() {
        log::info!("solve: empty instance");
        return SolveOutcome::NotFound(NotFoundReason::EmptyInstance);
    }

    let coordinates: Vec<Coordinate> = stops.iter().map(Stop::coordinate).collect();
    let distances = DistanceMatrix::from_coordinates(&coordinates);

    match solve_matrix(&distances, config) {
        SearchOutcome::Found(result) => SolveOutcome::Found(extract(stops, &result, &distances)),
        SearchOutcome::NotFound(reason) => SolveOutcome::NotFound(reason),
    }
}

/// Runs construction and improvement over a precomputed cost matrix.
///
/// Node 0 is the depot. Returns `NotFound` for an empty matrix or when no
/// tour can be constructed (e.g. a non-finite arc cost).
pub fn solve_matrix(distances: &DistanceMatrix, config: &SolverConfig) -> SearchOutcome {
    let started = Instant::now();
    let deadline = Deadline::after(config.time_limit());
    let n = distances.size();

    if n == 0 {
        log::info!("solve: empty instance");
        return SearchOutcome::NotFound(NotFoundReason::EmptyInstance);
    }

    log::info!(
        "solve.start: n={} strategy={:?} metaheuristic={:?} time_limit={:?}",
        n,
        config.first_solution_strategy(),
        config.metaheuristic(),
        config.time_limit()
    );

    let mut phase = Phase::Constructing;
    let Some(initial) = config.first_solution_strategy().construct(distances, DEPOT) else {
        log::info!("solve: no feasible tour, phase={phase:?}");
        return SearchOutcome::NotFound(NotFoundReason::NoFeasibleTour);
    };
    let construction_cost = initial.cost();
    phase = Phase::Improving;
    log::debug!(
        "solve.construct: cost={:.3} elapsed_ms={} next={:?}",
        construction_cost,
        started.elapsed().as_millis(),
        phase
    );

    let improved = GuidedLocalSearch::new(distances, config).improve(initial, deadline);

    let stats = SearchStats {
        construction_cost,
        best_cost: improved.tour.cost(),
        moves_applied: improved.moves_applied,
        penalty_rounds: improved.penalty_rounds,
        elapsed: started.elapsed(),
    };
    log::info!(
        "solve.done: status={:?} cost={:.3} construction={:.3} moves={} elapsed_ms={}",
        improved.status,
        stats.best_cost,
        stats.construction_cost,
        stats.moves_applied,
        stats.elapsed.as_millis()
    );

    SearchOutcome::Found(SearchResult {
        tour: improved.tour,
        status: improved.status,
        stats,
    })
}

/// Maps a tour over stop indices back to the stops' payloads.
fn extract<P: Clone>(
    stops: &[Stop<P>],
    result: &SearchResult,
    distances: &DistanceMatrix,
) -> RouteSolution<P> {
    let tour = &result.tour;
    let legs = RouteEvaluator::new(distances).build_legs(tour);
    let visited = tour
        .customers()
        .iter()
        .map(|&i| stops[i].payload().clone())
        .collect();

    RouteSolution::new(
        stops[tour.depot()].payload().clone(),
        visited,
        tour.closed_sequence(),
        legs,
        result.status,
        result.stats.clone(),
    )
}
