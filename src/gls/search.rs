//! Guided local search controller.
//!
//! The search descends on the penalized cost `d(i, j) + λ·p(i, j)` with
//! first-improvement moves. At each penalized local optimum the arcs of the
//! current tour with maximal utility `d(i, j) / (1 + p(i, j))` are penalized,
//! which pushes the descent out of that optimum without restarting. The
//! plain tour length is tracked alongside, and the best tour ever seen is
//! kept as the incumbent.
//!
//! `λ` is fixed at the first local optimum as
//! `lambda_coefficient · cost / n`, i.e. a fraction of the average arc length.

use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::local_search::{find_improving_move, Deadline, Move, Neighborhood, IMPROVEMENT_EPSILON};
use crate::models::{SearchStatus, Tour};

use super::{LocalSearchMetaheuristic, PenalizedCost, PenaltyMatrix};

/// Utilities closer than this are treated as tied.
const UTILITY_EPSILON: f64 = 1e-9;

/// Lifecycle of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the initial tour.
    Constructing,
    /// Applying moves and penalties.
    Improving,
    /// Stopped on its own.
    Converged,
    /// Stopped by the deadline.
    TimedOut,
}

impl Phase {
    /// Returns `true` for `Converged` and `TimedOut`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::TimedOut)
    }

    /// The terminal status, if this phase is terminal.
    pub fn status(self) -> Option<SearchStatus> {
        match self {
            Self::Converged => Some(SearchStatus::Converged),
            Self::TimedOut => Some(SearchStatus::TimedOut),
            Self::Constructing | Self::Improving => None,
        }
    }
}

/// Mutable state of one improvement run.
#[derive(Debug, Clone)]
pub struct SearchState {
    current: Tour,
    best: Tour,
    penalties: PenaltyMatrix,
    lambda: f64,
    deadline: Deadline,
    phase: Phase,
    moves_applied: u64,
    penalty_rounds: u64,
    stall_rounds: u64,
}

impl SearchState {
    /// Starts improving `initial`.
    pub fn new(initial: Tour, deadline: Deadline) -> Self {
        let penalties = PenaltyMatrix::new(initial.num_nodes());
        Self {
            best: initial.clone(),
            current: initial,
            penalties,
            lambda: 0.0,
            deadline,
            phase: Phase::Improving,
            moves_applied: 0,
            penalty_rounds: 0,
            stall_rounds: 0,
        }
    }

    /// The tour the descent is currently at.
    pub fn current(&self) -> &Tour {
        &self.current
    }

    /// The best tour observed so far.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Penalty weight; zero until the first local optimum.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Arc penalties.
    pub fn penalties(&self) -> &PenaltyMatrix {
        &self.penalties
    }

    fn apply(&mut self, mv: Move, distances: &DistanceMatrix) {
        let depot = self.current.depot();
        let delta = mv.delta(self.current.customers(), depot, distances);
        mv.apply(self.current.customers_mut());
        self.current.set_cost(self.current.cost() + delta);
        self.moves_applied += 1;

        if self.current.cost() < self.best.cost() - IMPROVEMENT_EPSILON {
            // Resync so accumulated deltas never leak into the incumbent
            let exact = self.current.evaluate(distances);
            self.current.set_cost(exact);
            if exact < self.best.cost() - IMPROVEMENT_EPSILON {
                self.best = self.current.clone();
                self.stall_rounds = 0;
            }
        }
    }

    fn penalize(&mut self, distances: &DistanceMatrix) {
        let mut max_utility = f64::NEG_INFINITY;
        let mut candidates: Vec<(usize, usize)> = Vec::new();

        for (a, b) in self.current.arcs() {
            let utility = distances.get(a, b) / (1.0 + f64::from(self.penalties.get(a, b)));
            if utility > max_utility + UTILITY_EPSILON {
                max_utility = utility;
                candidates.clear();
                candidates.push((a, b));
            } else if (utility - max_utility).abs() < UTILITY_EPSILON {
                candidates.push((a, b));
            }
        }

        for &(a, b) in &candidates {
            self.penalties.increment(a, b);
        }
        self.penalty_rounds += 1;
        self.stall_rounds += 1;
        log::trace!(
            "gls.penalize: round={} arcs={} utility={:.3}",
            self.penalty_rounds,
            candidates.len(),
            max_utility
        );
    }
}

/// Outcome of one improvement run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementResult {
    /// Best tour observed.
    pub tour: Tour,
    /// How the run ended.
    pub status: SearchStatus,
    /// Moves applied.
    pub moves_applied: u64,
    /// Penalty rounds performed.
    pub penalty_rounds: u64,
}

/// Guided local search over a distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::gls::GuidedLocalSearch;
/// use u_tsp::local_search::Deadline;
/// use u_tsp::models::Tour;
/// use u_tsp::SolverConfig;
///
/// let pts = [(0.0, 0.0), (0.0, 4.0), (4.0, 0.0), (4.0, 4.0), (2.0, 5.0)];
/// let mut dm = DistanceMatrix::new(pts.len());
/// for (i, a) in pts.iter().enumerate() {
///     for (j, b) in pts.iter().enumerate() {
///         let d: f64 = (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1);
///         dm.set(i, j, d.sqrt());
///     }
/// }
/// let config = SolverConfig::default().with_max_stall_rounds(50);
/// let initial = Tour::new(0, vec![3, 1, 2, 4], &dm).unwrap();
/// let result = GuidedLocalSearch::new(&dm, &config)
///     .improve(initial.clone(), Deadline::after(std::time::Duration::from_secs(1)));
/// assert!(result.tour.cost() <= initial.cost());
/// assert!(result.tour.is_hamiltonian(5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GuidedLocalSearch<'a> {
    distances: &'a DistanceMatrix,
    neighborhoods: &'a [Neighborhood],
    metaheuristic: LocalSearchMetaheuristic,
    lambda_coefficient: f64,
    max_stall_rounds: Option<u64>,
}

impl<'a> GuidedLocalSearch<'a> {
    /// Creates a search over `distances` with the given parameters.
    pub fn new(distances: &'a DistanceMatrix, config: &'a SolverConfig) -> Self {
        Self {
            distances,
            neighborhoods: config.neighborhoods(),
            metaheuristic: config.metaheuristic(),
            lambda_coefficient: config.lambda_coefficient(),
            max_stall_rounds: config.max_stall_rounds(),
        }
    }

    /// Improves `initial` until the deadline passes or the search converges.
    ///
    /// The returned tour is never worse than `initial`.
    pub fn improve(&self, initial: Tour, deadline: Deadline) -> ImprovementResult {
        debug_assert_eq!(initial.num_nodes(), self.distances.size());
        let mut state = SearchState::new(initial, deadline);
        while !state.phase.is_terminal() {
            self.step(&mut state);
        }
        log::debug!(
            "gls.done: phase={:?} moves={} rounds={} lambda={:.4} best={:.3}",
            state.phase,
            state.moves_applied,
            state.penalty_rounds,
            state.lambda,
            state.best.cost()
        );
        ImprovementResult {
            status: state.phase.status().unwrap_or(SearchStatus::TimedOut),
            moves_applied: state.moves_applied,
            penalty_rounds: state.penalty_rounds,
            tour: state.best,
        }
    }

    /// Advances the search by one move or one penalty round.
    pub fn step(&self, state: &mut SearchState) {
        if state.phase.is_terminal() {
            return;
        }
        if state.deadline.expired() {
            state.phase = Phase::TimedOut;
            return;
        }
        // With fewer than three customers every order is the same cycle
        if state.current.customers().len() < 3 {
            state.phase = Phase::Converged;
            return;
        }

        let found = {
            let costs = PenalizedCost::new(self.distances, &state.penalties, state.lambda);
            find_improving_move(
                self.neighborhoods,
                state.current.customers(),
                state.current.depot(),
                &costs,
                &state.deadline,
            )
        };

        match found {
            Some(mv) => state.apply(mv, self.distances),
            None if state.deadline.expired() => state.phase = Phase::TimedOut,
            None => self.on_local_optimum(state),
        }
    }

    fn on_local_optimum(&self, state: &mut SearchState) {
        if self.metaheuristic == LocalSearchMetaheuristic::GreedyDescent {
            state.phase = Phase::Converged;
            return;
        }

        if state.lambda == 0.0 {
            let lambda =
                self.lambda_coefficient * state.current.cost() / state.current.num_nodes() as f64;
            if !(lambda.is_finite() && lambda > 0.0) {
                state.phase = Phase::Converged;
                return;
            }
            log::debug!("gls.lambda: lambda={lambda:.4} local_optimum={:.3}", state.current.cost());
            state.lambda = lambda;
        }

        if self
            .max_stall_rounds
            .is_some_and(|limit| state.stall_rounds >= limit)
        {
            state.phase = Phase::Converged;
            return;
        }

        state.penalize(self.distances);
    }
}
