//! Local search operators for improving a tour.
//!
//! - [`TwoOptMove`] — Segment reversal (2-opt)
//! - [`RelocateMove`] — Single-node relocation
//! - [`OrOptMove`] — Relocation of 2-3 node segments
//! - [`ExchangeMove`] — Swap of two nodes
//!
//! Every operator works on the visiting order with the depot held outside
//! the slice, evaluates moves against any [`ArcCost`], and finds moves by
//! first improvement. Moves only permute the order, so a tour stays a
//! Hamiltonian cycle under any sequence of them.

mod deadline;
mod exchange;
mod or_opt;
mod relocate;
mod two_opt;

use serde::{Deserialize, Serialize};

use crate::distance::ArcCost;

pub use deadline::Deadline;
pub use exchange::{exchange_improve, find_exchange, ExchangeMove};
pub use or_opt::{find_or_opt, or_opt_improve, OrOptMove};
pub use relocate::{find_relocate, relocate_improve, RelocateMove};
pub use two_opt::{find_two_opt, two_opt_improve, TwoOptMove};

/// A move must lower the cost by more than this to count as improving.
pub const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Computes the total cost: depot → route[0] → ... → route[n-1] → depot.
pub fn route_distance<C: ArcCost>(route: &[usize], depot: usize, costs: &C) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut dist = costs.arc_cost(depot, route[0]);
    for w in route.windows(2) {
        dist += costs.arc_cost(w[0], w[1]);
    }
    dist += costs.arc_cost(route[route.len() - 1], depot);
    dist
}

/// Node before position `pos`, wrapping to the depot.
#[inline]
fn prev_of(route: &[usize], pos: usize, depot: usize) -> usize {
    if pos == 0 {
        depot
    } else {
        route[pos - 1]
    }
}

/// Node after position `pos`, wrapping to the depot.
#[inline]
fn next_of(route: &[usize], pos: usize, depot: usize) -> usize {
    if pos + 1 >= route.len() {
        depot
    } else {
        route[pos + 1]
    }
}

/// A neighbourhood the search may explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Reverse a contiguous segment.
    TwoOpt,
    /// Move one node elsewhere.
    Relocate,
    /// Move a segment of 2–3 nodes elsewhere.
    OrOpt,
    /// Swap two nodes.
    Exchange,
}

impl Neighborhood {
    /// All neighbourhoods in default exploration order.
    pub const ALL: [Neighborhood; 4] = [
        Neighborhood::TwoOpt,
        Neighborhood::Relocate,
        Neighborhood::OrOpt,
        Neighborhood::Exchange,
    ];

    /// Finds the first improving move in this neighbourhood.
    pub fn find<C: ArcCost>(
        self,
        route: &[usize],
        depot: usize,
        costs: &C,
        deadline: &Deadline,
    ) -> Option<Move> {
        match self {
            Self::TwoOpt => find_two_opt(route, depot, costs, deadline).map(Move::TwoOpt),
            Self::Relocate => find_relocate(route, depot, costs, deadline).map(Move::Relocate),
            Self::OrOpt => find_or_opt(route, depot, costs, deadline).map(Move::OrOpt),
            Self::Exchange => find_exchange(route, depot, costs, deadline).map(Move::Exchange),
        }
    }
}

/// A move from any neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Segment reversal.
    TwoOpt(TwoOptMove),
    /// Single-node relocation.
    Relocate(RelocateMove),
    /// Segment relocation.
    OrOpt(OrOptMove),
    /// Node swap.
    Exchange(ExchangeMove),
}

impl Move {
    /// Cost change of applying this move to `route`.
    pub fn delta<C: ArcCost>(&self, route: &[usize], depot: usize, costs: &C) -> f64 {
        match self {
            Self::TwoOpt(m) => m.delta(route, depot, costs),
            Self::Relocate(m) => m.delta(route, depot, costs),
            Self::OrOpt(m) => m.delta(route, depot, costs),
            Self::Exchange(m) => m.delta(route, depot, costs),
        }
    }

    /// Applies this move to `route` in place.
    pub fn apply(&self, route: &mut Vec<usize>) {
        match self {
            Self::TwoOpt(m) => m.apply(route),
            Self::Relocate(m) => m.apply(route),
            Self::OrOpt(m) => m.apply(route),
            Self::Exchange(m) => m.apply(route),
        }
    }
}

/// Finds the first improving move, trying neighbourhoods in order.
///
/// Returns `None` at a local optimum or once the deadline has passed; the
/// caller tells the two apart with [`Deadline::expired`].
pub fn find_improving_move<C: ArcCost>(
    neighborhoods: &[Neighborhood],
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> Option<Move> {
    for nb in neighborhoods {
        if deadline.expired() {
            return None;
        }
        if let Some(mv) = nb.find(route, depot, costs, deadline) {
            return Some(mv);
        }
    }
    None
}
