//! Single-node relocation.
//!
//! # Algorithm
//!
//! Removes one node from the visiting order and reinserts it at another
//! position. The delta is the removal saving plus the insertion cost, both
//! O(1) from the neighbouring nodes.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{next_of, prev_of, route_distance, Deadline, IMPROVEMENT_EPSILON};
use crate::distance::ArcCost;

/// Move the node at `from` so that it ends up at index `to`.
///
/// `to` indexes the order *after* the node has been removed, so the node
/// sits at position `to` once the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocateMove {
    /// Current position of the node.
    pub from: usize,
    /// Position of the node after the move.
    pub to: usize,
}

impl RelocateMove {
    /// Cost change of applying this move.
    pub fn delta<C: ArcCost>(&self, route: &[usize], depot: usize, costs: &C) -> f64 {
        let n = route.len();
        let node = route[self.from];
        let removal = removal_cost(route, self.from, depot, costs);

        // Position k in the shortened order maps back to k or k + 1
        let original = |k: usize| if k < self.from { k } else { k + 1 };
        let ins_prev = if self.to == 0 {
            depot
        } else {
            route[original(self.to - 1)]
        };
        let ins_next = if self.to == n - 1 {
            depot
        } else {
            route[original(self.to)]
        };

        removal + costs.arc_cost(ins_prev, node) + costs.arc_cost(node, ins_next)
            - costs.arc_cost(ins_prev, ins_next)
    }

    /// Applies the relocation in place.
    pub fn apply(&self, route: &mut Vec<usize>) {
        let node = route.remove(self.from);
        route.insert(self.to, node);
    }
}

/// Cost of removing the node at `pos`: `c(prev, next) - c(prev, x) - c(x, next)`.
fn removal_cost<C: ArcCost>(route: &[usize], pos: usize, depot: usize, costs: &C) -> f64 {
    let prev = prev_of(route, pos, depot);
    let next = next_of(route, pos, depot);
    let node = route[pos];
    costs.arc_cost(prev, next) - costs.arc_cost(prev, node) - costs.arc_cost(node, next)
}

/// Finds the first improving relocation.
pub fn find_relocate<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> Option<RelocateMove> {
    let n = route.len();
    if n < 2 {
        return None;
    }
    for from in 0..n {
        if deadline.expired() {
            return None;
        }
        for to in 0..n {
            if to == from {
                continue;
            }
            let mv = RelocateMove { from, to };
            if mv.delta(route, depot, costs) < -IMPROVEMENT_EPSILON {
                return Some(mv);
            }
        }
    }
    None
}

/// Applies relocation until no improving move remains.
///
/// Returns the improved visiting order and its total cost.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::relocate_improve;
///
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let (order, dist) = relocate_improve(&[2, 1, 3], 0, &dm);
/// assert_eq!(order.len(), 3);
/// assert!((dist - 6.0).abs() < 1e-10);
/// ```
pub fn relocate_improve<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while let Some(mv) = find_relocate(&current, depot, costs, &Deadline::none()) {
        mv.apply(&mut current);
    }
    let dist = route_distance(&current, depot, costs);
    (current, dist)
}
