//! Node exchange (swap).
//!
//! # Algorithm
//!
//! Swaps the positions of two nodes in the visiting order. Adjacent nodes
//! share an arc, so they are handled separately from the general case where
//! four distinct arcs change.
//!
//! # Complexity
//!
//! O(n²) per scan.

use super::{next_of, prev_of, route_distance, Deadline, IMPROVEMENT_EPSILON};
use crate::distance::ArcCost;

/// Swap the nodes at positions `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeMove {
    /// Lower position.
    pub i: usize,
    /// Higher position.
    pub j: usize,
}

impl ExchangeMove {
    /// Cost change of applying this move.
    pub fn delta<C: ArcCost>(&self, route: &[usize], depot: usize, costs: &C) -> f64 {
        let (a, b) = (route[self.i], route[self.j]);
        let pa = prev_of(route, self.i, depot);
        let nb = next_of(route, self.j, depot);

        if self.j == self.i + 1 {
            let old = costs.arc_cost(pa, a) + costs.arc_cost(a, b) + costs.arc_cost(b, nb);
            let new = costs.arc_cost(pa, b) + costs.arc_cost(b, a) + costs.arc_cost(a, nb);
            return new - old;
        }

        let na = next_of(route, self.i, depot);
        let pb = prev_of(route, self.j, depot);
        let old = costs.arc_cost(pa, a)
            + costs.arc_cost(a, na)
            + costs.arc_cost(pb, b)
            + costs.arc_cost(b, nb);
        let new = costs.arc_cost(pa, b)
            + costs.arc_cost(b, na)
            + costs.arc_cost(pb, a)
            + costs.arc_cost(a, nb);
        new - old
    }

    /// Applies the swap in place.
    pub fn apply(&self, route: &mut [usize]) {
        route.swap(self.i, self.j);
    }
}

/// Finds the first improving exchange.
pub fn find_exchange<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> Option<ExchangeMove> {
    let n = route.len();
    if n < 2 {
        return None;
    }
    for i in 0..n - 1 {
        if deadline.expired() {
            return None;
        }
        for j in i + 1..n {
            let mv = ExchangeMove { i, j };
            if mv.delta(route, depot, costs) < -IMPROVEMENT_EPSILON {
                return Some(mv);
            }
        }
    }
    None
}

/// Applies exchanges until no improving swap remains.
///
/// Returns the improved visiting order and its total cost.
pub fn exchange_improve<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while let Some(mv) = find_exchange(&current, depot, costs, &Deadline::none()) {
        mv.apply(&mut current);
    }
    let dist = route_distance(&current, depot, costs);
    (current, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::tests::square_matrix;

    #[test]
    fn test_delta_matches_recomputation() {
        let dm = square_matrix();
        let route = vec![1, 4, 2, 3];
        let before = route_distance(&route, 0, &dm);
        for i in 0..3 {
            for j in i + 1..4 {
                let mv = ExchangeMove { i, j };
                let mut next = route.clone();
                mv.apply(&mut next);
                let after = route_distance(&next, 0, &dm);
                assert!(
                    (after - before - mv.delta(&route, 0, &dm)).abs() < 1e-9,
                    "i={i} j={j}"
                );
            }
        }
    }

    #[test]
    fn test_exchange_fixes_swapped_pair() {
        let dm = square_matrix();
        // 0→(0,0)→(10,0)→(0,10)→(10,10)→0 crosses once; one swap removes it
        let (order, dist) = exchange_improve(&[1, 2, 3, 4], 0, &dm);
        let optimal = 30.0 + 2.0 * 50.0_f64.sqrt();
        assert!((dist - optimal).abs() < 1e-9);
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_exchange_short_routes() {
        let dm = square_matrix();
        assert!(find_exchange(&[], 0, &dm, &Deadline::none()).is_none());
        assert!(find_exchange(&[1], 0, &dm, &Deadline::none()).is_none());
    }
}
