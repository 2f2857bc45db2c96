//! 2-opt segment reversal.
//!
//! # Algorithm
//!
//! For each pair of positions i < j in the visiting order, compute the
//! change in cost from reversing the segment between them:
//!
//! ```text
//! delta = c(prev_i, r[j]) + c(r[i], next_j) - c(prev_i, r[i]) - c(r[j], next_j)
//! ```
//!
//! where `prev_i` and `next_j` wrap to the depot. Only the two boundary arcs
//! change because costs are symmetric. If delta < 0, reverse `r[i..=j]`.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::{next_of, prev_of, route_distance, Deadline, IMPROVEMENT_EPSILON};
use crate::distance::ArcCost;

/// Reverse the segment `[i..=j]` of the visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoOptMove {
    /// First position of the reversed segment.
    pub i: usize,
    /// Last position of the reversed segment.
    pub j: usize,
}

impl TwoOptMove {
    /// Cost change of applying this move.
    pub fn delta<C: ArcCost>(&self, route: &[usize], depot: usize, costs: &C) -> f64 {
        let prev_i = prev_of(route, self.i, depot);
        let next_j = next_of(route, self.j, depot);
        let (a, b) = (route[self.i], route[self.j]);

        let old_cost = costs.arc_cost(prev_i, a) + costs.arc_cost(b, next_j);
        let new_cost = costs.arc_cost(prev_i, b) + costs.arc_cost(a, next_j);
        new_cost - old_cost
    }

    /// Applies the reversal in place.
    pub fn apply(&self, route: &mut [usize]) {
        route[self.i..=self.j].reverse();
    }
}

/// Finds the first improving 2-opt move.
pub fn find_two_opt<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> Option<TwoOptMove> {
    let n = route.len();
    if n < 2 {
        return None;
    }
    for i in 0..n - 1 {
        if deadline.expired() {
            return None;
        }
        for j in i + 1..n {
            // Reversing the whole order is the same cycle traversed backwards
            if i == 0 && j == n - 1 {
                continue;
            }
            let mv = TwoOptMove { i, j };
            if mv.delta(route, depot, costs) < -IMPROVEMENT_EPSILON {
                return Some(mv);
            }
        }
    }
    None
}

/// Applies 2-opt until no improving reversal remains.
///
/// Returns the improved visiting order and its total cost.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// // Depot plus three points on a line at 1, 2, 3
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let (_, dist) = two_opt_improve(&[1, 3, 2], 0, &dm);
/// assert!(dist <= 6.0 + 1e-10); // optimal: 0→1→2→3→0 = 6
/// ```
pub fn two_opt_improve<C: ArcCost>(route: &[usize], depot: usize, costs: &C) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while let Some(mv) = find_two_opt(&current, depot, costs, &Deadline::none()) {
        mv.apply(&mut current);
    }
    let dist = route_distance(&current, depot, costs);
    (current, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::local_search::tests::square_matrix;

    fn line_matrix() -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = line_matrix();
        let (improved, dist) = two_opt_improve(&[1, 2, 3], 0, &dm);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((dist - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_removes_crossing() {
        let dm = square_matrix();
        // 0 → (0,0) → (10,10) → (10,0) → (0,10) → 0 crosses itself twice
        let initial = vec![1, 4, 2, 3];
        let initial_dist = route_distance(&initial, 0, &dm);
        let (_, improved_dist) = two_opt_improve(&initial, 0, &dm);
        assert!(improved_dist < initial_dist - 1.0);
        let optimal = 40.0 - 10.0 + 2.0 * 50.0_f64.sqrt();
        assert!((improved_dist - optimal).abs() < 1e-9);
    }

    #[test]
    fn test_2opt_empty_route() {
        let dm = line_matrix();
        let (improved, dist) = two_opt_improve(&[], 0, &dm);
        assert!(improved.is_empty());
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_2opt_single_customer() {
        let dm = line_matrix();
        let (improved, dist) = two_opt_improve(&[2], 0, &dm);
        assert_eq!(improved, vec![2]);
        assert!((dist - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_delta_matches_recomputation() {
        let dm = square_matrix();
        let route = vec![1, 4, 2, 3];
        let before = route_distance(&route, 0, &dm);
        for i in 0..3 {
            for j in i + 1..4 {
                let mv = TwoOptMove { i, j };
                let mut next = route.clone();
                mv.apply(&mut next);
                let after = route_distance(&next, 0, &dm);
                assert!((after - before - mv.delta(&route, 0, &dm)).abs() < 1e-9);
            }
        }
    }
}
