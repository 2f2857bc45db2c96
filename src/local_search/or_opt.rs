//! Or-opt segment relocation.
//!
//! # Algorithm
//!
//! Tries moving segments of 2 or 3 consecutive nodes to a different
//! position in the visiting order, keeping their orientation. Single nodes
//! are covered by [`relocate`](super::relocate).
//!
//! For each segment length and each starting position, computes the cost
//! change from removing the segment and reinserting it at every other
//! position.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{route_distance, Deadline, IMPROVEMENT_EPSILON};
use crate::distance::ArcCost;

/// Segment lengths explored by [`find_or_opt`].
const SEGMENT_LENGTHS: [usize; 2] = [2, 3];

/// Move `route[from..from + len]` so it is inserted before original index `to`.
///
/// `to` ranges over `0..=n` and never falls inside `[from, from + len]`;
/// `to == n` appends the segment before the closing arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrOptMove {
    /// Start of the segment.
    pub from: usize,
    /// Segment length.
    pub len: usize,
    /// Insertion point in original indexing.
    pub to: usize,
}

impl OrOptMove {
    /// Cost change of applying this move.
    pub fn delta<C: ArcCost>(&self, route: &[usize], depot: usize, costs: &C) -> f64 {
        let n = route.len();
        let end = self.from + self.len;
        let prev = if self.from == 0 {
            depot
        } else {
            route[self.from - 1]
        };
        let after = if end >= n { depot } else { route[end] };
        let seg_first = route[self.from];
        let seg_last = route[end - 1];

        // Old edges: prev→seg_first + seg_last→after, replaced by prev→after
        let removal_gain = costs.arc_cost(prev, seg_first) + costs.arc_cost(seg_last, after)
            - costs.arc_cost(prev, after);

        let (ins_prev, ins_next) = if self.to < self.from {
            let p = if self.to == 0 {
                depot
            } else {
                route[self.to - 1]
            };
            (p, route[self.to])
        } else {
            let nx = if self.to >= n { depot } else { route[self.to] };
            (route[self.to - 1], nx)
        };

        let insertion_cost = costs.arc_cost(ins_prev, seg_first) + costs.arc_cost(seg_last, ins_next)
            - costs.arc_cost(ins_prev, ins_next);

        insertion_cost - removal_gain
    }

    /// Applies the relocation in place.
    pub fn apply(&self, route: &mut Vec<usize>) {
        let segment: Vec<usize> = route.drain(self.from..self.from + self.len).collect();
        let insert_pos = if self.to > self.from {
            self.to - self.len
        } else {
            self.to
        };
        route.splice(insert_pos..insert_pos, segment);
    }
}

/// Finds the first improving Or-opt move.
pub fn find_or_opt<C: ArcCost>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> Option<OrOptMove> {
    let n = route.len();
    for len in SEGMENT_LENGTHS {
        if n < len + 1 {
            break;
        }
        for from in 0..=(n - len) {
            if deadline.expired() {
                return None;
            }
            for to in 0..=n {
                if to >= from && to <= from + len {
                    continue;
                }
                let mv = OrOptMove { from, len, to };
                if mv.delta(route, depot, costs) < -IMPROVEMENT_EPSILON {
                    return Some(mv);
                }
            }
        }
    }
    None
}

/// Applies Or-opt until no improving segment move remains.
///
/// Returns the improved visiting order and its total cost.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{or_opt_improve, route_distance};
///
/// let dm = DistanceMatrix::from_data(5, vec![
///     0.0, 1.0, 2.0, 3.0, 4.0,
///     1.0, 0.0, 1.0, 2.0, 3.0,
///     2.0, 1.0, 0.0, 1.0, 2.0,
///     3.0, 2.0, 1.0, 0.0, 1.0,
///     4.0, 3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
/// let (_, dist) = or_opt_improve(&[3, 4, 1, 2], 0, &dm);
/// assert!(dist <= route_distance(&[3, 4, 1, 2], 0, &dm));
/// ```
pub fn or_opt_improve<C: ArcCost>(route: &[usize], depot: usize, costs: &C) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while let Some(mv) = find_or_opt(&current, depot, costs, &Deadline::none()) {
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

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_or_opt_already_optimal() {
        let dm = line_matrix(5);
        let (improved, dist) = or_opt_improve(&[1, 2, 3, 4], 0, &dm);
        assert_eq!(improved, vec![1, 2, 3, 4]);
        assert!((dist - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_short_routes_untouched() {
        let dm = line_matrix(4);
        let (improved, dist) = or_opt_improve(&[], 0, &dm);
        assert!(improved.is_empty());
        assert_eq!(dist, 0.0);
        let (improved, _) = or_opt_improve(&[2, 1], 0, &dm);
        assert_eq!(improved, vec![2, 1]);
    }

    #[test]
    fn test_or_opt_moves_segment() {
        let dm = line_matrix(5);
        // 0→3→4→1→2→0 = 3+1+3+1+2 = 10; moving [3,4] between 1 and 2 gives 8
        let (improved, dist) = or_opt_improve(&[3, 4, 1, 2], 0, &dm);
        assert_eq!(improved, vec![1, 3, 4, 2]);
        assert!((dist - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_delta_matches_recomputation() {
        let dm = square_matrix();
        let route = vec![1, 4, 2, 3];
        let before = route_distance(&route, 0, &dm);
        for len in [2, 3] {
            for from in 0..=(4 - len) {
                for to in 0..=4 {
                    if to >= from && to <= from + len {
                        continue;
                    }
                    let mv = OrOptMove { from, len, to };
                    let mut next = route.clone();
                    mv.apply(&mut next);
                    let after = route_distance(&next, 0, &dm);
                    assert!(
                        (after - before - mv.delta(&route, 0, &dm)).abs() < 1e-9,
                        "from={from} len={len} to={to}"
                    );
                }
            }
        }
    }
}
