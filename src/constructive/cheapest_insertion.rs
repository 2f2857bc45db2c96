//! Cheapest-insertion constructive heuristic.
//!
//! Starts from the depot alone and repeatedly inserts the unvisited node
//! whose cheapest insertion position adds the least cost:
//!
//! ```text
//! cost(u, p) = c(prev_p, u) + c(u, next_p) - c(prev_p, next_p)
//! ```
//!
//! Ties go to the lower node index, then the earlier position.
//!
//! # Complexity
//!
//! O(n³) where n = number of nodes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use super::can_construct;
use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs a tour by cheapest insertion.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::cheapest_insertion;
///
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let tour = cheapest_insertion(&dm, 0).unwrap();
/// assert!((tour.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion(distances: &DistanceMatrix, depot: usize) -> Option<Tour> {
    if !can_construct(distances, depot) {
        return None;
    }
    let n = distances.size();

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != depot).collect();
    let mut order: Vec<usize> = Vec::with_capacity(n - 1);

    while !unvisited.is_empty() {
        let mut best: Option<(usize, usize, f64)> = None;
        for (slot, &node) in unvisited.iter().enumerate() {
            for pos in 0..=order.len() {
                let cost = insertion_cost(&order, pos, node, depot, distances);
                if best.is_none_or(|(_, _, c)| cost < c) {
                    best = Some((slot, pos, cost));
                }
            }
        }
        let (slot, pos, _) = best?;
        let node = unvisited.remove(slot);
        order.insert(pos, node);
    }

    let tour = Tour::new(depot, order, distances).ok()?;
    log::debug!(
        "construct.cheapest_insertion: n={n} cost={:.3}",
        tour.cost()
    );
    Some(tour)
}

/// Cost of inserting `node` at `pos` in `order`.
fn insertion_cost(
    order: &[usize],
    pos: usize,
    node: usize,
    depot: usize,
    distances: &DistanceMatrix,
) -> f64 {
    let prev = if pos == 0 { depot } else { order[pos - 1] };
    let next = if pos == order.len() {
        depot
    } else {
        order[pos]
    };

    // Old: prev → next
    // New: prev → node → next
    distances.get(prev, node) + distances.get(node, next) - distances.get(prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::path_cheapest_arc;

    #[test]
    fn test_insertion_cost() {
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0.0, 5.0, 8.0, 12.0, 5.0, 0.0, 3.0, 7.0, 8.0, 3.0, 0.0, 4.0, 12.0, 7.0, 4.0, 0.0,
            ],
        )
        .expect("valid");

        // Inserting customer 2 at pos=1: route becomes [1, 2, 3]
        // Old: d(1,3) = 7, new: d(1,2) + d(2,3) = 3 + 4 = 7
        let cost = insertion_cost(&[1, 3], 1, 2, 0, &dm);
        assert!(cost.abs() < 1e-10);

        // Into an empty order the node makes a round trip
        let cost = insertion_cost(&[], 0, 3, 0, &dm);
        assert!((cost - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_ci_visits_everything_once() {
        let mut dm = DistanceMatrix::new(6);
        for i in 0..6 {
            for j in 0..6 {
                dm.set(i, j, ((i * 7 + j * 7) % 11) as f64 * if i == j { 0.0 } else { 1.0 });
            }
        }
        let tour = cheapest_insertion(&dm, 0).expect("tour");
        assert!(tour.is_hamiltonian(6));
    }

    #[test]
    fn test_ci_no_worse_than_greedy_path() {
        // Node 1 is close to the depot, nodes 2 and 3 lie behind it
        let pts: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (-4.0, 3.0), (-4.0, -3.0)];
        let mut dm = DistanceMatrix::new(4);
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate() {
                dm.set(i, j, ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt());
            }
        }
        let ci = cheapest_insertion(&dm, 0).expect("tour");
        let pca = path_cheapest_arc(&dm, 0).expect("tour");
        assert!(ci.cost() <= pca.cost() + 1e-10);
    }

    #[test]
    fn test_ci_depot_only_and_empty() {
        let tour = cheapest_insertion(&DistanceMatrix::new(1), 0).expect("tour");
        assert_eq!(tour.cost(), 0.0);
        assert!(cheapest_insertion(&DistanceMatrix::new(0), 0).is_none());
        assert!(cheapest_insertion(&DistanceMatrix::new(2), 5).is_none());
    }
}
