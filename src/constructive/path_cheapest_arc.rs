//! Path-cheapest-arc constructive heuristic.
//!
//! Builds the tour greedily: starting from the depot, always extend the path
//! to the unvisited node reachable by the cheapest arc, then close the cycle
//! back to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! This is the nearest-neighbour tour. Solution quality is typically 15-25%
//! above optimal, which local search then closes.

use super::can_construct;
use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs a tour by repeatedly following the cheapest outgoing arc.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::path_cheapest_arc;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 9.0, 1.0,
///     9.0, 0.0, 8.5,
///     1.0, 8.5, 0.0,
/// ]).unwrap();
/// let tour = path_cheapest_arc(&dm, 0).unwrap();
/// assert_eq!(tour.customers(), &[2, 1]);
/// ```
pub fn path_cheapest_arc(distances: &DistanceMatrix, depot: usize) -> Option<Tour> {
    if !can_construct(distances, depot) {
        return None;
    }
    let n = distances.size();

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != depot).collect();
    let mut order = Vec::with_capacity(n - 1);
    let mut current = depot;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    let tour = Tour::new(depot, order, distances).ok()?;
    log::debug!(
        "construct.path_cheapest_arc: n={n} cost={:.3}",
        tour.cost()
    );
    Some(tour)
}
