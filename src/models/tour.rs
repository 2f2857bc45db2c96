//! Closed tour over node indices.

use crate::distance::{ArcCost, DistanceMatrix};
use crate::error::{Result, RoutingError};
use crate::local_search::route_distance;

/// A closed tour that starts and ends at the depot.
///
/// The depot is stored separately from the visiting order, which holds every
/// other node index exactly once. The closing arc back to the depot is
/// implicit. The cached cost is the plain (unpenalized) tour length.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.5,
///     2.0, 1.5, 0.0,
/// ]).unwrap();
/// let tour = Tour::new(0, vec![1, 2], &dm).unwrap();
/// assert_eq!(tour.closed_sequence(), vec![0, 1, 2, 0]);
/// assert!((tour.cost() - 4.5).abs() < 1e-10);
///
/// assert!(Tour::new(0, vec![1, 1], &dm).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    depot: usize,
    customers: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// A tour that never leaves the depot.
    pub fn trivial(depot: usize) -> Self {
        Self {
            depot,
            customers: Vec::new(),
            cost: 0.0,
        }
    }

    /// Creates a tour, checking that `depot` and `customers` together form a
    /// permutation of `0..distances.size()`.
    pub fn new(depot: usize, customers: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        check_permutation(depot, &customers, distances.size())?;
        let cost = route_distance(&customers, depot, distances);
        Ok(Self {
            depot,
            customers,
            cost,
        })
    }

    /// Creates a tour from a node order whose first element is the depot.
    ///
    /// A trailing repeat of the depot (closed form) is accepted and dropped.
    pub fn from_order(order: &[usize], distances: &DistanceMatrix) -> Result<Self> {
        let (&depot, rest) = order
            .split_first()
            .ok_or_else(|| RoutingError::InvalidTour("empty node order".into()))?;
        let rest = match rest.split_last() {
            Some((&last, inner)) if last == depot => inner,
            _ => rest,
        };
        Self::new(depot, rest.to_vec(), distances)
    }

    /// The depot index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Visiting order, excluding the depot.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    pub(crate) fn customers_mut(&mut self) -> &mut Vec<usize> {
        &mut self.customers
    }

    /// Number of nodes including the depot.
    pub fn num_nodes(&self) -> usize {
        self.customers.len() + 1
    }

    /// Total length of the tour, closing arc included.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub(crate) fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// Node sequence with the depot at both ends.
    pub fn closed_sequence(&self) -> Vec<usize> {
        let mut seq = Vec::with_capacity(self.customers.len() + 2);
        seq.push(self.depot);
        seq.extend_from_slice(&self.customers);
        seq.push(self.depot);
        seq
    }

    /// Arcs in travel order, closing arc included.
    ///
    /// The trivial tour has no arcs.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let first = self.customers.first().map(|&c| (self.depot, c));
        let inner = self.customers.windows(2).map(|w| (w[0], w[1]));
        let last = self.customers.last().map(|&c| (c, self.depot));
        first.into_iter().chain(inner).chain(last)
    }

    /// Cost of each arc in travel order.
    pub fn arc_costs<C: ArcCost>(&self, costs: &C) -> Vec<f64> {
        self.arcs().map(|(a, b)| costs.arc_cost(a, b)).collect()
    }

    /// Re-evaluates the tour under an arbitrary cost function.
    pub fn evaluate<C: ArcCost>(&self, costs: &C) -> f64 {
        route_distance(&self.customers, self.depot, costs)
    }

    /// Returns `true` if the tour visits every index in `0..n` exactly once.
    pub fn is_hamiltonian(&self, n: usize) -> bool {
        check_permutation(self.depot, &self.customers, n).is_ok()
    }
}

fn check_permutation(depot: usize, customers: &[usize], n: usize) -> Result<()> {
    if customers.len() + 1 != n {
        return Err(RoutingError::InvalidTour(format!(
            "expected {} nodes, got {}",
            n,
            customers.len() + 1
        )));
    }
    let mut seen = vec![false; n];
    for &node in std::iter::once(&depot).chain(customers) {
        if node >= n {
            return Err(RoutingError::InvalidTour(format!(
                "node {node} out of range for {n} nodes"
            )));
        }
        if seen[node] {
            return Err(RoutingError::InvalidTour(format!("node {node} repeated")));
        }
        seen[node] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> DistanceMatrix {
        // 0 - 1 - 2 - 3 on a line, unit spacing
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_tour_new_and_cost() {
        let dm = line_matrix();
        let t = Tour::new(0, vec![1, 2, 3], &dm).expect("valid");
        assert_eq!(t.num_nodes(), 4);
        assert!((t.cost() - 6.0).abs() < 1e-10);
        assert!(t.is_hamiltonian(4));
    }

    #[test]
    fn test_tour_rejects_duplicates_and_omissions() {
        let dm = line_matrix();
        assert!(Tour::new(0, vec![1, 2, 2], &dm).is_err());
        assert!(Tour::new(0, vec![1, 2], &dm).is_err());
        assert!(Tour::new(0, vec![1, 2, 0], &dm).is_err());
        assert!(Tour::new(0, vec![1, 2, 7], &dm).is_err());
    }

    #[test]
    fn test_tour_from_order_closed_and_open() {
        let dm = line_matrix();
        let open = Tour::from_order(&[0, 2, 1, 3], &dm).expect("open");
        let closed = Tour::from_order(&[0, 2, 1, 3, 0], &dm).expect("closed");
        assert_eq!(open, closed);
        assert_eq!(open.customers(), &[2, 1, 3]);
        assert!(Tour::from_order(&[], &dm).is_err());
    }

    #[test]
    fn test_tour_arcs() {
        let dm = line_matrix();
        let t = Tour::new(0, vec![1, 3, 2], &dm).expect("valid");
        let arcs: Vec<_> = t.arcs().collect();
        assert_eq!(arcs, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
        assert_eq!(t.arc_costs(&dm), vec![1.0, 2.0, 1.0, 2.0]);
        let sum: f64 = t.arc_costs(&dm).iter().sum();
        assert!((sum - t.cost()).abs() < 1e-10);
    }

    #[test]
    fn test_trivial_tour() {
        let t = Tour::trivial(0);
        assert_eq!(t.num_nodes(), 1);
        assert_eq!(t.cost(), 0.0);
        assert_eq!(t.arcs().count(), 0);
        assert_eq!(t.closed_sequence(), vec![0, 0]);
    }
}
