//! Route evaluator that computes per-leg and cumulative distance.

use crate::distance::DistanceMatrix;
use crate::models::{Leg, Tour};

/// Walks a tour from the depot back to the depot.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::RouteEvaluator;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 3.0, 4.0,
///     3.0, 0.0, 5.0,
///     4.0, 5.0, 0.0,
/// ]).unwrap();
/// let tour = Tour::new(0, vec![1, 2], &dm).unwrap();
///
/// let legs = RouteEvaluator::new(&dm).build_legs(&tour);
/// assert_eq!(legs.len(), 3);
/// assert_eq!(legs[2].to, 0);
/// assert!((legs[2].cumulative_km - 12.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over `distances`.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Builds the legs of `tour` in travel order, closing arc included.
    ///
    /// The trivial tour has no legs.
    pub fn build_legs(&self, tour: &Tour) -> Vec<Leg> {
        let mut cumulative = 0.0;
        tour.arcs()
            .map(|(from, to)| {
                let distance_km = self.distances.get(from, to);
                cumulative += distance_km;
                Leg {
                    from,
                    to,
                    distance_km,
                    cumulative_km: cumulative,
                }
            })
            .collect()
    }

    /// Total distance of `tour`, closing arc included.
    pub fn total_distance(&self, tour: &Tour) -> f64 {
        tour.evaluate(self.distances)
    }
}
