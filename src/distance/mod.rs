//! Distance matrices and arc costs.
//!
//! Provides a dense great-circle distance matrix and the [`ArcCost`] seam
//! that local search evaluates moves against.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::{build_distance_matrix, DistanceMatrix};

/// Cost of travelling along an arc between two node indices.
///
/// Implemented by [`DistanceMatrix`] for plain distances and by the guided
/// local search for penalized distances. Implementations must be symmetric.
pub trait ArcCost {
    /// Cost of the arc `from → to`.
    fn arc_cost(&self, from: usize, to: usize) -> f64;
}

impl ArcCost for DistanceMatrix {
    fn arc_cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
