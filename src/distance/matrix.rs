//! Dense distance matrix.

use crate::error::Result;
use crate::models::Coordinate;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from coordinates, entries are great-circle distances in kilometres:
/// symmetric, non-negative, and zero on the diagonal. An explicit grid can
/// also be supplied for callers with their own transit costs.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Coordinate;
/// use u_tsp::distance::DistanceMatrix;
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(1.0, 0.0).unwrap(),
///     Coordinate::new(1.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&coords);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine distance matrix from coordinates.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let n = coordinates.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = coordinates[i].distance_to(&coordinates[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|d| d.is_finite())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

/// Builds a haversine distance matrix from raw `(lon, lat)` pairs.
///
/// Fails with [`RoutingError::InvalidCoordinate`](crate::RoutingError) if
/// any component is non-finite.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::build_distance_matrix;
///
/// let dm = build_distance_matrix(&[(0.0, 0.0), (0.0, 1.0)]).unwrap();
/// assert!(dm.is_symmetric(0.0));
/// assert!(build_distance_matrix(&[(f64::NAN, 0.0)]).is_err());
/// ```
pub fn build_distance_matrix(coordinates: &[(f64, f64)]) -> Result<DistanceMatrix> {
    let coords = coordinates
        .iter()
        .map(|&pair| Coordinate::try_from(pair))
        .collect::<Result<Vec<_>>>()?;
    Ok(DistanceMatrix::from_coordinates(&coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Coordinate> {
        [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(lon, lat)| Coordinate::new(lon, lat).expect("valid"))
            .collect()
    }

    #[test]
    fn test_from_coordinates() {
        let dm = DistanceMatrix::from_coordinates(&unit_square());
        assert_eq!(dm.size(), 4);
        for i in 0..4 {
            assert_eq!(dm.get(i, i), 0.0);
        }
        // Edges along the equator and the meridian are both ~111.19 km
        assert!((dm.get(0, 1) - 111.195).abs() < 1e-2);
        assert!((dm.get(0, 3) - 111.195).abs() < 1e-2);
        assert!(dm.get(0, 2) > dm.get(0, 1));
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_coordinates(&unit_square());
        assert!(dm.is_symmetric(0.0));
        assert!(dm.is_finite());
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(DistanceMatrix::from_coordinates(&[]).size(), 0);
        let dm = DistanceMatrix::from_coordinates(&unit_square()[..1]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_is_finite() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, f64::INFINITY, 1.0, 0.0]).expect("valid");
        assert!(!dm.is_finite());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_coordinates(&unit_square());
        // From the depot corner, the diagonal corner is the farthest
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_build_distance_matrix() {
        let dm = build_distance_matrix(&[(0.0, 0.0), (1.0, 0.0)]).expect("valid");
        assert_eq!(dm.size(), 2);
        assert!(dm.get(0, 1) > 0.0);
        assert!(build_distance_matrix(&[(0.0, f64::INFINITY)]).is_err());
    }
}
