//! Arc penalties for guided local search.

use crate::distance::{ArcCost, DistanceMatrix};

/// Dense symmetric penalty counts for arcs.
///
/// Stored row-major like [`DistanceMatrix`]. Increments update both
/// directions and saturate instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenaltyMatrix {
    data: Vec<u32>,
    size: usize,
}

impl PenaltyMatrix {
    /// Creates an all-zero penalty matrix for `size` nodes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Penalty count of the arc between `a` and `b`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> u32 {
        self.data[a * self.size + b]
    }

    /// Raises the penalty of the arc between `a` and `b` by one.
    pub fn increment(&mut self, a: usize, b: usize) {
        let ab = a * self.size + b;
        let ba = b * self.size + a;
        self.data[ab] = self.data[ab].saturating_add(1);
        if ab != ba {
            self.data[ba] = self.data[ba].saturating_add(1);
        }
    }

    /// Clears every penalty.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Sum of all penalty counts over undirected arcs.
    pub fn total(&self) -> u64 {
        let mut sum = 0u64;
        for i in 0..self.size {
            for j in i..self.size {
                sum += u64::from(self.get(i, j));
            }
        }
        sum
    }
}

/// Distance plus `lambda` times the arc penalty.
///
/// This is the objective local search descends on during guided search;
/// the true tour length is tracked separately.
#[derive(Debug, Clone, Copy)]
pub struct PenalizedCost<'a> {
    distances: &'a DistanceMatrix,
    penalties: &'a PenaltyMatrix,
    lambda: f64,
}

impl<'a> PenalizedCost<'a> {
    /// Creates the augmented cost.
    pub fn new(distances: &'a DistanceMatrix, penalties: &'a PenaltyMatrix, lambda: f64) -> Self {
        Self {
            distances,
            penalties,
            lambda,
        }
    }
}

impl ArcCost for PenalizedCost<'_> {
    #[inline]
    fn arc_cost(&self, from: usize, to: usize) -> f64 {
        let base = self.distances.get(from, to);
        if self.lambda == 0.0 {
            return base;
        }
        base + self.lambda * f64::from(self.penalties.get(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_increment_symmetric() {
        let mut p = PenaltyMatrix::new(3);
        p.increment(0, 2);
        p.increment(2, 0);
        assert_eq!(p.get(0, 2), 2);
        assert_eq!(p.get(2, 0), 2);
        assert_eq!(p.get(0, 1), 0);
        assert_eq!(p.total(), 2);
    }

    #[test]
    fn test_penalty_reset() {
        let mut p = PenaltyMatrix::new(2);
        p.increment(0, 1);
        p.reset();
        assert_eq!(p.total(), 0);
    }

    #[test]
    fn test_penalized_cost() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        let mut p = PenaltyMatrix::new(2);
        assert_eq!(PenalizedCost::new(&dm, &p, 0.5).arc_cost(0, 1), 4.0);
        p.increment(0, 1);
        p.increment(0, 1);
        let cost = PenalizedCost::new(&dm, &p, 0.5);
        assert_eq!(cost.arc_cost(0, 1), 5.0);
        assert_eq!(cost.arc_cost(1, 0), 5.0);
        assert_eq!(PenalizedCost::new(&dm, &p, 0.0).arc_cost(0, 1), 4.0);
    }
}
