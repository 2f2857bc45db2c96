//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constructive::FirstSolutionStrategy;
use crate::error::{Result, RoutingError};
use crate::gls::LocalSearchMetaheuristic;
use crate::local_search::Neighborhood;

/// Default wall-clock budget for one solve, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 10.0;

/// Default scaling of the guided local search penalty weight.
pub const DEFAULT_LAMBDA_COEFFICIENT: f64 = 0.1;

/// Parameters for one solve.
///
/// Deserializes with every field optional; missing fields take their
/// defaults.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::{SolverConfig, FirstSolutionStrategy};
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_millis(500))
///     .with_first_solution_strategy(FirstSolutionStrategy::PathCheapestArc)
///     .with_max_stall_rounds(200);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.time_limit(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    time_limit_secs: f64,
    first_solution_strategy: FirstSolutionStrategy,
    metaheuristic: LocalSearchMetaheuristic,
    lambda_coefficient: f64,
    max_stall_rounds: Option<u64>,
    neighborhoods: Vec<Neighborhood>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            first_solution_strategy: FirstSolutionStrategy::default(),
            metaheuristic: LocalSearchMetaheuristic::default(),
            lambda_coefficient: DEFAULT_LAMBDA_COEFFICIENT,
            max_stall_rounds: None,
            neighborhoods: Neighborhood::ALL.to_vec(),
        }
    }
}

impl SolverConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_secs = limit.as_secs_f64();
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Sets the construction strategy.
    pub fn with_first_solution_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Sets the improvement metaheuristic.
    pub fn with_metaheuristic(mut self, metaheuristic: LocalSearchMetaheuristic) -> Self {
        self.metaheuristic = metaheuristic;
        self
    }

    /// Sets the penalty weight coefficient.
    pub fn with_lambda_coefficient(mut self, coefficient: f64) -> Self {
        self.lambda_coefficient = coefficient;
        self
    }

    /// Stops after this many penalty rounds without a new best tour.
    pub fn with_max_stall_rounds(mut self, rounds: u64) -> Self {
        self.max_stall_rounds = Some(rounds);
        self
    }

    /// Sets the neighbourhoods to explore, in order.
    pub fn with_neighborhoods(mut self, neighborhoods: Vec<Neighborhood>) -> Self {
        self.neighborhoods = neighborhoods;
        self
    }

    /// The wall-clock budget.
    ///
    /// Negative or NaN budgets map to zero (construction only); call
    /// [`validate`](Self::validate) to reject them instead.
    pub fn time_limit(&self) -> Duration {
        if self.time_limit_secs.is_nan() || self.time_limit_secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.time_limit_secs).unwrap_or(Duration::MAX)
    }

    /// Construction strategy.
    pub fn first_solution_strategy(&self) -> FirstSolutionStrategy {
        self.first_solution_strategy
    }

    /// Improvement metaheuristic.
    pub fn metaheuristic(&self) -> LocalSearchMetaheuristic {
        self.metaheuristic
    }

    /// Penalty weight coefficient, clamped to be non-negative.
    pub fn lambda_coefficient(&self) -> f64 {
        if self.lambda_coefficient.is_finite() {
            self.lambda_coefficient.max(0.0)
        } else {
            0.0
        }
    }

    /// Penalty rounds without a new best tour before the search stops.
    pub fn max_stall_rounds(&self) -> Option<u64> {
        self.max_stall_rounds
    }

    /// Neighbourhoods explored, in order.
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.time_limit_secs.is_finite() || self.time_limit_secs < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "time limit must be a finite, non-negative number of seconds, got {}",
                self.time_limit_secs
            )));
        }
        if !self.lambda_coefficient.is_finite() || self.lambda_coefficient < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "lambda coefficient must be finite and non-negative, got {}",
                self.lambda_coefficient
            )));
        }
        if self.neighborhoods.is_empty() {
            return Err(RoutingError::InvalidConfig(
                "at least one neighborhood is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = SolverConfig::default();
        assert_eq!(c.time_limit(), Duration::from_secs(10));
        assert_eq!(
            c.first_solution_strategy(),
            FirstSolutionStrategy::CheapestInsertion
        );
        assert_eq!(c.metaheuristic(), LocalSearchMetaheuristic::GuidedLocalSearch);
        assert_eq!(c.lambda_coefficient(), 0.1);
        assert!(c.max_stall_rounds().is_none());
        assert_eq!(c.neighborhoods(), &Neighborhood::ALL);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::default()
            .with_time_limit_secs(2.5)
            .with_metaheuristic(LocalSearchMetaheuristic::GreedyDescent)
            .with_lambda_coefficient(0.3)
            .with_max_stall_rounds(50)
            .with_neighborhoods(vec![Neighborhood::TwoOpt]);
        assert_eq!(c.time_limit(), Duration::from_millis(2500));
        assert_eq!(c.metaheuristic(), LocalSearchMetaheuristic::GreedyDescent);
        assert_eq!(c.lambda_coefficient(), 0.3);
        assert_eq!(c.max_stall_rounds(), Some(50));
        assert_eq!(c.neighborhoods(), &[Neighborhood::TwoOpt]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SolverConfig::default()
            .with_time_limit_secs(-1.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_time_limit_secs(f64::NAN)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_lambda_coefficient(-0.5)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_neighborhoods(vec![])
            .validate()
            .is_err());
    }

    #[test]
    fn test_invalid_values_are_clamped() {
        let c = SolverConfig::default()
            .with_time_limit_secs(-3.0)
            .with_lambda_coefficient(f64::NAN);
        assert_eq!(c.time_limit(), Duration::ZERO);
        assert_eq!(c.lambda_coefficient(), 0.0);
    }
}
