//! # u-tsp
//!
//! Single-vehicle tour optimization over geographic stops: a haversine
//! distance model, greedy construction, and guided local search bounded by a
//! wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Stop, Tour, RouteSolution)
//! - [`distance`] — Haversine distance and the distance matrix
//! - [`constructive`] — Constructive heuristics (Cheapest Insertion, Path Cheapest Arc)
//! - [`local_search`] — Local search operators (2-opt, Relocate, Or-opt, Exchange)
//! - [`gls`] — Guided local search with arc penalties
//! - [`evaluation`] — Route legs and cumulative distance
//! - [`config`] — Solver configuration
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::models::{Coordinate, Stop};
//! use u_tsp::{solve, SolveOutcome, SolverConfig};
//!
//! let stops = vec![
//!     Stop::new(("depot", 0), Coordinate::new(13.40, 52.52).unwrap()),
//!     Stop::new(("a", 1), Coordinate::new(13.45, 52.50).unwrap()),
//!     Stop::new(("b", 2), Coordinate::new(13.38, 52.55).unwrap()),
//! ];
//! let config = SolverConfig::default().with_time_limit(Duration::from_millis(100));
//!
//! match solve(&stops, &config) {
//!     SolveOutcome::Found(route) => assert_eq!(route.stops().len(), 2),
//!     SolveOutcome::NotFound(reason) => panic!("{reason}"),
//! }
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod gls;
pub mod local_search;
pub mod models;
mod solver;

pub use config::SolverConfig;
pub use constructive::FirstSolutionStrategy;
pub use distance::build_distance_matrix;
pub use error::{Result, RoutingError};
pub use gls::LocalSearchMetaheuristic;
pub use models::{SearchOutcome, SolveOutcome};
pub use solver::{solve, solve_matrix, DEPOT};
