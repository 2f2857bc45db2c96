//! Domain model types for single-depot tours.
//!
//! Provides geographic coordinates, stops carrying caller payloads, the
//! closed tour representation, and solve outcomes.

mod coordinate;
mod solution;
mod stop;
mod tour;

pub use coordinate::Coordinate;
pub use solution::{
    Leg, NotFoundReason, RouteSolution, SearchOutcome, SearchResult, SearchStats, SearchStatus,
    SolveOutcome,
};
pub use stop::Stop;
pub use tour::Tour;
