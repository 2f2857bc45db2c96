//! Route evaluation: walks a tour and reports its legs.

mod evaluator;

pub use evaluator::RouteEvaluator;
