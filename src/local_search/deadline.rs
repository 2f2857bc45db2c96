//! Cooperative wall-clock deadline.

use std::time::{Duration, Instant};

/// A point in time after which the search must stop.
///
/// Polled between move evaluations; nothing is interrupted mid-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    ///
    /// Budgets too large to represent are treated as unbounded.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(budget),
        }
    }

    /// A deadline that never expires.
    pub fn none() -> Self {
        Self { at: None }
    }

    /// Returns `true` once the deadline has passed.
    #[inline]
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    /// Time left before expiry; `None` if unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}
