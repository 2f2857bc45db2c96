//! Stop type: an opaque payload pinned to a coordinate.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A location to visit, carrying a caller-defined payload.
///
/// The solver only reads the coordinate. The payload (typically an external
/// id and display name) is handed back untouched in visiting order. By
/// convention the first stop passed to the solver is the depot.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Coordinate, Stop};
///
/// let depot = Stop::new("warehouse", Coordinate::new(0.0, 0.0).unwrap());
/// assert_eq!(*depot.payload(), "warehouse");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<P> {
    payload: P,
    coordinate: Coordinate,
}

impl<P> Stop<P> {
    /// Creates a stop.
    pub fn new(payload: P, coordinate: Coordinate) -> Self {
        Self {
            payload,
            coordinate,
        }
    }

    /// The caller's payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Location of this stop.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Consumes the stop, returning its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_accessors() {
        let c = Coordinate::new(1.0, 2.0).expect("valid");
        let s = Stop::new((7u32, "A"), c);
        assert_eq!(s.payload(), &(7, "A"));
        assert_eq!(s.coordinate(), c);
        assert_eq!(s.into_payload(), (7, "A"));
    }
}
