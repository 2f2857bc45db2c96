//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::error::{Result, RoutingError};

/// A `(longitude, latitude)` pair in degrees.
///
/// Both components are guaranteed finite. Serializes as a GeoJSON-style
/// `[lon, lat]` array, and deserialization applies the same validation as
/// [`Coordinate::new`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::Coordinate;
///
/// let c = Coordinate::new(126.97, 37.56).unwrap();
/// assert_eq!(c.lon(), 126.97);
/// assert_eq!(c.lat(), 37.56);
///
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// assert!(Coordinate::try_from(&[1.0, 2.0, 3.0][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite components.
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(RoutingError::invalid_coordinate(
                &[lon, lat],
                "components must be finite",
            ));
        }
        Ok(Self { lon, lat })
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}

impl TryFrom<&[f64]> for Coordinate {
    type Error = RoutingError;

    fn try_from(components: &[f64]) -> Result<Self> {
        match *components {
            [lon, lat] => Self::new(lon, lat),
            _ => Err(RoutingError::invalid_coordinate(
                components,
                format!("expected 2 components, got {}", components.len()),
            )),
        }
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = RoutingError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        Self::try_from(components.as_slice())
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = RoutingError;

    fn try_from((lon, lat): (f64, f64)) -> Result<Self> {
        Self::new(lon, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}
