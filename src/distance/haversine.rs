//! Great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius used for all distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::haversine_km;
/// use u_tsp::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(1.0, 0.0).unwrap();
/// // One degree of longitude on the equator
/// assert!((haversine_km(&a, &b) - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lon1 = a.lon().to_radians();
    let lat1 = a.lat().to_radians();
    let lon2 = b.lon().to_radians();
    let lat2 = b.lat().to_radians();

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).expect("valid")
    }

    #[test]
    fn test_haversine_zero() {
        let a = coord(126.978, 37.566);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn test_haversine_equator_degree() {
        let d = haversine_km(&coord(0.0, 0.0), &coord(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_meridian_degree() {
        let d = haversine_km(&coord(30.0, 10.0), &coord(30.0, 11.0));
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = coord(-0.1276, 51.5072);
        let b = coord(2.3522, 48.8566);
        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
        // London to Paris is roughly 344 km
        assert!((haversine_km(&a, &b) - 343.5).abs() < 2.0);
    }

    #[test]
    fn test_haversine_antipodal() {
        let d = haversine_km(&coord(0.0, 0.0), &coord(180.0, 0.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
