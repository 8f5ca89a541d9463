//! Great-circle distance and map projection.
//!
//! Distances are advisory: they are shown next to a place but never change
//! which places match a query or in what order they are listed.

mod projection;

pub use placeguide_data::Coordinates;
pub use projection::{MapBounds, PinPosition, TILE_SIZE, WorldPoint, project};

use placeguide_data::Place;

/// Mean radius of the Earth in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two points given in decimal degrees.
///
/// Identical points give `0.0`. The result is symmetric in its two points.
/// No validation is done: a NaN or infinite input yields NaN, never a panic.
/// Callers check that both points exist before calling.
#[must_use]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[inline]
#[must_use]
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    distance(from.lat, from.lng, to.lat, to.lng)
}

/// Miles from `user` to `place`, or `None` when the place lacks coordinates.
#[must_use]
pub fn distance_to(user: Coordinates, place: &Place) -> Option<f64> {
    place.coordinates().map(|coords| distance_between(user, coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(distance(34.0, -118.3, 34.0, -118.3), 0.0);
        assert_eq!(distance(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((34.6677, -120.1149), (34.4468, -119.2045)),
            ((51.5074, -0.1278), (40.7128, -74.0060)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
        ];
        for ((lat1, lng1), (lat2, lng2)) in pairs {
            let forward = distance(lat1, lng1, lat2, lng2);
            let backward = distance(lat2, lng2, lat1, lng1);
            assert!(
                (forward - backward).abs() < 1e-9,
                "{forward} != {backward}"
            );
        }
    }

    #[test]
    fn test_known_distance() {
        // Los Angeles to San Francisco, roughly 347 miles
        let miles = distance(34.0522, -118.2437, 37.7749, -122.4194);
        assert!((miles - 347.4).abs() < 2.0, "got {miles}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let miles = distance(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
        assert!((miles - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let miles = distance(0.0, 0.0, 0.0, 180.0);
        assert!((miles - EARTH_RADIUS_MILES * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_points_are_finite() {
        let half_circumference = EARTH_RADIUS_MILES * std::f64::consts::PI;
        for i in 1..9000 {
            let lat = f64::from(i) / 100.0;
            let miles = distance(lat, 0.0, -lat, 180.0);
            assert!(miles.is_finite(), "distance at lat {lat} is {miles}");
            assert!((miles - half_circumference).abs() < 1e-2, "got {miles} at lat {lat}");
        }
    }

    #[test]
    fn test_nan_input_is_nan() {
        assert!(distance(f64::NAN, 0.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_distance_to_place() {
        let user = Coordinates::new(34.6, -120.1);
        let place = Place::new("p", "P").with_coordinates(34.6, -120.1);
        assert_eq!(distance_to(user, &place), Some(0.0));

        let mut half = Place::new("h", "H");
        half.lat = Some(34.6);
        assert_eq!(distance_to(user, &half), None);
    }
}
