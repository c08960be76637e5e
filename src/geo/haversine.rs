//! Great-circle distance on a spherical Earth.
//!
//! `d = 2r · asin(√(sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)))`
//!
//! Numerical notes:
//! - Rounding can push the inner term a hair above 1 for near-antipodal points;
//!   it is clamped to `[0, 1]` so `asin` never returns NaN for finite inputs.

use crate::domain::{Coordinate, DistanceUnit};

/// Haversine distance between two coordinates, in `unit`.
pub fn haversine(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * unit.earth_radius() * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinate = Coordinate { lat: 40.7506, lng: -73.9972 };
    const LA: Coordinate = Coordinate { lat: 34.0522, lng: -118.2437 };

    #[test]
    fn self_distance_is_zero() {
        assert!(haversine(NYC, NYC, DistanceUnit::Km).abs() < 1e-9);
        assert!(haversine(LA, LA, DistanceUnit::Mi).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine(NYC, LA, DistanceUnit::Km);
        let ba = haversine(LA, NYC, DistanceUnit::Km);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn known_distance_nyc_to_la() {
        // Roughly 3940 km / 2448 mi.
        let km = haversine(NYC, LA, DistanceUnit::Km);
        assert!((km - 3940.0).abs() < 20.0, "expected ~3940km, got {km}");

        let mi = haversine(NYC, LA, DistanceUnit::Mi);
        assert!((mi - km / 1.609_344).abs() < 1.0, "mi={mi} km={km}");
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine(a, b, DistanceUnit::Km);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * DistanceUnit::Km.earth_radius()).abs() < 1e-6);
    }
}
