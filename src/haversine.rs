//! Haversine distance provider.
//!
//! Great-circle distance on a spherical Earth. Portal separations relevant
//! for link scoring (1 km to a few hundred km) stay well within the
//! tolerance needed to pick the right score bracket.

use crate::traits::DistanceProvider;

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine-based distance provider.
#[derive(Debug, Clone, Copy)]
pub struct Haversine {
    /// Sphere radius in meters.
    pub radius_m: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_m: EARTH_RADIUS_M,
        }
    }
}

impl Haversine {
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Central angle between two points in radians.
    fn central_angle(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lon1) = from;
        let (lat2, lon2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lon = (lon2 - lon1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

        // Clamp guards asin against rounding just above 1 for antipodes.
        2.0 * a.sqrt().min(1.0).asin()
    }
}

impl DistanceProvider for Haversine {
    fn distance_m(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        self.radius_m * Self::central_angle(from, to)
    }
}

/// Distance in meters using the default [`Haversine`] provider.
pub fn distance_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    Haversine::default().distance_m(from, to)
}
