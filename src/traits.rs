//! Core seams for the field planner.
//!
//! Kept minimal: the planner only needs to know how far apart two
//! coordinates are. Everything else is concrete.

/// Geodesic distance between two (latitude, longitude) points, in meters.
///
/// Implementations must be symmetric and return 0 for identical points.
/// A single provider is used for both link distances and path lengths within
/// one planning run.
pub trait DistanceProvider {
    fn distance_m(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
