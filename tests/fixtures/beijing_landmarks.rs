//! Real Beijing landmarks for realistic test fixtures.
//!
//! Coordinates are approximate entrance or center points taken from
//! OpenStreetMap, rounded to four decimals.

use field_planner::{Portal, PortalInput};
use field_planner::model::portals_from_inputs;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    pub fn input(&self) -> PortalInput {
        PortalInput::named(self.name, self.lat, self.lon)
    }
}

// ============================================================================
// University campuses (dense cluster, mostly sub-5 km links)
// ============================================================================

pub const CAMPUS: &[Landmark] = &[
    Landmark::new("Peking University West Gate", 39.9929, 116.3023),
    Landmark::new("Weiming Lake", 39.9925, 116.3076),
    Landmark::new("Boya Pagoda", 39.9930, 116.3097),
    Landmark::new("Tsinghua Old Gate", 40.0003, 116.3173),
    Landmark::new("Tsinghua Main Building", 40.0030, 116.3265),
    Landmark::new("Zhongguancun", 39.9836, 116.3163),
    Landmark::new("Wudaokou Station", 39.9925, 116.3375),
    Landmark::new("Renmin University", 39.9700, 116.3170),
    Landmark::new("Beihang University", 39.9812, 116.3483),
];

// ============================================================================
// Wider city (links reach the 5-25 km brackets)
// ============================================================================

pub const CITY: &[Landmark] = &[
    Landmark::new("Summer Palace East Gate", 39.9990, 116.2750),
    Landmark::new("Old Summer Palace", 40.0080, 116.2980),
    Landmark::new("Fragrant Hills Park", 39.9920, 116.1880),
    Landmark::new("National Library", 39.9440, 116.3240),
    Landmark::new("Beijing Zoo", 39.9388, 116.3397),
    Landmark::new("Xizhimen", 39.9405, 116.3553),
    Landmark::new("Beijing Normal University", 39.9614, 116.3659),
    Landmark::new("National Stadium", 39.9929, 116.3965),
    Landmark::new("National Aquatics Center", 39.9913, 116.3840),
    Landmark::new("Forbidden City", 39.9163, 116.3972),
    Landmark::new("Temple of Heaven", 39.8822, 116.4066),
    Landmark::new("Beijing West Railway Station", 39.8949, 116.3219),
];

/// Campus and city landmarks together.
pub fn all_landmarks() -> Vec<Landmark> {
    CAMPUS.iter().chain(CITY).cloned().collect()
}

/// Portals for `landmarks`, ids by position.
pub fn portals_for(landmarks: &[Landmark]) -> Vec<Portal> {
    portals_from_inputs(landmarks.iter().map(Landmark::input))
}

/// Unnamed portals at the given coordinates, ids by position.
pub fn portals_at(coords: &[(f64, f64)]) -> Vec<Portal> {
    portals_from_inputs(coords.iter().map(|&(lat, lon)| PortalInput::new(lat, lon)))
}
