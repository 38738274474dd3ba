//! Portal, link and field value types.
//!
//! Identity is carried by portal ids alone. Coordinates and names are
//! descriptive and never take part in equality or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::scoring::{self, FIELD_SCORE};
use crate::traits::DistanceProvider;

/// One `(latitude, longitude, optional name)` entry handed to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalInput {
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
}

impl PortalInput {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, name: None }
    }

    pub fn named(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            name: Some(name.into()),
        }
    }
}

/// A geographic anchor point.
///
/// Two portals are equal when their ids match, whatever their coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    id: usize,
    name: Option<String>,
    lat: f64,
    lon: f64,
}

impl Portal {
    pub fn new(id: usize, lat: f64, lon: f64, name: Option<String>) -> Self {
        Self { id, name, lat, lon }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// (latitude, longitude).
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

impl PartialEq for Portal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Portal {}

impl Hash for Portal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}, {})", name, self.lat, self.lon),
            None => write!(f, "#{} ({}, {})", self.id, self.lat, self.lon),
        }
    }
}

/// Builds portals from inputs, assigning ids by position.
pub fn portals_from_inputs<I>(inputs: I) -> Vec<Portal>
where
    I: IntoIterator<Item = PortalInput>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(id, input)| Portal::new(id, input.lat, input.lon, input.name))
        .collect()
}

/// Unordered pair of portal ids; the smaller id always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkKey(usize, usize);

impl LinkKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { LinkKey(a, b) } else { LinkKey(b, a) }
    }
}

/// A connection between two portals.
///
/// `(a, b)` and `(b, a)` are the same link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    from: Portal,
    to: Portal,
    distance_m: f64,
}

impl Link {
    pub fn new(from: Portal, to: Portal, distance_m: f64) -> Self {
        Self { from, to, distance_m }
    }

    /// Link whose length is measured with `metric`.
    pub fn measured<D: DistanceProvider>(from: Portal, to: Portal, metric: &D) -> Self {
        let distance_m = metric.distance_m(from.coords(), to.coords());
        Self::new(from, to, distance_m)
    }

    pub fn start(&self) -> &Portal {
        &self.from
    }

    pub fn end(&self) -> &Portal {
        &self.to
    }

    pub fn key(&self) -> LinkKey {
        LinkKey::new(self.from.id, self.to.id)
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn score(&self) -> u32 {
        scoring::link_score(self.distance_m)
    }

    pub fn touches(&self, portal_id: usize) -> bool {
        self.from.id == portal_id || self.to.id == portal_id
    }

    pub fn shares_portal(&self, other: &Link) -> bool {
        self.touches(other.from.id) || self.touches(other.to.id)
    }

    /// Whether the two links cross.
    ///
    /// Links sharing a portal never cross, whatever their geometry.
    pub fn crosses(&self, other: &Link) -> bool {
        if self.shares_portal(other) {
            return false;
        }
        geometry::segments_intersect(
            self.from.coords(),
            self.to.coords(),
            other.from.coords(),
            other.to.coords(),
        )
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// A triangle closed by three links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    portals: [Portal; 3],
    links: [Link; 3],
}

impl Field {
    /// Builds a field from its corners and edges.
    ///
    /// The caller guarantees the links are exactly the triangle's edges.
    pub fn new(portals: [Portal; 3], links: [Link; 3]) -> Self {
        Self { portals, links }
    }

    pub fn portals(&self) -> &[Portal; 3] {
        &self.portals
    }

    pub fn links(&self) -> &[Link; 3] {
        &self.links
    }

    /// Corner ids in ascending order.
    pub fn key(&self) -> [usize; 3] {
        let mut ids = [self.portals[0].id, self.portals[1].id, self.portals[2].id];
        ids.sort_unstable();
        ids
    }

    pub fn score(&self) -> u32 {
        FIELD_SCORE
    }

    pub fn contains_portal(&self, portal: &Portal) -> bool {
        self.portals.contains(portal)
    }

    /// Whether `point` lies inside the triangle or on its edges.
    pub fn covers(&self, point: (f64, f64)) -> bool {
        geometry::point_in_triangle(
            point,
            self.portals[0].coords(),
            self.portals[1].coords(),
            self.portals[2].coords(),
        )
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Field {}
