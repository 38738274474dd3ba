//! Candidate link generation from a Delaunay triangulation.
//!
//! Coordinates are triangulated as planar `(lat, lon)` points. Every
//! triangle contributes its three edges; shared edges are kept once, in
//! order of first appearance.

use std::collections::{HashMap, HashSet};

use spade::{DelaunayTriangulation, Point2, Triangulation};
use tracing::{debug, warn};

use crate::model::{Link, LinkKey, Portal};
use crate::traits::DistanceProvider;

/// Minimum number of portals that can enclose anything.
pub const MIN_PORTALS: usize = 3;

/// Candidate links for `portals`, each measured with `metric`.
///
/// Returns nothing for fewer than three portals or for a point set with no
/// triangles (all collinear, or all coincident). Portals the triangulator
/// rejects (non-finite or out-of-range coordinates) are skipped. Portals at
/// the exact position of an earlier one are absorbed by it. Coordinates too
/// close to zero for the triangulator are snapped to zero first.
pub fn candidate_links<D: DistanceProvider>(portals: &[Portal], metric: &D) -> Vec<Link> {
    if portals.len() < MIN_PORTALS {
        return Vec::new();
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    // triangulation vertex index -> position in `portals`
    let mut owners: HashMap<usize, usize> = HashMap::with_capacity(portals.len());

    for (position, portal) in portals.iter().enumerate() {
        let point = spade::mitigate_underflow(Point2::new(portal.lat(), portal.lon()));
        match triangulation.insert(point) {
            Ok(handle) => {
                if let Some(&owner) = owners.get(&handle.index()) {
                    debug!(
                        portal = portal.id(),
                        duplicate_of = portals[owner].id(),
                        "portal shares its position with an earlier one"
                    );
                } else {
                    owners.insert(handle.index(), position);
                }
            }
            Err(err) => {
                warn!(
                    portal = portal.id(),
                    error = ?err,
                    "skipping portal rejected by triangulation"
                );
            }
        }
    }

    let mut seen: HashSet<LinkKey> = HashSet::new();
    let mut links = Vec::new();

    for face in triangulation.inner_faces() {
        let corners = face.vertices().map(|vertex| owners.get(&vertex.fix().index()).copied());
        for i in 0..3 {
            let (Some(a), Some(b)) = (corners[i], corners[(i + 1) % 3]) else {
                continue;
            };
            let (from, to) = (&portals[a], &portals[b]);
            if seen.insert(LinkKey::new(from.id(), to.id())) {
                links.push(Link::measured(from.clone(), to.clone(), metric));
            }
        }
    }

    debug!(
        portals = portals.len(),
        triangles = triangulation.num_inner_faces(),
        candidates = links.len(),
        "generated candidate links"
    );

    links
}
