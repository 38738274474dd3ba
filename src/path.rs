//! Walking order over a link set.
//!
//! Greedy nearest-neighbor walk: start at the least-connected portal, then
//! repeatedly follow the shortest link not yet walked. When the current
//! portal has nothing left, step back to an adjacent portal that still does.
//! If no adjacent portal has anything left the walk stops, even if links
//! elsewhere were never walked. Callers get a best-effort path, not a
//! guaranteed cover.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::graph::{Incidence, LinkGraph};
use crate::model::Portal;
use crate::traits::DistanceProvider;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkPath {
    /// Portals in visiting order.
    pub portals: Vec<Portal>,
    /// Sum of distances between consecutive portals, in meters.
    pub length_m: f64,
    /// Links walked; less than the graph's link count when the walk stalled.
    pub links_walked: usize,
}

/// Builds a walking order covering as many links of `graph` as the greedy
/// walk reaches.
pub fn build_path<D: DistanceProvider>(graph: &LinkGraph<'_>, metric: &D) -> WalkPath {
    let Some(start) = start_slot(graph) else {
        return WalkPath::default();
    };

    let total = graph.links().len();
    let mut walked = vec![false; total];
    let mut links_walked = 0;
    let mut current = start;
    let mut slots = vec![start];

    while links_walked < total {
        if let Some(next) = nearest_open_link(graph, current, &walked, metric) {
            walked[next.link] = true;
            links_walked += 1;
            current = next.neighbor;
            slots.push(current);
            continue;
        }

        // Nothing left here; back up to a junction that still has work.
        let junction = graph
            .incident(current)
            .iter()
            .find(|incidence| has_open_link(graph, incidence.neighbor, &walked));
        match junction {
            Some(incidence) => {
                current = incidence.neighbor;
                slots.push(current);
            }
            None => {
                warn!(
                    walked = links_walked,
                    total,
                    stalled_at = graph.portal(current).id(),
                    "path does not cover every link"
                );
                break;
            }
        }
    }

    let portals: Vec<Portal> = slots.iter().map(|&slot| graph.portal(slot).clone()).collect();
    let length_m = path_length(&portals, metric);

    WalkPath {
        portals,
        length_m,
        links_walked,
    }
}

/// Total distance along `path`, in meters.
pub fn path_length<D: DistanceProvider>(path: &[Portal], metric: &D) -> f64 {
    path.windows(2)
        .map(|pair| metric.distance_m(pair[0].coords(), pair[1].coords()))
        .sum()
}

/// Least-connected portal; the earliest slot wins ties.
fn start_slot(graph: &LinkGraph<'_>) -> Option<usize> {
    (0..graph.portal_count()).min_by_key(|&slot| graph.degree(slot))
}

fn has_open_link(graph: &LinkGraph<'_>, slot: usize, walked: &[bool]) -> bool {
    graph.incident(slot).iter().any(|incidence| !walked[incidence.link])
}

/// Shortest unwalked link leaving `slot`; the first in adjacency order wins ties.
fn nearest_open_link<D: DistanceProvider>(
    graph: &LinkGraph<'_>,
    slot: usize,
    walked: &[bool],
    metric: &D,
) -> Option<Incidence> {
    let here = graph.portal(slot).coords();
    let mut best: Option<(Incidence, f64)> = None;

    for incidence in graph.incident(slot) {
        if walked[incidence.link] {
            continue;
        }
        let distance = metric.distance_m(here, graph.portal(incidence.neighbor).coords());
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((*incidence, distance));
        }
    }

    best.map(|(incidence, _)| incidence)
}
