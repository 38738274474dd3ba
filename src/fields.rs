//! Field derivation over an accepted link set.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::LinkGraph;
use crate::model::Field;

/// Default cap on other linked portals a field may cover.
pub const MAX_PORTALS_IN_FIELD: usize = 8;

/// Every triangle closed by three links of `graph`, in discovery order.
///
/// Links are visited in order; for each one, the common neighbors of its two
/// endpoints (in the start endpoint's adjacency order) close a triangle.
/// Each triangle is reported once.
pub fn closed_triangles(graph: &LinkGraph<'_>) -> Vec<Field> {
    let mut seen: HashSet<[usize; 3]> = HashSet::new();
    let mut fields = Vec::new();

    for link in graph.links() {
        let slots = (graph.slot_of(link.start().id()), graph.slot_of(link.end().id()));
        let (Some(a), Some(b)) = slots else {
            continue;
        };

        for incidence in graph.incident(a) {
            let c = incidence.neighbor;
            if c == b {
                continue;
            }
            let Some(bc) = graph.edge_between(b, c) else {
                continue;
            };

            let (pa, pb, pc) = (graph.portal(a), graph.portal(b), graph.portal(c));
            let mut key = [pa.id(), pb.id(), pc.id()];
            key.sort_unstable();
            if !seen.insert(key) {
                continue;
            }

            fields.push(Field::new(
                [pa.clone(), pb.clone(), pc.clone()],
                [link.clone(), graph.link(incidence.link).clone(), graph.link(bc).clone()],
            ));
        }
    }

    fields
}

/// Number of linked portals other than its corners that `field` covers,
/// boundary included.
pub fn portals_inside(field: &Field, graph: &LinkGraph<'_>) -> usize {
    graph
        .portals()
        .iter()
        .filter(|portal| !field.contains_portal(portal))
        .filter(|portal| field.covers(portal.coords()))
        .count()
}

/// Closed triangles of `graph` that cover at most `max_inside` other linked
/// portals.
pub fn derive_fields(graph: &LinkGraph<'_>, max_inside: usize) -> Vec<Field> {
    let triangles = closed_triangles(graph);
    let found = triangles.len();

    let fields: Vec<Field> = triangles
        .into_iter()
        .filter(|field| portals_inside(field, graph) <= max_inside)
        .collect();

    debug!(
        triangles = found,
        kept = fields.len(),
        discarded = found - fields.len(),
        max_inside,
        "derived fields"
    );

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Portal};

    fn portal(id: usize, lat: f64, lon: f64) -> Portal {
        Portal::new(id, lat, lon, None)
    }

    fn link(a: &Portal, b: &Portal) -> Link {
        Link::new(a.clone(), b.clone(), 1.0)
    }

    #[test]
    fn test_single_triangle() {
        let (a, b, c) = (portal(0, 0.0, 0.0), portal(1, 0.0, 1.0), portal(2, 1.0, 0.0));
        let links = vec![link(&a, &b), link(&b, &c), link(&c, &a)];
        let graph = LinkGraph::build(&links);

        let fields = derive_fields(&graph, MAX_PORTALS_IN_FIELD);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key(), [0, 1, 2]);

        let edges: HashSet<_> = fields[0].links().iter().map(Link::key).collect();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_open_path_has_no_fields() {
        let (a, b, c) = (portal(0, 0.0, 0.0), portal(1, 0.0, 1.0), portal(2, 1.0, 0.0));
        let links = vec![link(&a, &b), link(&b, &c)];
        let graph = LinkGraph::build(&links);
        assert!(closed_triangles(&graph).is_empty());
    }

    #[test]
    fn test_fan_around_center() {
        // Square with a linked center: four small triangles plus nothing else.
        let corners = [
            portal(0, 0.0, 0.0),
            portal(1, 0.0, 2.0),
            portal(2, 2.0, 2.0),
            portal(3, 2.0, 0.0),
        ];
        let center = portal(4, 1.0, 1.0);
        let mut links = Vec::new();
        for i in 0..4 {
            links.push(link(&corners[i], &corners[(i + 1) % 4]));
            links.push(link(&corners[i], &center));
        }
        let graph = LinkGraph::build(&links);

        let fields = derive_fields(&graph, MAX_PORTALS_IN_FIELD);
        assert_eq!(fields.len(), 4);
        for field in &fields {
            assert!(field.contains_portal(&center));
        }
    }

    #[test]
    fn test_crowded_field_is_discarded() {
        let (a, b, c) = (portal(0, 0.0, 0.0), portal(1, 0.0, 10.0), portal(2, 10.0, 0.0));
        let mut links = vec![link(&a, &b), link(&b, &c), link(&c, &a)];

        // Nine portals inside the triangle, each linked to one outside it.
        let outside = portal(100, -5.0, -5.0);
        for i in 0..9 {
            let inner = portal(10 + i, 1.0 + 0.2 * i as f64, 1.0);
            links.push(link(&inner, &outside));
        }
        let graph = LinkGraph::build(&links);

        let triangle = closed_triangles(&graph)
            .into_iter()
            .find(|field| field.key() == [0, 1, 2])
            .expect("outer triangle");
        assert_eq!(portals_inside(&triangle, &graph), 9);

        assert!(derive_fields(&graph, 8).iter().all(|field| field.key() != [0, 1, 2]));
        assert!(derive_fields(&graph, 9).iter().any(|field| field.key() == [0, 1, 2]));
    }

    #[test]
    fn test_boundary_portals_count_as_inside() {
        let (a, b, c) = (portal(0, 0.0, 0.0), portal(1, 0.0, 4.0), portal(2, 4.0, 0.0));
        let on_edge = portal(3, 0.0, 2.0);
        let elsewhere = portal(4, -1.0, -1.0);
        let links = vec![
            link(&a, &b),
            link(&b, &c),
            link(&c, &a),
            link(&on_edge, &elsewhere),
        ];
        let graph = LinkGraph::build(&links);
        let fields = closed_triangles(&graph);
        assert_eq!(fields.len(), 1);
        assert_eq!(portals_inside(&fields[0], &graph), 1);
    }
}
