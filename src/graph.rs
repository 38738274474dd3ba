//! Portal adjacency over a fixed set of links.
//!
//! Built once per link set and shared read-only by the field deriver and the
//! path builder. Portals get dense slot indices in order of first appearance
//! (walking the links in order, start endpoint before end endpoint), which is
//! also the tie-break order for anything that scans "all portals".

use std::collections::HashMap;

use crate::model::{Link, Portal};

/// One edge as seen from a portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    /// Slot of the portal on the far side.
    pub neighbor: usize,
    /// Index of the link in [`LinkGraph::links`].
    pub link: usize,
}

#[derive(Debug, Clone)]
pub struct LinkGraph<'a> {
    links: &'a [Link],
    portals: Vec<&'a Portal>,
    slots: HashMap<usize, usize>,
    adjacency: Vec<Vec<Incidence>>,
}

impl<'a> LinkGraph<'a> {
    pub fn build(links: &'a [Link]) -> Self {
        let mut graph = LinkGraph {
            links,
            portals: Vec::new(),
            slots: HashMap::new(),
            adjacency: Vec::new(),
        };

        for (index, link) in links.iter().enumerate() {
            let a = graph.slot_for(link.start());
            let b = graph.slot_for(link.end());
            graph.adjacency[a].push(Incidence { neighbor: b, link: index });
            graph.adjacency[b].push(Incidence { neighbor: a, link: index });
        }

        graph
    }

    fn slot_for(&mut self, portal: &'a Portal) -> usize {
        if let Some(&slot) = self.slots.get(&portal.id()) {
            return slot;
        }
        let slot = self.portals.len();
        self.slots.insert(portal.id(), slot);
        self.portals.push(portal);
        self.adjacency.push(Vec::new());
        slot
    }

    pub fn links(&self) -> &'a [Link] {
        self.links
    }

    pub fn link(&self, index: usize) -> &'a Link {
        &self.links[index]
    }

    /// Portals touched by at least one link, in slot order.
    pub fn portals(&self) -> &[&'a Portal] {
        &self.portals
    }

    pub fn portal(&self, slot: usize) -> &'a Portal {
        self.portals[slot]
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    pub fn slot_of(&self, portal_id: usize) -> Option<usize> {
        self.slots.get(&portal_id).copied()
    }

    pub fn incident(&self, slot: usize) -> &[Incidence] {
        &self.adjacency[slot]
    }

    pub fn degree(&self, slot: usize) -> usize {
        self.adjacency[slot].len()
    }

    /// Index of the first link joining the two slots, if any.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.adjacency[a]
            .iter()
            .find(|incidence| incidence.neighbor == b)
            .map(|incidence| incidence.link)
    }
}
