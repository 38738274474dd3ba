//! Greedy link selection and plan assembly.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::candidates::candidate_links;
use crate::fields::{MAX_PORTALS_IN_FIELD, derive_fields};
use crate::graph::LinkGraph;
use crate::haversine::Haversine;
use crate::model::{Field, Link, Portal};
use crate::path::build_path;
use crate::scoring::score_density;
use crate::traits::DistanceProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Fields covering more than this many other linked portals are dropped.
    pub max_portals_in_field: usize,
    /// Accepted-set size from which crossing checks run on the rayon pool.
    pub parallel_crossing_threshold: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            max_portals_in_field: MAX_PORTALS_IN_FIELD,
            parallel_crossing_threshold: 256,
        }
    }
}

/// Result of one planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// Accepted links, in acceptance order.
    pub links: Vec<Link>,
    pub fields: Vec<Field>,
    pub total_score: u64,
    /// Walking distance along `path`, in meters.
    pub path_length_m: f64,
    pub path: Vec<Portal>,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total score: {}", self.total_score)?;
        writeln!(f, "Links: {}", self.links.len())?;
        writeln!(f, "Fields: {}", self.fields.len())?;
        writeln!(f, "Walk distance: {:.2} km", self.path_length_m / 1000.0)?;
        writeln!(f)?;
        write!(f, "Link plan:")?;
        for (i, link) in self.links.iter().enumerate() {
            let (a, b) = (link.start(), link.end());
            write!(f, "\n{}: ({}, {})->({}, {})", i, a.lat(), a.lon(), b.lat(), b.lon())?;
        }
        Ok(())
    }
}

/// Sum of link and field scores.
pub fn total_score(links: &[Link], fields: &[Field]) -> u64 {
    let link_score: u64 = links.iter().map(|link| u64::from(link.score())).sum();
    let field_score: u64 = fields.iter().map(|field| u64::from(field.score())).sum();
    link_score + field_score
}

/// A candidate with its position in the generated list, which breaks ties
/// between equal densities.
#[derive(Debug)]
struct RankedCandidate {
    seq: usize,
    density: f64,
    link: Link,
}

/// Accepts candidates in descending score-per-meter order, skipping any that
/// cross an already accepted link.
///
/// Acceptance is sequential; only the per-candidate crossing test is
/// parallelized, so the result is the same whatever the threshold.
pub fn select_links(candidates: Vec<Link>, options: &PlanOptions) -> Vec<Link> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .enumerate()
        .map(|(seq, link)| RankedCandidate {
            seq,
            density: score_density(link.score(), link.distance_m()),
            link,
        })
        .collect();
    ranked.sort_by(|a, b| b.density.total_cmp(&a.density).then(a.seq.cmp(&b.seq)));

    let considered = ranked.len();
    let mut accepted: Vec<Link> = Vec::new();
    for candidate in ranked {
        if !crosses_any(&candidate.link, &accepted, options.parallel_crossing_threshold) {
            accepted.push(candidate.link);
        }
    }

    debug!(
        considered,
        accepted = accepted.len(),
        rejected = considered - accepted.len(),
        "selected links"
    );

    accepted
}

fn crosses_any(candidate: &Link, accepted: &[Link], parallel_threshold: usize) -> bool {
    if accepted.len() >= parallel_threshold {
        accepted.par_iter().any(|existing| candidate.crosses(existing))
    } else {
        accepted.iter().any(|existing| candidate.crosses(existing))
    }
}

/// Plans `portals` with great-circle distances.
pub fn plan(portals: &[Portal], options: &PlanOptions) -> Solution {
    plan_with(portals, &Haversine::default(), options)
}

/// Plans `portals`, measuring distances with `metric`.
///
/// Fewer than three portals, or a set with no triangles, yields an empty
/// solution.
#[instrument(level = "debug", skip_all, fields(portals = portals.len()))]
pub fn plan_with<D: DistanceProvider>(
    portals: &[Portal],
    metric: &D,
    options: &PlanOptions,
) -> Solution {
    let candidates = candidate_links(portals, metric);
    if candidates.is_empty() {
        debug!("no candidate links; returning an empty plan");
        return Solution::empty();
    }

    let links = select_links(candidates, options);
    let graph = LinkGraph::build(&links);
    let fields = derive_fields(&graph, options.max_portals_in_field);
    let walk = build_path(&graph, metric);
    let total_score = total_score(&links, &fields);

    info!(
        links = links.len(),
        fields = fields.len(),
        total_score,
        path_km = walk.length_m / 1000.0,
        "plan complete"
    );

    Solution {
        links,
        fields,
        total_score,
        path_length_m: walk.length_m,
        path: walk.portals,
    }
}
