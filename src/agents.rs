//! Splitting a finished plan across several agents.
//!
//! Links are cut into contiguous slices in plan order. A field stays with an
//! agent only if all three of its edges landed in that agent's slice; fields
//! straddling two slices are dropped, so agent scores can add up to less than
//! the plan's total.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::PlanError;
use crate::graph::LinkGraph;
use crate::haversine::Haversine;
use crate::model::{Field, Link, LinkKey, Portal};
use crate::path::build_path;
use crate::solver::{Solution, total_score};
use crate::traits::DistanceProvider;

/// One agent's share of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentPlan {
    pub links: Vec<Link>,
    pub fields: Vec<Field>,
    pub score: u64,
    pub path_length_m: f64,
    pub path: Vec<Portal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiAgentSolution {
    pub agent_plans: Vec<AgentPlan>,
    /// Score of the unsplit plan.
    pub total_score: u64,
}

impl fmt::Display for MultiAgentSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total score: {}", self.total_score)?;
        write!(f, "Agents: {}", self.agent_plans.len())?;
        for (i, plan) in self.agent_plans.iter().enumerate() {
            write!(f, "\n\nAgent {}:", i)?;
            write!(f, "\n  Score: {}", plan.score)?;
            write!(f, "\n  Walk distance: {:.2} km", plan.path_length_m / 1000.0)?;
            write!(f, "\n  Links: {}", plan.links.len())?;
        }
        Ok(())
    }
}

/// Largest agent count a plan can be split across.
pub const MAX_AGENTS: usize = 1024;

/// Rejects agent counts outside `1..=MAX_AGENTS`.
pub(crate) fn check_agent_count(agents: usize) -> Result<(), PlanError> {
    if agents == 0 || agents > MAX_AGENTS {
        return Err(PlanError::InvalidAgentCount { requested: agents });
    }
    Ok(())
}

/// Sizes of `agents` contiguous slices over `total` items.
///
/// Sizes differ by at most one; the earlier slices take the remainder.
/// Allocates one entry per agent.
pub fn slice_sizes(total: usize, agents: usize) -> Vec<usize> {
    if agents == 0 {
        return Vec::new();
    }
    let base = total / agents;
    let remainder = total % agents;
    (0..agents).map(|i| base + usize::from(i < remainder)).collect()
}

/// Splits `solution` across `agents` using great-circle distances for paths.
pub fn partition(solution: &Solution, agents: usize) -> Result<MultiAgentSolution, PlanError> {
    partition_with(solution, agents, &Haversine::default())
}

/// Splits `solution` across `agents`, measuring agent paths with `metric`.
#[instrument(level = "debug", skip(solution, metric), fields(links = solution.links.len()))]
pub fn partition_with<D: DistanceProvider>(
    solution: &Solution,
    agents: usize,
    metric: &D,
) -> Result<MultiAgentSolution, PlanError> {
    check_agent_count(agents)?;
    if solution.is_empty() {
        return Ok(MultiAgentSolution::default());
    }

    let mut agent_plans = Vec::with_capacity(agents);
    let mut rest = solution.links.as_slice();
    for size in slice_sizes(solution.links.len(), agents) {
        let (slice, tail) = rest.split_at(size);
        rest = tail;
        agent_plans.push(agent_plan(slice, &solution.fields, metric));
    }

    let kept: usize = agent_plans.iter().map(|plan| plan.fields.len()).sum();
    debug!(
        agents,
        fields_kept = kept,
        fields_dropped = solution.fields.len() - kept,
        "partitioned plan"
    );

    Ok(MultiAgentSolution {
        agent_plans,
        total_score: solution.total_score,
    })
}

fn agent_plan<D: DistanceProvider>(links: &[Link], fields: &[Field], metric: &D) -> AgentPlan {
    let owned: HashSet<LinkKey> = links.iter().map(Link::key).collect();
    let fields: Vec<Field> = fields
        .iter()
        .filter(|field| field.links().iter().all(|link| owned.contains(&link.key())))
        .cloned()
        .collect();

    let graph = LinkGraph::build(links);
    let walk = build_path(&graph, metric);

    AgentPlan {
        links: links.to_vec(),
        score: total_score(links, &fields),
        fields,
        path_length_m: walk.length_m,
        path: walk.portals,
    }
}
