//! Planning session owning a portal list.

use crate::agents::{MultiAgentSolution, check_agent_count, partition_with};
use crate::error::PlanError;
use crate::haversine::Haversine;
use crate::model::{Portal, PortalInput, portals_from_inputs};
use crate::solver::{PlanOptions, Solution, plan_with};
use crate::traits::DistanceProvider;

/// Holds the portals of one planning session.
///
/// Portal ids are positions in the session's list.
#[derive(Debug, Clone)]
pub struct Planner<D: DistanceProvider = Haversine> {
    portals: Vec<Portal>,
    options: PlanOptions,
    metric: D,
}

impl Default for Planner<Haversine> {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner<Haversine> {
    pub fn new() -> Self {
        Self::with_metric(Haversine::default())
    }

    /// Session over unnamed `(lat, lon)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let mut planner = Self::new();
        planner.load_portals(coords.iter().map(|&(lat, lon)| PortalInput::new(lat, lon)));
        planner
    }
}

impl<D: DistanceProvider> Planner<D> {
    pub fn with_metric(metric: D) -> Self {
        Self {
            portals: Vec::new(),
            options: PlanOptions::default(),
            metric,
        }
    }

    pub fn with_options(mut self, options: PlanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    /// Appends a portal; its id is its position.
    pub fn add_portal(&mut self, lat: f64, lon: f64, name: Option<String>) -> &Portal {
        let id = self.portals.len();
        self.portals.push(Portal::new(id, lat, lon, name));
        &self.portals[id]
    }

    /// Replaces the session's portals.
    pub fn load_portals<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = PortalInput>,
    {
        self.portals = portals_from_inputs(inputs);
    }

    pub fn plan(&self) -> Solution {
        plan_with(&self.portals, &self.metric, &self.options)
    }

    /// Plans once, then splits the result across `agents`.
    ///
    /// The agent count is checked before any planning work.
    pub fn multi_agent_plan(&self, agents: usize) -> Result<MultiAgentSolution, PlanError> {
        check_agent_count(agents)?;
        partition_with(&self.plan(), agents, &self.metric)
    }
}
