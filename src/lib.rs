//! field-planner core
//!
//! Picks a non-crossing set of links between portals, derives the triangular
//! fields they close, orders them into a walk, and splits finished plans
//! across agents.

pub mod traits;
pub mod haversine;
pub mod geometry;
pub mod model;
pub mod scoring;
pub mod graph;
pub mod candidates;
pub mod solver;
pub mod fields;
pub mod path;
pub mod agents;
pub mod planner;
pub mod portal_list;
pub mod error;

pub use agents::{AgentPlan, MAX_AGENTS, MultiAgentSolution, partition, partition_with};
pub use error::{PlanError, PortalLineError};
pub use haversine::Haversine;
pub use model::{Field, Link, LinkKey, Portal, PortalInput};
pub use planner::Planner;
pub use solver::{PlanOptions, Solution, plan, plan_with};
pub use traits::DistanceProvider;
