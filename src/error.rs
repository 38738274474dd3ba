//! Error types for the field planner.
//!
//! Planning itself degrades silently on thin or degenerate input; the only
//! hard failure is a request the partitioner cannot honor. Parsing errors
//! describe why one text line was rejected.

use thiserror::Error;

use crate::agents::MAX_AGENTS;

/// Errors raised by planning entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid agent count {requested}: expected 1 to {max} agents", max = MAX_AGENTS)]
    InvalidAgentCount { requested: usize },
}

/// Why a single line of a portal list was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalLineError {
    #[error("Expected `lat,lon` or `name,lat,lon`, found {found} field(s)")]
    WrongFieldCount { found: usize },

    #[error("Invalid {axis} value: {value:?}")]
    NotANumber { axis: &'static str, value: String },

    #[error("Non-finite {axis} value: {value}")]
    NonFinite { axis: &'static str, value: f64 },
}

impl PortalLineError {
    pub(crate) fn not_a_number(axis: &'static str, value: &str) -> Self {
        Self::NotANumber {
            axis,
            value: value.to_string(),
        }
    }
}
