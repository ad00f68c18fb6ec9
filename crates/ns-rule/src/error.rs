use thiserror::Error;

use ns_core::{AgentId, NodeId};
use ns_spatial::SpatialError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    #[error("rule configuration error: {0}")]
    Config(String),

    #[error("agent {agent} at {node} has a path but no admissible next hop")]
    Stranded { agent: AgentId, node: NodeId },

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type RuleResult<T> = Result<T, RuleError>;
