//! Workspace base error type.
//!
//! Sub-crates define their own error enums and convert `NsError` into them
//! via `From` impls where a core error can surface.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// The top-level error type for `ns-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NsError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}

/// Shorthand result type for `ns-core`.
pub type NsResult<T> = Result<T, NsError>;
