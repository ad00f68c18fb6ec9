//! Spatial-subsystem error type.

use thiserror::Error;

use ns_core::{LayerId, NodeId};

/// Errors produced by `ns-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no path from {from} to {to} in {layer}")]
    NoPath { from: NodeId, to: NodeId, layer: LayerId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("{layer} out of range (space has {count} layers)")]
    LayerOutOfRange { layer: LayerId, count: usize },

    #[error("{layer} has {got} nodes, expected {expected}")]
    LayerMismatch { layer: LayerId, expected: usize, got: usize },

    #[error("{layer} labels {node} differently from layer 0")]
    LabelMismatch { layer: LayerId, node: NodeId },

    #[error("a multilayer space needs at least one layer")]
    EmptyLayers,

    #[error("{0} layers exceed the LayerId range")]
    TooManyLayers(usize),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
