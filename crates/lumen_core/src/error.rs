//! Errors raised while building a scene graph.
//!
//! Numeric trouble (zero-length directions, degenerate Point-Toward input)
//! is never reported here; it propagates as non-finite values instead.

use thiserror::Error;

use crate::NodeId;

/// Errors that can occur while assembling or querying a [`Scene`](crate::Scene).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Unknown scene node: {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not a composite and cannot hold children")]
    NotComposite(NodeId),

    #[error("Node {0} is not a primitive")]
    NotPrimitive(NodeId),

    #[error("Node {child} already belongs to {parent}")]
    AlreadyParented { child: NodeId, parent: NodeId },

    #[error("Adding {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
