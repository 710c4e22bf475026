//! Errors raised by graph operations

use thiserror::Error;

/// The graph operation that rejected a missing node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    InsertEdge,
    IsConnected,
    IsConnectedWeight,
    GetConnected,
    GetWeights,
    Replace,
    MergeReplace,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InsertEdge => "insert_edge",
            Self::IsConnected => "is_connected",
            Self::IsConnectedWeight => "is_connected_weight",
            Self::GetConnected => "get_connected",
            Self::GetWeights => "get_weights",
            Self::Replace => "replace",
            Self::MergeReplace => "merge_replace",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in graph operations
///
/// A missing node is a caller bug, not a recoverable condition. Operations
/// that return this error have not modified the graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError<N> {
    #[error("{op}: node not found: {node:?}")]
    NodeNotFound { op: Operation, node: N },
}

impl<N> GraphError<N> {
    pub(crate) fn node_not_found(op: Operation, node: N) -> Self {
        Self::NodeNotFound { op, node }
    }

    /// The operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            Self::NodeNotFound { op, .. } => *op,
        }
    }

    /// The node value that was missing
    pub fn node(&self) -> &N {
        match self {
            Self::NodeNotFound { node, .. } => node,
        }
    }
}

/// Result type for graph operations
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
