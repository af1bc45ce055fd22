//! Error types for graph operations.

//-----------------------------------------------------------------------------
// Error Types
//-----------------------------------------------------------------------------

use thiserror::Error;

/// Errors related to directed graph operations.
///
/// A failed operation leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Error when attempting to create a vertex with a label that already
    /// exists.
    #[error("vertex with label '{0}' already exists in graph")]
    DuplicateVertex(String),

    /// Error when a vertex with the requested label is not found.
    #[error("vertex with label '{0}' not in graph")]
    VertexNotFound(String),

    /// Error when attempting to create an edge that already exists.
    #[error("edge {from} -> {to} already exists in graph")]
    DuplicateEdge { from: String, to: String },

    /// Error when the requested edge is not found.
    #[error("edge {from} -> {to} does not exist")]
    EdgeNotFound { from: String, to: String },

    /// Traversal or rendering requested on a graph with no vertices.
    #[error("graph is empty")]
    EmptyGraph,
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
