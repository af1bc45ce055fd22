//! Cascade Graph
//!
//! Directed graph of labeled vertices, each carrying an opaque payload and
//! its own ordered adjacency set. All storage delegates to
//! [`cascade_collections::OrderedMap`], so vertex and neighbor enumeration
//! is always in ascending label order and traversal start points are
//! deterministic (the minimum label).
//!
//! The graph performs no I/O and never prints; the adjacency-list and matrix
//! views are returned as rendered strings for display collaborators.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

pub mod error;
pub mod graph;
pub mod render;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use error::{GraphError, GraphResult};
pub use graph::DirectedGraph;
