//! Read-only text renderings of the graph.
//!
//! The core never prints; display collaborators consume these strings.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::fmt::Write;

use crate::error::{GraphError, GraphResult};
use crate::graph::DirectedGraph;

//-----------------------------------------------------------------------------
// Rendering
//-----------------------------------------------------------------------------

impl<V> DirectedGraph<V> {
    /// Renders the graph in adjacency-list form, one line per vertex in
    /// ascending label order:
    ///
    /// ```text
    /// a: b, c
    /// b: d
    /// ```
    ///
    /// Fails with [`GraphError::EmptyGraph`] if there are no vertices.
    pub fn format_adjacency_list(&self) -> GraphResult<String> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let mut out = String::new();
        for (label, vertex) in self.vertices.iter() {
            let targets: Vec<&str> = vertex.adjacent.keys().collect();
            let _ = writeln!(out, "{}: {}", label, targets.join(", "));
        }
        Ok(out)
    }

    /// Renders the graph as an n x n 0/1 adjacency matrix ordered by
    /// ascending vertex label, with row and column label headers:
    ///
    /// ```text
    ///    a b c
    /// a: 0 1 1
    /// b: 0 0 0
    /// c: 0 0 0
    /// ```
    ///
    /// Fails with [`GraphError::EmptyGraph`] if there are no vertices.
    pub fn format_adjacency_matrix(&self) -> GraphResult<String> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let labels: Vec<&str> = self.vertices.keys().collect();
        let mut out = String::new();

        // Header row of column labels.
        out.push_str("   ");
        out.push_str(&labels.join(" "));
        out.push('\n');

        for (row_label, vertex) in self.vertices.iter() {
            let cells: Vec<&str> = labels
                .iter()
                .map(|col| if vertex.adjacent.has(col) { "1" } else { "0" })
                .collect();
            let _ = writeln!(out, "{}: {}", row_label, cells.join(" "));
        }
        Ok(out)
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------
