//! Directed graph over ordered vertex storage.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::collections::{HashSet, VecDeque};

use cascade_collections::OrderedMap;

use crate::error::{GraphError, GraphResult};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// A labeled vertex: payload plus the ordered set of outgoing-edge targets.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<V> {
    pub(crate) value: V,
    /// Keys are the labels of directly reachable vertices.
    pub(crate) adjacent: OrderedMap<()>,
}

impl<V> Vertex<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            adjacent: OrderedMap::new(),
        }
    }
}

/// A set of labeled vertices joined by directional edges.
///
/// An edge `A -> B` exists iff `B`'s label is a key in `A`'s adjacency set,
/// and both endpoints must be vertices of the graph. `A -> B` existing
/// implies nothing about `B -> A`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    pub(crate) vertices: OrderedMap<Vertex<V>>,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

//-----------------------------------------------------------------------------
// Vertex and Edge Mutation
//-----------------------------------------------------------------------------

impl<V> DirectedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: OrderedMap::new(),
        }
    }

    /// Adds a vertex with the given label and payload. Fails with
    /// [`GraphError::DuplicateVertex`] if the label is taken.
    pub fn add_vertex(&mut self, label: impl Into<String>, value: V) -> GraphResult<()> {
        let label = label.into();
        self.vertices
            .insert(label.clone(), Vertex::new(value))
            .map_err(|_| GraphError::DuplicateVertex(label))
    }

    /// Removes the vertex with the given label and returns its payload,
    /// purging the label from every remaining vertex's adjacency set.
    /// Fails with [`GraphError::VertexNotFound`] if absent.
    pub fn remove_vertex(&mut self, label: &str) -> GraphResult<V> {
        let vertex = self
            .vertices
            .delete(label)
            .map_err(|_| GraphError::VertexNotFound(label.to_owned()))?;
        for other in self.vertices.values_mut() {
            // Most vertices will not hold an edge to the removed label.
            let _ = other.adjacent.delete(label);
        }
        Ok(vertex.value)
    }

    /// Adds the directional edge `from -> to`. Fails with
    /// [`GraphError::VertexNotFound`] if either endpoint is absent and
    /// [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        if !self.vertices.has(to) {
            return Err(GraphError::VertexNotFound(to.to_owned()));
        }
        let vertex = self
            .vertices
            .find_mut(from)
            .map_err(|_| GraphError::VertexNotFound(from.to_owned()))?;
        vertex
            .adjacent
            .insert(to, ())
            .map_err(|_| GraphError::DuplicateEdge {
                from: from.to_owned(),
                to: to.to_owned(),
            })
    }

    /// Removes the directional edge `from -> to`. Fails with
    /// [`GraphError::VertexNotFound`] or [`GraphError::EdgeNotFound`] as
    /// appropriate.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        if !self.vertices.has(to) {
            return Err(GraphError::VertexNotFound(to.to_owned()));
        }
        let vertex = self
            .vertices
            .find_mut(from)
            .map_err(|_| GraphError::VertexNotFound(from.to_owned()))?;
        vertex
            .adjacent
            .delete(to)
            .map(|_| ())
            .map_err(|_| GraphError::EdgeNotFound {
                from: from.to_owned(),
                to: to.to_owned(),
            })
    }
}

//-----------------------------------------------------------------------------
// Membership and Access
//-----------------------------------------------------------------------------

impl<V> DirectedGraph<V> {
    /// Returns whether a vertex with the given label exists.
    pub fn has_vertex(&self, label: &str) -> bool {
        self.vertices.has(label)
    }

    /// Returns whether the edge `from -> to` exists. Fails with
    /// [`GraphError::VertexNotFound`] if either endpoint is absent.
    pub fn has_edge(&self, from: &str, to: &str) -> GraphResult<bool> {
        if !self.vertices.has(to) {
            return Err(GraphError::VertexNotFound(to.to_owned()));
        }
        let vertex = self
            .vertices
            .find(from)
            .map_err(|_| GraphError::VertexNotFound(from.to_owned()))?;
        Ok(vertex.adjacent.has(to))
    }

    /// Returns whether the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directional edges in the graph (the sum of all adjacency
    /// set sizes, not undirected pairs).
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.adjacent.len()).sum()
    }

    /// Borrows the payload of the vertex with the given label.
    pub fn value(&self, label: &str) -> GraphResult<&V> {
        self.vertices
            .find(label)
            .map(|v| &v.value)
            .map_err(|_| GraphError::VertexNotFound(label.to_owned()))
    }

    /// Mutably borrows the payload of the vertex with the given label.
    pub fn value_mut(&mut self, label: &str) -> GraphResult<&mut V> {
        self.vertices
            .find_mut(label)
            .map(|v| &mut v.value)
            .map_err(|_| GraphError::VertexNotFound(label.to_owned()))
    }

    /// Vertex labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys()
    }

    /// Labels adjacent to the given vertex, in ascending order.
    pub fn adjacent(&self, label: &str) -> GraphResult<Vec<&str>> {
        let vertex = self
            .vertices
            .find(label)
            .map_err(|_| GraphError::VertexNotFound(label.to_owned()))?;
        Ok(vertex.adjacent.keys().collect())
    }
}

//-----------------------------------------------------------------------------
// Traversal
//-----------------------------------------------------------------------------

impl<V> DirectedGraph<V> {
    fn start_label(&self) -> GraphResult<&str> {
        self.vertices
            .min()
            .map(|(label, _)| label)
            .map_err(|_| GraphError::EmptyGraph)
    }

    fn adjacency_of(&self, label: &str) -> GraphResult<&OrderedMap<()>> {
        self.vertices
            .find(label)
            .map(|v| &v.adjacent)
            .map_err(|_| GraphError::VertexNotFound(label.to_owned()))
    }

    /// Depth-first traversal starting at the minimum label, exploring
    /// neighbors in ascending-label order with an explicit stack. A vertex's
    /// label is recorded the moment it is visited, before its children are
    /// explored. Returns the labels in visitation order, or
    /// [`GraphError::EmptyGraph`] if there are no vertices.
    pub fn depth_first_search(&self) -> GraphResult<Vec<String>> {
        let start = self.start_label()?;
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::with_capacity(self.vertex_count());
        let mut stack: Vec<&str> = vec![start];
        visited.insert(start);
        order.push(start.to_owned());

        while let Some(&top) = stack.last() {
            // First unvisited neighbor of the top of the stack, if any.
            let next = self
                .adjacency_of(top)?
                .keys()
                .find(|label| !visited.contains(*label));
            match next {
                Some(label) => {
                    visited.insert(label);
                    order.push(label.to_owned());
                    stack.push(label);
                }
                None => {
                    stack.pop();
                }
            }
        }
        Ok(order)
    }

    /// Breadth-first traversal starting at the minimum label, enqueueing
    /// each front vertex's unvisited neighbors in ascending-label order.
    /// Returns the labels in visitation order, or [`GraphError::EmptyGraph`]
    /// if there are no vertices.
    pub fn breadth_first_search(&self) -> GraphResult<Vec<String>> {
        let start = self.start_label()?;
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::with_capacity(self.vertex_count());
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(front) = queue.pop_front() {
            for (label, _) in self.adjacency_of(front)?.iter() {
                if visited.insert(label) {
                    queue.push_back(label);
                }
            }
            order.push(front.to_owned());
        }
        Ok(order)
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------
