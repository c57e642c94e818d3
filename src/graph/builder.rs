//! Fluent API for building SpreadGraph instances.

use crate::types::{Edge, EdgeMode, GraphResult};

use super::SpreadGraph;

/// Fluent builder for constructing a SpreadGraph.
///
/// Edges are collected unchecked and validated together in [`build`](Self::build).
pub struct GraphBuilder {
    vertex_count: usize,
    mode: EdgeMode,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new undirected builder over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            mode: EdgeMode::Undirected,
            edges: Vec::new(),
        }
    }

    /// Set the edge mode.
    pub fn mode(&mut self, mode: EdgeMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(EdgeMode::Directed)`.
    pub fn directed(&mut self) -> &mut Self {
        self.mode(EdgeMode::Directed)
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, a: usize, b: usize) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add several edges in order.
    pub fn links<I, E>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Build the final SpreadGraph, failing on the first out-of-range endpoint.
    pub fn build(&self) -> GraphResult<SpreadGraph> {
        let mut graph = SpreadGraph::with_mode(self.vertex_count, self.mode);
        for edge in &self.edges {
            graph.add_edge(edge.a, edge.b)?;
        }
        log::debug!(
            "built {} graph: {} vertices, {} edges",
            self.mode,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
