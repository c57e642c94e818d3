//! Core graph structure — a fixed vertex set with per-vertex adjacency lists.

use std::fmt;

use crate::types::{EdgeMode, GraphError, GraphResult};

use super::traversal::Bfs;

/// An adjacency-list graph over vertices `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadGraph {
    /// Neighbor lists, indexed by vertex, in insertion order.
    adjacency: Vec<Vec<usize>>,
    /// Whether edges are recorded in one or both directions.
    mode: EdgeMode,
    /// Number of successful `add_edge` calls.
    edge_count: usize,
}

impl SpreadGraph {
    /// Create an undirected graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_mode(vertex_count, EdgeMode::Undirected)
    }

    /// Create a graph with an explicit edge mode.
    pub fn with_mode(vertex_count: usize, mode: EdgeMode) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            mode,
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges inserted so far (duplicates included).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The edge mode fixed at construction.
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode == EdgeMode::Directed
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    /// Fail with `InvalidVertex` unless `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::invalid_vertex(v, self.vertex_count()))
        }
    }

    /// Insert an edge. Both endpoints are validated before anything is written.
    pub fn add_edge(&mut self, i: usize, j: usize) -> GraphResult<()> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        self.adjacency[i].push(j);
        if self.mode == EdgeMode::Undirected {
            self.adjacency[j].push(i);
        }
        self.edge_count += 1;

        log::trace!("add_edge({}, {}) [{}]", i, j, self.mode);
        Ok(())
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> GraphResult<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Length of `v`'s neighbor list, counting duplicates and self-loops.
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        self.neighbors(v).map(<[usize]>::len)
    }

    /// One `(vertex, neighbors)` pair per vertex, in index order.
    pub fn render(&self) -> Vec<(usize, &[usize])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(v, list)| (v, list.as_slice()))
            .collect()
    }

    /// Start a lazy breadth-first traversal from `start`.
    pub fn bfs(&self, start: usize) -> GraphResult<Bfs<'_>> {
        Bfs::new(self, start)
    }

    /// Unchecked neighbor access for traversal code that already validated `v`.
    pub(crate) fn adjacent(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }
}

impl fmt::Display for SpreadGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.render() {
            write!(f, "{}:", v)?;
            for n in list {
                write!(f, " {}", n)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
