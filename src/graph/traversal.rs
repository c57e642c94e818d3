//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use crate::types::GraphResult;

use super::SpreadGraph;

/// Lazy breadth-first traversal yielding `(vertex, distance)` pairs.
///
/// Distances never decrease along the sequence, and every vertex reachable
/// from the start is yielded exactly once with its hop distance. The iterator
/// is finite and cannot be restarted; call [`SpreadGraph::bfs`] again instead.
pub struct Bfs<'g> {
    graph: &'g SpreadGraph,
    visited: Vec<bool>,
    queue: VecDeque<(usize, u32)>,
}

impl<'g> Bfs<'g> {
    pub(crate) fn new(graph: &'g SpreadGraph, start: usize) -> GraphResult<Self> {
        graph.check_vertex(start)?;
        Ok(Self::from_vertex(graph, start))
    }

    /// `start` must already be a vertex of `graph`.
    pub(crate) fn from_vertex(graph: &'g SpreadGraph, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back((start, 0));

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Number of vertices discovered so far, including those still queued.
    pub fn discovered(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

impl Iterator for Bfs<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, distance) = self.queue.pop_front()?;

        for &neighbor in self.graph.adjacent(current) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.push_back((neighbor, distance + 1));
            }
        }

        Some((current, distance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.vertex_count() - self.discovered() + self.queue.len();
        (self.queue.len(), Some(remaining))
    }
}

/// BFS from `start`, stopping before any vertex farther than `max_depth` hops.
///
/// Returns the visited vertices in BFS order and the depth of each.
pub fn bfs_within(
    graph: &SpreadGraph,
    start: usize,
    max_depth: u32,
) -> GraphResult<(Vec<usize>, HashMap<usize, u32>)> {
    let mut visited_order = Vec::new();
    let mut depths = HashMap::new();

    for (vertex, depth) in graph.bfs(start)? {
        if depth > max_depth {
            break;
        }
        visited_order.push(vertex);
        depths.insert(vertex, depth);
    }

    Ok((visited_order, depths))
}
