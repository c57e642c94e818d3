//! Propagation queries — time-bounded spread and max-spread source search.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{bfs_within, Bfs, SpreadGraph};
use crate::types::GraphResult;

/// Parameters for a detailed propagation query.
pub struct PropagationParams {
    /// Vertex the spread starts from.
    pub start: usize,
    /// Maximum number of hops (inclusive).
    pub time_limit: u32,
}

/// Result of a detailed propagation query.
#[derive(Debug, Clone, Serialize)]
pub struct PropagationResult {
    /// Vertex the spread started from.
    pub start: usize,
    /// Hop budget used.
    pub time_limit: u32,
    /// Reached vertices in BFS order.
    pub reached: Vec<usize>,
    /// Hop distance at which each vertex was reached.
    pub depths: HashMap<usize, u32>,
    /// Number of reached vertices.
    pub count: usize,
}

/// A max-spread source together with the size of its reachable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadSource {
    pub vertex: usize,
    pub reach: usize,
}

/// Executes propagation queries against a SpreadGraph.
pub struct SpreadEngine;

impl SpreadEngine {
    /// Create a new spread engine.
    pub fn new() -> Self {
        Self
    }

    /// Number of vertices within `time_limit` hops of `start`, `start` included.
    pub fn propagate(
        &self,
        graph: &SpreadGraph,
        start: usize,
        time_limit: u32,
    ) -> GraphResult<usize> {
        // Distances arrive in non-decreasing order, so the first entry past
        // the limit ends the count.
        let count = graph
            .bfs(start)?
            .take_while(|&(_, elapsed)| elapsed <= time_limit)
            .count();

        log::debug!(
            "propagate(start={}, t={}) reached {} of {} vertices",
            start,
            time_limit,
            count,
            graph.vertex_count()
        );
        Ok(count)
    }

    /// Same traversal as [`propagate`](Self::propagate), keeping the reached set.
    pub fn propagate_detailed(
        &self,
        graph: &SpreadGraph,
        params: PropagationParams,
    ) -> GraphResult<PropagationResult> {
        let (reached, depths) = bfs_within(graph, params.start, params.time_limit)?;
        let count = reached.len();

        Ok(PropagationResult {
            start: params.start,
            time_limit: params.time_limit,
            reached,
            depths,
            count,
        })
    }

    /// Cumulative reach after each time step: entry `k` equals `propagate(start, k)`.
    ///
    /// No hop distance can reach `vertex_count`, so the sequence is cut at
    /// `min(time_limit, vertex_count - 1)`; later steps would repeat the last entry.
    pub fn timeline(
        &self,
        graph: &SpreadGraph,
        start: usize,
        time_limit: u32,
    ) -> GraphResult<Vec<usize>> {
        let bfs = graph.bfs(start)?;
        let steps = (time_limit as usize).min(graph.vertex_count() - 1) + 1;
        let mut per_step = vec![0usize; steps];

        for (_, elapsed) in bfs {
            if elapsed > time_limit {
                break;
            }
            per_step[elapsed as usize] += 1;
        }

        let mut total = 0;
        for slot in per_step.iter_mut() {
            total += *slot;
            *slot = total;
        }
        Ok(per_step)
    }

    /// Size of the unbounded reachable set of every vertex, in index order.
    pub fn reach_counts(&self, graph: &SpreadGraph) -> Vec<usize> {
        (0..graph.vertex_count())
            .map(|v| Bfs::from_vertex(graph, v).count())
            .collect()
    }

    /// The vertex with the strictly largest reachable set; ties keep the lowest index.
    ///
    /// Returns `None` for a graph without vertices.
    pub fn find_max_spread_source(&self, graph: &SpreadGraph) -> Option<usize> {
        self.max_spread(graph).map(|s| s.vertex)
    }

    /// Like [`find_max_spread_source`](Self::find_max_spread_source), also reporting the reach.
    pub fn max_spread(&self, graph: &SpreadGraph) -> Option<SpreadSource> {
        let mut best: Option<SpreadSource> = None;

        for (vertex, reach) in self.reach_counts(graph).into_iter().enumerate() {
            match best {
                Some(current) if reach <= current.reach => {}
                _ => best = Some(SpreadSource { vertex, reach }),
            }
        }

        if let Some(source) = best {
            log::debug!(
                "max spread source: vertex {} reaches {}",
                source.vertex,
                source.reach
            );
        }
        best
    }
}

impl Default for SpreadEngine {
    fn default() -> Self {
        Self::new()
    }
}
