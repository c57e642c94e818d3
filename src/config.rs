//! Input record for a propagation run, and loading it from JSON or TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::SpreadGraph;
use crate::types::{EdgeMode, GraphError, GraphResult, DEFAULT_START_VERTEX};

/// Everything a propagation run needs: the graph shape and the query.
///
/// Fields are signed so the record can hold exactly what a user supplied;
/// the accessors below validate them into the core's unsigned types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadConfig {
    /// Number of vertices.
    pub vertex_count: i64,
    /// Edge pairs, in insertion order.
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
    /// Hop budget for `propagate`.
    pub time_limit: i64,
    /// Vertex the spread starts from.
    #[serde(default = "default_start")]
    pub start: i64,
    /// Whether edges are inserted in one or both directions.
    #[serde(default)]
    pub mode: EdgeMode,
}

fn default_start() -> i64 {
    DEFAULT_START_VERTEX as i64
}

impl SpreadConfig {
    /// Create a record with no edges, starting from vertex 0.
    pub fn new(vertex_count: i64, time_limit: i64) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            time_limit,
            start: default_start(),
            mode: EdgeMode::default(),
        }
    }

    /// The vertex count as a `usize`.
    pub fn vertex_count(&self) -> GraphResult<usize> {
        usize::try_from(self.vertex_count)
            .map_err(|_| GraphError::NegativeVertexCount(self.vertex_count))
    }

    /// The time limit as a `u32`. Limits past `u32::MAX` saturate.
    pub fn time_limit(&self) -> GraphResult<u32> {
        if self.time_limit < 0 {
            return Err(GraphError::NegativeTimeLimit(self.time_limit));
        }
        Ok(u32::try_from(self.time_limit).unwrap_or(u32::MAX))
    }

    /// The start vertex, checked against the vertex count.
    pub fn start_vertex(&self) -> GraphResult<usize> {
        self.vertex_index(self.start)
    }

    /// Construct the graph, inserting every edge in order.
    pub fn build_graph(&self) -> GraphResult<SpreadGraph> {
        let vertex_count = self.vertex_count()?;

        // Validate everything first so a bad edge never yields a partial graph.
        let edges = self
            .edges
            .iter()
            .map(|&(a, b)| Ok((self.vertex_index(a)?, self.vertex_index(b)?)))
            .collect::<GraphResult<Vec<_>>>()?;

        let mut graph = SpreadGraph::with_mode(vertex_count, self.mode);
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    fn vertex_index(&self, raw: i64) -> GraphResult<usize> {
        let vertex_count = self.vertex_count()?;
        usize::try_from(raw)
            .ok()
            .filter(|&v| v < vertex_count)
            .ok_or(GraphError::InvalidVertex {
                vertex: raw,
                vertex_count,
            })
    }
}

/// Load a config record. `.json` files are read as JSON, everything else as TOML.
pub fn load_config(path: &Path) -> GraphResult<SpreadConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            GraphError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?
    } else {
        toml::from_str(&content).map_err(|e| {
            GraphError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?
    };

    log::info!("loaded config from {}", path.display());
    Ok(config)
}
