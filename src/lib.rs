//! hopspread — time-bounded propagation over adjacency-list graphs.
//!
//! A [`SpreadGraph`] holds a fixed set of vertices with per-vertex neighbor
//! lists. The [`SpreadEngine`] runs breadth-first spreads over it: counting the
//! vertices reached from a source within a hop budget, and finding the vertex
//! whose unbounded spread reaches the most vertices.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, SpreadConfig};
pub use engine::{PropagationParams, PropagationResult, SpreadEngine, SpreadSource};
pub use format::{parse_text_input, read_text_input};
pub use graph::{bfs_within, Bfs, GraphBuilder, SpreadGraph};
pub use types::{
    Edge, EdgeMode, GraphError, GraphResult, DEFAULT_START_VERTEX, NO_SOURCE,
};
