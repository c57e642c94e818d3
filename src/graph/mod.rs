//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod spread_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use spread_graph::SpreadGraph;
pub use traversal::{bfs_within, Bfs};
