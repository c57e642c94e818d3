//! Error types for the hopspread library.

use thiserror::Error;

/// All errors that can occur while building or traversing a spread graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: i64, vertex_count: usize },

    /// Negative vertex count in an input record.
    #[error("Vertex count must be non-negative, got {0}")]
    NegativeVertexCount(i64),

    /// Negative time limit in an input record.
    #[error("Time limit must be non-negative, got {0}")]
    NegativeTimeLimit(i64),

    /// Malformed plain-text input.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed JSON or TOML configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build an `InvalidVertex` error from an in-memory index.
    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        Self::InvalidVertex {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Convenience result type for hopspread operations.
pub type GraphResult<T> = Result<T, GraphError>;
