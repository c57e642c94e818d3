//! Edge mode and the plain edge pair.

use serde::{Deserialize, Serialize};

/// How `add_edge` records a pair of vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Each edge is inserted in both directions.
    #[default]
    Undirected,
    /// Each edge is inserted from `a` to `b` only.
    Directed,
}

impl EdgeMode {
    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }

    /// Parse a mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "undirected" | "u" => Some(Self::Undirected),
            "directed" | "d" => Some(Self::Directed),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A pair of vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint (the source in directed mode).
    pub a: usize,
    /// Second endpoint (the target in directed mode).
    pub b: usize,
}

impl Edge {
    /// Create a new edge.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// True if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
