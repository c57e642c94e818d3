//! All data types for the hopspread library.

pub mod edge;
pub mod error;

pub use edge::{Edge, EdgeMode};
pub use error::{GraphError, GraphResult};

/// Start vertex used when an input record does not name one.
pub const DEFAULT_START_VERTEX: usize = 0;

/// Value reported in place of a source vertex for an empty graph.
pub const NO_SOURCE: i64 = -1;
