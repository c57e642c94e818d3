//! Plain-text input — vertex count, edge count and time limit, then the edge pairs.

pub mod text;

pub use text::{parse_text_input, read_text_input};
