//! High-level operations — the propagation engine.

pub mod spread;

pub use spread::{PropagationParams, PropagationResult, SpreadEngine, SpreadSource};
