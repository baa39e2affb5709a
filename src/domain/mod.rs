//! Domain layer: pure, synchronous graph types.

pub mod error;
pub mod graph;
pub mod traits;
