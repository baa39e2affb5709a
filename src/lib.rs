//! Depth-first reachability and path reconstruction over undirected graphs.
//!
//! Layers:
//! - domain: graph storage, the collaborator trait, vertex validation
//! - usecase: traversal components + progress events
//! - infrastructure: edge-list reader, NDJSON event printer
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
