//! Usecase layer: traversal components, orchestration + progress events.

pub mod connectivity;
pub mod event;
pub mod paths;
pub mod report;
pub mod search;
pub mod traversal;
