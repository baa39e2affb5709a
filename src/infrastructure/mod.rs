// Infrastructure layer: adapters, file I/O, eventing
pub mod edge_list;
pub mod event_ndjson;
