//! Outbound API plumbing: the authorized request client and the wire
//! types it exchanges with the backend.

pub mod api;
pub mod types;
