//! Profile store: the authoritative collection of public card profiles,
//! persisted in a single JSON file and exposed over HTTP.

pub mod api;
pub mod contract;
pub mod domain;
pub mod gateways;
pub mod infra;
