//! Consumer-side companion to the Taply profile store: an HTTP client that
//! never raises, a local file-backed card cache, and the resolution service
//! that decides which of the two answers a given read.

pub mod api;
pub mod cache;
pub mod card_url;
pub mod config;
pub mod resolver;

pub use api::ProfileClient;
pub use cache::CardCache;
pub use card_url::{card_url, parse_scan, ScanTarget};
pub use config::{resolve_base_url, ClientConfig};
pub use resolver::{ProfileResolver, ResolveError};
