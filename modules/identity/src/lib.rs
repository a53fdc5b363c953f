//! Identity session: registration and login against a locally persisted
//! user list. Stands in for a real identity backend; passwords are stored
//! as salted argon2 hashes, never in the clear.

pub mod error;
pub mod model;
pub mod password;
pub mod service;
pub mod store;
