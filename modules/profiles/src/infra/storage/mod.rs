pub mod entity;
pub mod json_store;
pub mod mapper;
