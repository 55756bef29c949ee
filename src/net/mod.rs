//! HTTP plumbing and the REST surface of the MystigTravel backend.

pub mod api;
pub mod http;
pub mod types;
