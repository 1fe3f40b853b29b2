//! cohorte-api
//!
//! Backend side of the form engine: the custom-question REST endpoints, the
//! client configuration, and the store that keeps the merged theme catalog
//! in step with the server.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod store;
