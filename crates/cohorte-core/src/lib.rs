//! cohorte-core
//!
//! Pure domain types for the form engine: field templates, themes, custom
//! questions and response values, plus the REST path conventions of the
//! backend. No I/O here; this is the shared vocabulary of the other crates.

pub mod api_paths;
pub mod error;
pub mod models;
