//! Shared domain types for the cartwheel backend.
//!
//! Holds the error taxonomy, database id/timestamp aliases, and role
//! constants used by both the repository layer and the API server.

pub mod error;
pub mod roles;
pub mod types;
