//! Credential primitives: password hashing and signed session tokens.

pub mod jwt;
pub mod password;
