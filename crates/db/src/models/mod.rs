//! Entity models and DTOs.
//!
//! Each module pairs a `FromRow` row struct with Create/Update input types
//! and, where the row carries secrets or joins, a response-shaped struct.

pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod task;
pub mod user;
