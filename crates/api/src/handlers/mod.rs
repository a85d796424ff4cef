//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod tasks;
