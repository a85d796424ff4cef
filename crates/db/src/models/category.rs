//! Category entity model and DTOs.

use cartwheel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full category row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}
