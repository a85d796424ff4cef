//! Task entity model and DTOs.

use cartwheel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Valid values for the `tasks.status` column.
pub const TASK_STATUSES: [&str; 3] = ["pending", "in-progress", "completed"];

/// Full task row from the `tasks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. `user_id` is always forced to the
/// authenticated caller by the handler.
#[derive(Debug)]
pub struct CreateTask {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub status: Option<String>,
}

/// DTO for partial task updates. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
