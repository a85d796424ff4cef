//! Handlers for the `/tasks` resource.
//!
//! Listing is strictly scoped to the requester -- admins get the owner
//! override only on single-task access, never on the list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use cartwheel_core::error::CoreError;
use cartwheel_core::types::DbId;
use cartwheel_db::models::task::{CreateTask, Task, UpdateTask, TASK_STATUSES};
use cartwheel_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::ensure_owner_or_admin;
use crate::query::TaskListParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /tasks`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 50, message = "Please add a title"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: String,
    pub status: Option<String>,
}

/// Request body for `PUT /tasks/{id}`. All fields optional, but a field
/// that is present must still satisfy the creation rules -- `Some("")`
/// is rejected, not written.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 50, message = "Please add a title"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Reject status values the schema would refuse anyway, with a 400 instead
/// of a constraint error.
fn validate_status(status: Option<&str>) -> Result<(), AppError> {
    match status {
        Some(s) if !TASK_STATUSES.contains(&s) => Err(AppError::Core(CoreError::Validation(
            format!("Status must be one of: {}", TASK_STATUSES.join(", ")),
        ))),
        _ => Ok(()),
    }
}

/// Load a task and apply the ownership rule, 404 before 403.
async fn find_authorized(
    state: &AppState,
    id: DbId,
    auth: &AuthUser,
) -> Result<Task, AppError> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    ensure_owner_or_admin(auth, task.user_id)?;
    Ok(task)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /tasks
///
/// Paginated, newest-first list of the requester's own tasks, optionally
/// filtered by exact status.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<DataResponse<Paginated<Task>>>> {
    validate_status(params.status.as_deref())?;
    let (page, limit, offset) = params.clamp();

    let status = params.status.as_deref();
    let items = TaskRepo::list_for_user(&state.pool, auth.user_id, status, limit, offset).await?;
    let total = TaskRepo::count_for_user(&state.pool, auth.user_id, status).await?;

    Ok(Json(DataResponse::new(Paginated::new(
        items, total, page, limit,
    ))))
}

/// GET /tasks/{id}
pub async fn get_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = find_authorized(&state, id, &auth).await?;
    Ok(Json(DataResponse::new(task)))
}

/// POST /tasks
///
/// Creates a task owned by the caller; any `user_id` in the payload is
/// ignored.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    input.validate()?;
    validate_status(input.status.as_deref())?;

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            user_id: auth.user_id,
            title: input.title,
            description: input.description,
            status: input.status,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(task))))
}

/// PUT /tasks/{id}
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskRequest>,
) -> AppResult<Json<DataResponse<Task>>> {
    input.validate()?;
    validate_status(input.status.as_deref())?;
    find_authorized(&state, id, &auth).await?;

    let updated = TaskRepo::update(
        &state.pool,
        id,
        &UpdateTask {
            title: input.title,
            description: input.description,
            status: input.status,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    find_authorized(&state, id, &auth).await?;
    TaskRepo::delete(&state.pool, id).await?;
    Ok(Json(DataResponse::new(serde_json::json!({}))))
}
