//! Route definitions for the `/tasks` resource.
//!
//! ```text
//! GET    /        -> list_tasks (owner-scoped, paginated)
//! POST   /        -> create_task
//! GET    /{id}    -> get_task (owner or admin)
//! PUT    /{id}    -> update_task (owner or admin)
//! DELETE /{id}    -> delete_task (owner or admin)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
}
