pub mod auth;
pub mod ecommerce;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   health check (public)
///
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/me                            current user (requires auth)
///
/// /tasks                              list, create (owner-scoped)
/// /tasks/{id}                         get, update, delete (owner or admin)
///
/// /ecommerce/categories               list (public), create (admin)
/// /ecommerce/products                 list (public), create (admin)
/// /ecommerce/products/{id}            get (public), update/delete (admin)
/// /ecommerce/cart                     get, add item (requires auth)
/// /ecommerce/orders                   place order (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/tasks", tasks::router())
        .nest("/ecommerce", ecommerce::router())
}
