//! Route definitions for the `/auth` resource.
//!
//! ```text
//! POST /register   -> register (public)
//! POST /login      -> login (public)
//! GET  /me         -> me (requires auth)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}
