//! Handler for order placement.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use cartwheel_db::models::order::OrderWithItems;
use cartwheel_db::repositories::OrderRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /ecommerce/orders
///
/// Converts the caller's cart into an order in a single transaction: stock
/// is validated and decremented, price snapshots are taken, and the cart is
/// emptied -- or nothing happens at all. Workflow failures (empty cart,
/// insufficient stock) come back as 400s via [`crate::error::AppError`].
pub async fn place_order(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<OrderWithItems>>)> {
    let order = OrderRepo::place_order(&state.pool, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        order_id = order.order.id,
        total = %order.order.total_amount,
        "order placed"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}
