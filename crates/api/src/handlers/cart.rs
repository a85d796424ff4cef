//! Handlers for the per-user cart.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use cartwheel_core::error::CoreError;
use cartwheel_core::types::DbId;
use cartwheel_db::models::cart::CartWithItems;
use cartwheel_db::repositories::{CartRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /ecommerce/cart`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartItemRequest {
    pub product_id: DbId,
    /// Defaults to 1 when absent.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,
}

/// GET /ecommerce/cart
///
/// Returns the caller's cart with item and product details, creating an
/// empty cart on first access.
pub async fn get_cart(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CartWithItems>>> {
    let cart = CartRepo::find_or_create_for_user(&state.pool, auth.user_id).await?;
    let cart = CartRepo::fetch_with_items(&state.pool, cart).await?;
    Ok(Json(DataResponse::new(cart)))
}

/// POST /ecommerce/cart
///
/// Adds a product to the caller's cart; a repeat addition increments the
/// existing row's quantity. Stock is deliberately not checked here -- the
/// order workflow is the single enforcement point.
pub async fn add_to_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddCartItemRequest>,
) -> AppResult<Json<DataResponse<CartWithItems>>> {
    input.validate()?;
    let quantity = input.quantity.unwrap_or(1);

    // Reject unknown products here rather than surfacing an FK violation.
    ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    let cart = CartRepo::find_or_create_for_user(&state.pool, auth.user_id).await?;
    CartRepo::add_item(&state.pool, cart.id, input.product_id, quantity).await?;

    let cart = CartRepo::fetch_with_items(&state.pool, cart).await?;
    Ok(Json(DataResponse::new(cart)))
}
