//! Cart and cart item models.

use cartwheel_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Cart row from the `carts` table. Exactly one per user, created lazily.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cart {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart item joined with the product it references.
///
/// `price` and `stock` are the product's *current* values -- nothing is
/// snapshotted until order placement.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItemWithProduct {
    pub id: DbId,
    pub cart_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub product_name: String,
    pub price: Decimal,
    pub stock: i32,
}

/// A cart with its items and product details, as returned to the API.
#[derive(Debug, Clone, Serialize)]
pub struct CartWithItems {
    #[serde(flatten)]
    pub cart: Cart,
    pub items: Vec<CartItemWithProduct>,
}
