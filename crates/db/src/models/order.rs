//! Order and order item models.

use cartwheel_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Order row from the `orders` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    /// Sum of `price * quantity` over the items, fixed at placement time.
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order item row: quantity and unit price snapshotted at purchase time.
///
/// `product_id` is `None` if the product was deleted after the purchase;
/// the snapshot itself is immutable.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: Option<DbId>,
    pub quantity: i32,
    pub price: Decimal,
}

/// An order with its items, as returned to the API after placement.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}
