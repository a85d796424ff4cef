//! Product entity model and DTOs.

use cartwheel_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Full product row from the `products` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Unit price, fixed-point (`NUMERIC(10,2)`).
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product row joined with its category name, for catalog listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductWithCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<DbId>,
}

/// DTO for partial product updates. All fields are optional; `category_id`
/// cannot be cleared through this path, only reassigned.
#[derive(Debug)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<DbId>,
}
