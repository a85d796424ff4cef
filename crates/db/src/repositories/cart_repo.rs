//! Repository for the `carts` and `cart_items` tables.

use cartwheel_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart::{Cart, CartItemWithProduct, CartWithItems};

const CART_COLUMNS: &str = "id, user_id, created_at, updated_at";

/// Item columns joined with the referenced product's current details.
const ITEM_COLUMNS: &str = "ci.id, ci.cart_id, ci.product_id, ci.quantity, \
                            p.name AS product_name, p.price, p.stock";

/// Provides cart retrieval and item-quantity upsert.
pub struct CartRepo;

impl CartRepo {
    /// Find the user's cart, creating an empty one on first access.
    ///
    /// Idempotent under concurrent calls: the insert is a no-op when the
    /// `uq_carts_user_id` row already exists.
    pub async fn find_or_create_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Cart, sqlx::Error> {
        sqlx::query("INSERT INTO carts (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        let query = format!("SELECT {CART_COLUMNS} FROM carts WHERE user_id = $1");
        sqlx::query_as::<_, Cart>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the user's cart without creating one.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Cart>, sqlx::Error> {
        let query = format!("SELECT {CART_COLUMNS} FROM carts WHERE user_id = $1");
        sqlx::query_as::<_, Cart>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// One row per (cart, product): an existing row has its quantity
    /// incremented instead of a duplicate being inserted. Stock is not
    /// checked here -- availability is enforced only at order placement.
    pub async fn add_item(
        pool: &PgPool,
        cart_id: DbId,
        product_id: DbId,
        quantity: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO cart_items (cart_id, product_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_cart_items_cart_product
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Load a cart with its items and product details, in insertion order.
    pub async fn fetch_with_items(
        pool: &PgPool,
        cart: Cart,
    ) -> Result<CartWithItems, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM cart_items ci
             JOIN products p ON p.id = ci.product_id
             WHERE ci.cart_id = $1
             ORDER BY ci.id"
        );
        let items = sqlx::query_as::<_, CartItemWithProduct>(&query)
            .bind(cart.id)
            .fetch_all(pool)
            .await?;

        Ok(CartWithItems { cart, items })
    }
}
