//! Repository for the `orders` and `order_items` tables, including the
//! order placement workflow.

use cartwheel_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::cart::CartItemWithProduct;
use crate::models::order::{Order, OrderItem, OrderWithItems};

const ORDER_COLUMNS: &str = "id, user_id, total_amount, status, created_at, updated_at";
const ITEM_COLUMNS: &str = "id, order_id, product_id, quantity, price";

/// Failures specific to order placement.
///
/// `EmptyCart` and `InsufficientStock` are business outcomes the API maps
/// to 400 responses; `Db` covers everything else.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient stock for product: {name}")]
    InsufficientStock { name: String },

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides order placement and retrieval.
pub struct OrderRepo;

impl OrderRepo {
    /// Convert the user's cart into an order, atomically.
    ///
    /// Inside a single transaction: every cart item's stock is decremented
    /// with a guarded `UPDATE ... WHERE stock >= quantity`, the order and
    /// its price-snapshot items are inserted, and the cart is emptied. The
    /// guarded update takes a row lock on the product, so two racing
    /// placements serialize and the loser re-checks against the already
    /// decremented stock -- overselling is impossible at read committed.
    ///
    /// Any failure before commit rolls back every write, including prior
    /// stock decrements from the same invocation.
    pub async fn place_order(pool: &PgPool, user_id: DbId) -> Result<OrderWithItems, OrderError> {
        let mut tx = pool.begin().await?;

        let cart_id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM carts WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        let cart_id = cart_id.ok_or(OrderError::EmptyCart)?;

        let items = sqlx::query_as::<_, CartItemWithProduct>(
            "SELECT ci.id, ci.cart_id, ci.product_id, ci.quantity,
                    p.name AS product_name, p.price, p.stock
             FROM cart_items ci
             JOIN products p ON p.id = ci.product_id
             WHERE ci.cart_id = $1
             ORDER BY ci.id",
        )
        .bind(cart_id)
        .fetch_all(&mut *tx)
        .await?;

        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut total_amount = Decimal::ZERO;
        for item in &items {
            let updated = sqlx::query(
                "UPDATE products SET stock = stock - $2 WHERE id = $1 AND stock >= $2",
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                // Dropping the transaction rolls back earlier decrements.
                return Err(OrderError::InsufficientStock {
                    name: item.product_name.clone(),
                });
            }

            total_amount += item.price * Decimal::from(item.quantity);
        }

        let insert_order = format!(
            "INSERT INTO orders (user_id, total_amount)
             VALUES ($1, $2)
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&insert_order)
            .bind(user_id)
            .bind(total_amount)
            .fetch_one(&mut *tx)
            .await?;

        for item in &items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        // The cart row persists; only its items are cleared.
        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id,
            order_id = order.id,
            item_count = items.len(),
            "order committed"
        );

        let order = Self::fetch_with_items(pool, order).await?;
        Ok(order)
    }

    /// Load an order with its item snapshots.
    pub async fn fetch_with_items(
        pool: &PgPool,
        order: Order,
    ) -> Result<OrderWithItems, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id"
        );
        let items = sqlx::query_as::<_, OrderItem>(&query)
            .bind(order.id)
            .fetch_all(pool)
            .await?;

        Ok(OrderWithItems { order, items })
    }

    /// Find an order by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
