//! Repository for the `products` table.

use cartwheel_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductWithCategory, UpdateProduct};

const COLUMNS: &str = "id, name, description, price, stock, category_id, created_at, updated_at";

/// Columns for product rows joined with the category name.
const JOINED_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.stock, p.category_id, \
                              c.name AS category_name, p.created_at, p.updated_at";

/// Provides CRUD operations for products.
///
/// Stock is mutated here only through direct admin updates; the order
/// workflow owns the transactional decrement path.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products with their category name, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProductWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a product by internal ID, with its category name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, ProductWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                stock = COALESCE($5, stock),
                category_id = COALESCE($6, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a product. Returns `true` if a row was removed.
    ///
    /// Cart items referencing it cascade away; order item snapshots keep
    /// their price/quantity and merely lose the live reference.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
