//! Handlers for the `/ecommerce` catalog (categories and products).
//!
//! Reads are public; mutations require the admin role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use cartwheel_core::error::CoreError;
use cartwheel_core::types::DbId;
use cartwheel_db::models::category::{Category, CreateCategory};
use cartwheel_db::models::product::{CreateProduct, Product, ProductWithCategory, UpdateProduct};
use cartwheel_db::repositories::{CategoryRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /ecommerce/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "Please add a category name"))]
    pub name: String,
    pub description: Option<String>,
}

/// Request body for `POST /ecommerce/products`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Please add a product name"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: String,
    pub price: Decimal,
    /// Defaults to 0 when absent.
    pub stock: Option<i32>,
    pub category_id: Option<DbId>,
}

/// Request body for `PUT /ecommerce/products/{id}`. All fields optional,
/// but a field that is present must still satisfy the creation rules --
/// `Some("")` is rejected, not written.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Please add a product name"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<DbId>,
}

/// Price must be non-negative; the schema has no CHECK for it, so the
/// boundary is the only enforcement point.
fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "Price must not be negative".into(),
        )));
    }
    Ok(())
}

/// Stock below zero would trip the CHECK constraint; report it as a 400.
fn validate_stock(stock: i32) -> Result<(), AppError> {
    if stock < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Stock must not be negative".into(),
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /ecommerce/categories (public)
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(categories)))
}

/// POST /ecommerce/categories (admin)
pub async fn create_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    input.validate()?;

    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name: input.name,
            description: input.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(category))))
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// GET /ecommerce/products (public)
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductWithCategory>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(products)))
}

/// GET /ecommerce/products/{id} (public)
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProductWithCategory>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse::new(product)))
}

/// POST /ecommerce/products (admin)
pub async fn create_product(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    input.validate()?;
    validate_price(input.price)?;
    let stock = input.stock.unwrap_or(0);
    validate_stock(stock)?;

    let product = ProductRepo::create(
        &state.pool,
        &CreateProduct {
            name: input.name,
            description: input.description,
            price: input.price,
            stock,
            category_id: input.category_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// PUT /ecommerce/products/{id} (admin)
///
/// Direct stock adjustment lives here; everything else that touches stock
/// goes through the order workflow.
pub async fn update_product(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProductRequest>,
) -> AppResult<Json<DataResponse<Product>>> {
    input.validate()?;
    if let Some(price) = input.price {
        validate_price(price)?;
    }
    if let Some(stock) = input.stock {
        validate_stock(stock)?;
    }

    let product = ProductRepo::update(
        &state.pool,
        id,
        &UpdateProduct {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    }))?;

    Ok(Json(DataResponse::new(product)))
}

/// DELETE /ecommerce/products/{id} (admin)
pub async fn delete_product(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }
    Ok(Json(DataResponse::new(serde_json::json!({}))))
}
