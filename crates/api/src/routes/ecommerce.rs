//! Route definitions for the `/ecommerce` resource.
//!
//! ```text
//! GET    /categories      -> list_categories (public)
//! POST   /categories      -> create_category (admin)
//! GET    /products        -> list_products (public)
//! POST   /products        -> create_product (admin)
//! GET    /products/{id}   -> get_product (public)
//! PUT    /products/{id}   -> update_product (admin)
//! DELETE /products/{id}   -> delete_product (admin)
//! GET    /cart            -> get_cart (requires auth)
//! POST   /cart            -> add_to_cart (requires auth)
//! POST   /orders          -> place_order (requires auth)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cart, catalog, orders};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/products",
            get(catalog::list_products).post(catalog::create_product),
        )
        .route(
            "/products/{id}",
            get(catalog::get_product)
                .put(catalog::update_product)
                .delete(catalog::delete_product),
        )
        .route("/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/orders", post(orders::place_order))
}
