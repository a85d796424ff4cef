//! Integration tests for cart retrieval and item accumulation.

use sqlx::PgPool;

use cartwheel_db::models::product::CreateProduct;
use cartwheel_db::models::user::CreateUser;
use cartwheel_db::repositories::{CartRepo, ProductRepo, UserRepo};

async fn create_user(pool: &PgPool, email: &str) -> cartwheel_db::models::user::User {
    let input = CreateUser {
        name: "Cart User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

async fn create_product(pool: &PgPool, name: &str) -> cartwheel_db::models::product::Product {
    let input = CreateProduct {
        name: name.to_string(),
        description: "test product".to_string(),
        price: "3.50".parse().unwrap(),
        stock: 100,
        category_id: None,
    };
    ProductRepo::create(pool, &input).await.unwrap()
}

/// First access creates the cart; further accesses return the same row.
#[sqlx::test(migrations = "./migrations")]
async fn test_cart_created_lazily_and_idempotently(pool: PgPool) {
    let user = create_user(&pool, "lazy@test.com").await;

    assert!(CartRepo::find_by_user(&pool, user.id).await.unwrap().is_none());

    let first = CartRepo::find_or_create_for_user(&pool, user.id).await.unwrap();
    let second = CartRepo::find_or_create_for_user(&pool, user.id).await.unwrap();
    assert_eq!(first.id, second.id);

    let with_items = CartRepo::fetch_with_items(&pool, second).await.unwrap();
    assert!(with_items.items.is_empty());
}

/// Adding the same product twice accumulates quantity on a single row.
#[sqlx::test(migrations = "./migrations")]
async fn test_add_item_accumulates_quantity(pool: PgPool) {
    let user = create_user(&pool, "accumulate@test.com").await;
    let product = create_product(&pool, "Stackable").await;
    let cart = CartRepo::find_or_create_for_user(&pool, user.id).await.unwrap();

    CartRepo::add_item(&pool, cart.id, product.id, 2).await.unwrap();
    CartRepo::add_item(&pool, cart.id, product.id, 3).await.unwrap();

    let with_items = CartRepo::fetch_with_items(&pool, cart).await.unwrap();
    assert_eq!(with_items.items.len(), 1, "must stay a single row");
    assert_eq!(with_items.items[0].quantity, 5);
    assert_eq!(with_items.items[0].product_name, "Stackable");
}

/// Distinct products get distinct rows, returned in insertion order.
#[sqlx::test(migrations = "./migrations")]
async fn test_distinct_products_distinct_rows(pool: PgPool) {
    let user = create_user(&pool, "distinct@test.com").await;
    let first = create_product(&pool, "First").await;
    let second = create_product(&pool, "Second").await;
    let cart = CartRepo::find_or_create_for_user(&pool, user.id).await.unwrap();

    CartRepo::add_item(&pool, cart.id, first.id, 1).await.unwrap();
    CartRepo::add_item(&pool, cart.id, second.id, 4).await.unwrap();

    let with_items = CartRepo::fetch_with_items(&pool, cart).await.unwrap();
    assert_eq!(with_items.items.len(), 2);
    assert_eq!(with_items.items[0].product_name, "First");
    assert_eq!(with_items.items[1].product_name, "Second");
    assert_eq!(with_items.items[1].quantity, 4);
}
