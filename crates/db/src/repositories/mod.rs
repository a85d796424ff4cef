//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cart_repo;
pub mod category_repo;
pub mod order_repo;
pub mod product_repo;
pub mod task_repo;
pub mod user_repo;

pub use cart_repo::CartRepo;
pub use category_repo::CategoryRepo;
pub use order_repo::{OrderError, OrderRepo};
pub use product_repo::ProductRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
