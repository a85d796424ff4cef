//! Integration tests for task CRUD: owner scoping, status filtering, and
//! offset pagination.

use sqlx::PgPool;

use cartwheel_db::models::task::{CreateTask, UpdateTask};
use cartwheel_db::models::user::CreateUser;
use cartwheel_db::repositories::{TaskRepo, UserRepo};

async fn create_user(pool: &PgPool, email: &str) -> cartwheel_db::models::user::User {
    let input = CreateUser {
        name: "Task User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

async fn create_task(pool: &PgPool, user_id: i64, title: &str, status: Option<&str>) {
    let input = CreateTask {
        user_id,
        title: title.to_string(),
        description: "something to do".to_string(),
        status: status.map(str::to_string),
    };
    TaskRepo::create(pool, &input).await.unwrap();
}

/// Listing returns only the requesting user's tasks, whatever the filter.
#[sqlx::test(migrations = "./migrations")]
async fn test_listing_is_owner_scoped(pool: PgPool) {
    let owner = create_user(&pool, "owner@test.com").await;
    let other = create_user(&pool, "other@test.com").await;

    create_task(&pool, owner.id, "mine", None).await;
    create_task(&pool, other.id, "theirs", None).await;
    create_task(&pool, other.id, "also theirs", Some("completed")).await;

    let tasks = TaskRepo::list_for_user(&pool, owner.id, None, 10, 0).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "mine");

    // A status filter matching only the other user's tasks yields nothing.
    let tasks = TaskRepo::list_for_user(&pool, owner.id, Some("completed"), 10, 0)
        .await
        .unwrap();
    assert!(tasks.is_empty());

    assert_eq!(TaskRepo::count_for_user(&pool, owner.id, None).await.unwrap(), 1);
}

/// Status filter is exact-match and count agrees with the listing.
#[sqlx::test(migrations = "./migrations")]
async fn test_status_filter(pool: PgPool) {
    let user = create_user(&pool, "filter@test.com").await;
    create_task(&pool, user.id, "a", Some("pending")).await;
    create_task(&pool, user.id, "b", Some("in-progress")).await;
    create_task(&pool, user.id, "c", Some("in-progress")).await;

    let tasks = TaskRepo::list_for_user(&pool, user.id, Some("in-progress"), 10, 0)
        .await
        .unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.status == "in-progress"));

    let total = TaskRepo::count_for_user(&pool, user.id, Some("in-progress"))
        .await
        .unwrap();
    assert_eq!(total, 2);
}

/// 25 tasks at limit 10: the third page holds the remaining 5.
#[sqlx::test(migrations = "./migrations")]
async fn test_offset_pagination(pool: PgPool) {
    let user = create_user(&pool, "paging@test.com").await;
    for i in 0..25 {
        create_task(&pool, user.id, &format!("task {i}"), None).await;
    }

    let total = TaskRepo::count_for_user(&pool, user.id, None).await.unwrap();
    assert_eq!(total, 25);

    let page1 = TaskRepo::list_for_user(&pool, user.id, None, 10, 0).await.unwrap();
    let page3 = TaskRepo::list_for_user(&pool, user.id, None, 10, 20).await.unwrap();
    assert_eq!(page1.len(), 10);
    assert_eq!(page3.len(), 5);
}

/// Tasks sharing a creation timestamp keep a stable newest-first order
/// across page boundaries (id breaks the tie).
#[sqlx::test(migrations = "./migrations")]
async fn test_ordering_is_stable_for_equal_timestamps(pool: PgPool) {
    let user = create_user(&pool, "stable@test.com").await;
    for i in 0..4 {
        create_task(&pool, user.id, &format!("task {i}"), None).await;
    }

    // Collapse every created_at to the same instant.
    sqlx::query("UPDATE tasks SET created_at = now() WHERE user_id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let first_half = TaskRepo::list_for_user(&pool, user.id, None, 2, 0).await.unwrap();
    let second_half = TaskRepo::list_for_user(&pool, user.id, None, 2, 2).await.unwrap();

    let ids: Vec<i64> = first_half
        .iter()
        .chain(second_half.iter())
        .map(|t| t.id)
        .collect();
    assert_eq!(ids.len(), 4);
    assert!(
        ids.windows(2).all(|w| w[0] > w[1]),
        "pages must concatenate into strictly id-descending order, got {ids:?}"
    );
}

/// Partial update touches only provided fields; delete reports whether a
/// row actually went away.
#[sqlx::test(migrations = "./migrations")]
async fn test_update_and_delete(pool: PgPool) {
    let user = create_user(&pool, "update@test.com").await;
    let task = TaskRepo::create(
        &pool,
        &CreateTask {
            user_id: user.id,
            title: "before".to_string(),
            description: "desc".to_string(),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(task.status, "pending");

    let updated = TaskRepo::update(
        &pool,
        task.id,
        &UpdateTask {
            title: None,
            description: None,
            status: Some("completed".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("task should exist");
    assert_eq!(updated.title, "before");
    assert_eq!(updated.status, "completed");

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
}
