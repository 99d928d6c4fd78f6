//! Tests for `CategoryService` against a real database.
//!
//! Checks the typed failures the request layer depends on and the
//! transaction boundary around each operation.

use assert_matches::assert_matches;
use category_api::error::AppError;
use category_api::services::CategoryService;
use category_core::error::CoreError;
use category_db::models::category::{CategoryCreateRequest, CategoryUpdateRequest};
use sqlx::PgPool;

fn create_req(name: &str) -> CategoryCreateRequest {
    CategoryCreateRequest {
        name: name.to_string(),
    }
}

fn update_req(name: &str) -> CategoryUpdateRequest {
    CategoryUpdateRequest {
        name: name.to_string(),
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_find_round_trip(pool: PgPool) {
    let service = CategoryService::new(pool);

    let created = service.create(create_req("Nasi Goreng")).await.unwrap();
    let found = service.find_by_id(created.id).await.unwrap();

    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_blank_name_is_validation_error(pool: PgPool) {
    let service = CategoryService::new(pool);

    assert_matches!(
        service.create(create_req("")).await,
        Err(AppError::Core(CoreError::Validation(_)))
    );
    assert!(service.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_id_is_not_found(pool: PgPool) {
    let service = CategoryService::new(pool);

    assert_matches!(
        service.update(77, update_req("Ghost")).await,
        Err(AppError::Core(CoreError::NotFound { entity: "Category", id: 77 }))
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_validates_before_lookup(pool: PgPool) {
    let service = CategoryService::new(pool);

    // Blank name on a missing id reports the validation failure.
    assert_matches!(
        service.update(77, update_req(" ")).await,
        Err(AppError::Core(CoreError::Validation(_)))
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_keeps_id(pool: PgPool) {
    let service = CategoryService::new(pool);
    let created = service.create(create_req("Old")).await.unwrap();

    let updated = service.update(created.id, update_req("New")).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New");
    assert_eq!(service.find_by_id(created.id).await.unwrap().name, "New");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_then_find_is_not_found(pool: PgPool) {
    let service = CategoryService::new(pool);
    let created = service.create(create_req("Temp")).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert_matches!(
        service.find_by_id(created.id).await,
        Err(AppError::Core(CoreError::NotFound { .. }))
    );
    assert_matches!(
        service.delete(created.id).await,
        Err(AppError::Core(CoreError::NotFound { .. }))
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_find_all_preserves_creation_order(pool: PgPool) {
    let service = CategoryService::new(pool);
    for name in ["Z", "M", "A"] {
        service.create(create_req(name)).await.unwrap();
    }

    let names: Vec<String> = service
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Z", "M", "A"]);
}
