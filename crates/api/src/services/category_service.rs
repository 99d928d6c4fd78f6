//! Category business operations.
//!
//! Every operation runs inside one transaction taken from the pool. The
//! transaction is committed only after the last repository call succeeds;
//! any `?` before that drops it, and sqlx rolls it back on drop.

use category_core::error::CoreError;
use category_core::types::DbId;
use category_db::models::category::{
    Category, CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest,
};
use category_db::repositories::CategoryRepo;
use category_db::{DbPool, DbTransaction};
use validator::Validate;

use crate::error::AppResult;

const ENTITY: &str = "Category";

/// Category CRUD on top of [`CategoryRepo`].
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validate and insert a new category.
    ///
    /// Validation runs before a transaction is opened, so an invalid request
    /// never touches the database.
    pub async fn create(&self, request: CategoryCreateRequest) -> AppResult<CategoryResponse> {
        request.validate().map_err(CoreError::from)?;

        let mut tx = self.pool.begin().await?;
        let saved = CategoryRepo::save(
            &mut tx,
            Category {
                id: 0,
                name: request.name,
            },
        )
        .await?;
        tx.commit().await?;

        Ok(saved.into())
    }

    /// Replace the name of an existing category.
    pub async fn update(
        &self,
        id: DbId,
        request: CategoryUpdateRequest,
    ) -> AppResult<CategoryResponse> {
        request.validate().map_err(CoreError::from)?;

        let mut tx = self.pool.begin().await?;
        let mut category = Self::find_existing(&mut tx, id).await?;
        category.name = request.name;
        let updated = CategoryRepo::update(&mut tx, category).await?;
        tx.commit().await?;

        Ok(updated.into())
    }

    /// Delete an existing category.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let category = Self::find_existing(&mut tx, id).await?;
        CategoryRepo::delete(&mut tx, category.id).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: DbId) -> AppResult<CategoryResponse> {
        let mut tx = self.pool.begin().await?;
        let category = Self::find_existing(&mut tx, id).await?;
        tx.commit().await?;

        Ok(category.into())
    }

    /// All categories in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<CategoryResponse>> {
        let mut tx = self.pool.begin().await?;
        let categories = CategoryRepo::find_all(&mut tx).await?;
        tx.commit().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn find_existing(tx: &mut DbTransaction<'_>, id: DbId) -> AppResult<Category> {
        CategoryRepo::find_by_id(tx, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: ENTITY, id }.into())
    }
}
