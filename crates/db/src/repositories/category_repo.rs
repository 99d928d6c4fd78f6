//! Repository for the `category` table.

use category_core::types::DbId;

use crate::models::category::Category;
use crate::DbTransaction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category, returning it with the generated `id` filled in.
    ///
    /// The incoming `id` is ignored.
    pub async fn save(
        tx: &mut DbTransaction<'_>,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO category (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Replace the name of the row matching `category.id`.
    ///
    /// Succeeds without touching anything when no row matches; callers check
    /// existence first.
    pub async fn update(
        tx: &mut DbTransaction<'_>,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        let result = sqlx::query("UPDATE category SET name = $2 WHERE id = $1")
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut **tx)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(category_id = category.id, "Update matched no category row");
        }
        Ok(category)
    }

    /// Delete a category by ID. Deleting an absent ID is not an error.
    pub async fn delete(tx: &mut DbTransaction<'_>, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Find a category by its ID.
    pub async fn find_by_id(
        tx: &mut DbTransaction<'_>,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List every category in creation order.
    pub async fn find_all(tx: &mut DbTransaction<'_>) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&mut **tx)
            .await
    }
}
