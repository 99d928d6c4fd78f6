//! Category entity model and DTOs.

use category_core::types::DbId;
use category_core::validation::validate_category_name;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a category.
///
/// A body without `name` decodes to an empty name and fails validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryCreateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_category_name"))]
    pub name: String,
}

/// DTO for replacing a category's name. Not a partial patch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryUpdateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_category_name"))]
    pub name: String,
}

/// Category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: DbId,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
