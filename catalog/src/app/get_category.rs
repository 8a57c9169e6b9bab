//! Get category by ID use case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryGateway;
use crate::domain::AggregateRoot;
use crate::error::AppError;

/// Full view of a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().map(str::to_string),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub(crate) fn not_found(id: &CategoryId) -> AppError {
    AppError::NotFound(format!("Category with ID {} was not found", id))
}

pub struct GetCategoryByIdUseCase<G>
where
    G: CategoryGateway,
{
    gateway: Arc<G>,
}

impl<G> GetCategoryByIdUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &CategoryId) -> Result<CategoryOutput, AppError> {
        match self.gateway.find_by_id(id).await? {
            Some(category) => Ok(category.into()),
            None => {
                tracing::debug!(category_id = %id, "Category lookup missed");
                Err(not_found(id))
            }
        }
    }
}
