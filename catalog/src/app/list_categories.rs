//! List categories use case
//!
//! Paginated search. Page sizes are normalized against `Config` before the
//! query reaches the gateway.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{Category, CategoryId};
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::ports::CategoryGateway;
use crate::domain::AggregateRoot;
use crate::error::AppError;

/// Summary row of a category listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().map(str::to_string),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub struct ListCategoriesUseCase<G>
where
    G: CategoryGateway,
{
    gateway: Arc<G>,
    config: Config,
}

impl<G> ListCategoriesUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>, config: Config) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(
        &self,
        query: SearchQuery,
    ) -> Result<Pagination<CategoryListOutput>, AppError> {
        let query = SearchQuery {
            per_page: self.config.normalize_per_page(query.per_page),
            ..query
        };

        let page = self.gateway.find_all(&query).await?;
        tracing::debug!(
            page = page.current_page,
            per_page = page.per_page,
            total = page.total,
            "Listed categories"
        );

        Ok(page.map(CategoryListOutput::from))
    }
}
