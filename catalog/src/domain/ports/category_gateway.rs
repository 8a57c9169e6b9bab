//! Category gateway port
//!
//! Persistence boundary for categories.
//! Implementations are provided by adapters (e.g., a database or an in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryId};
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::error::DomainError;

/// Gateway for Category aggregates
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Persist a new category. The returned value keeps the same ID.
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;

    /// Persist changes to an existing category
    async fn update(&self, category: &Category) -> Result<Category, DomainError>;

    /// Find a category by ID; `None` when it does not exist
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    /// Delete a category. Deleting an unknown ID is not an error.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), DomainError>;

    /// Paginated search
    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, DomainError>;
}
