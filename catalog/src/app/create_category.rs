//! Create category use case
//!
//! Builds a category, validates it and hands it to the gateway.
//! Invalid input never reaches the gateway.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::clock::Clock;
use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryGateway;
use crate::domain::{AggregateRoot, ValidationHandler};
use crate::error::AppError;

/// Input for creating a category
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self { id: *category.id() }
    }
}

pub struct CreateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    gateway: Arc<G>,
    clock: Arc<dyn Clock>,
}

impl<G> CreateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    /// Create a category
    ///
    /// All validation errors are returned together in `DomainError::Validation`.
    pub async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CreateCategoryOutput, AppError> {
        let category = Category::new_category(
            command.name,
            command.description,
            command.is_active,
            self.clock.as_ref(),
        );

        let notification = category.notification();
        if notification.has_errors() {
            tracing::warn!(
                error_count = notification.errors().len(),
                "Rejected invalid category"
            );
            notification.into_result()?;
        }

        let created = self.gateway.create(&category).await?;
        tracing::info!(category_id = %created.id(), "Category created");

        Ok(CreateCategoryOutput::from(&created))
    }
}
