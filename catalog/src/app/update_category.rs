//! Update category use case
//!
//! Loads a category, applies the new fields and state, validates the result
//! and persists it. An invalid update leaves the stored category untouched.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::clock::Clock;
use crate::domain::entities::CategoryId;
use crate::domain::ports::CategoryGateway;
use crate::domain::{AggregateRoot, ValidationHandler};
use crate::error::AppError;

use super::get_category::not_found;

/// Input for updating a category
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

pub struct UpdateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    gateway: Arc<G>,
    clock: Arc<dyn Clock>,
}

impl<G> UpdateCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    pub async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<UpdateCategoryOutput, AppError> {
        let mut category = self
            .gateway
            .find_by_id(&command.id)
            .await?
            .ok_or_else(|| not_found(&command.id))?;

        category.update(
            command.name,
            command.description,
            command.is_active,
            self.clock.as_ref(),
        );

        let notification = category.notification();
        if notification.has_errors() {
            tracing::warn!(
                category_id = %command.id,
                error_count = notification.errors().len(),
                "Rejected invalid category update"
            );
            notification.into_result()?;
        }

        let updated = self.gateway.update(&category).await?;
        tracing::info!(
            category_id = %updated.id(),
            is_active = updated.is_active(),
            "Category updated"
        );

        Ok(UpdateCategoryOutput { id: *updated.id() })
    }
}
