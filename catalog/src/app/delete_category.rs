//! Delete category use case

use std::sync::Arc;

use crate::domain::entities::CategoryId;
use crate::domain::ports::CategoryGateway;
use crate::error::AppError;

pub struct DeleteCategoryUseCase<G>
where
    G: CategoryGateway,
{
    gateway: Arc<G>,
}

impl<G> DeleteCategoryUseCase<G>
where
    G: CategoryGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Remove a category. Unknown IDs succeed.
    pub async fn execute(&self, id: &CategoryId) -> Result<(), AppError> {
        self.gateway.delete_by_id(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
