//! Application layer
//!
//! Contains use cases. Each use case coordinates domain entities with the
//! category gateway.

pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete_category::DeleteCategoryUseCase;
pub use get_category::{CategoryOutput, GetCategoryByIdUseCase};
pub use list_categories::{CategoryListOutput, ListCategoriesUseCase};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};
