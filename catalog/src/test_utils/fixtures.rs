//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::clock::SystemClock;
use crate::domain::entities::Category;

/// Create an active test category with default values
pub fn test_category() -> Category {
    test_category_named("Filmes")
}

/// Create an active test category with a specific name
pub fn test_category_named(name: &str) -> Category {
    Category::new_category(
        Some(name.to_string()),
        Some(format!("Categoria {}", name)),
        true,
        &SystemClock,
    )
}

/// Create a soft-deleted test category
pub fn test_inactive_category() -> Category {
    Category::new_category(
        Some("Documentarios".to_string()),
        Some("Categoria inativa".to_string()),
        false,
        &SystemClock,
    )
}
