//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod category;

pub use category::{Category, CategoryId, CategoryValidator, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
