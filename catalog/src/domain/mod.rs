//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `validation`: Rule violation collectors
//! - `clock`: Time source used by entity transitions

pub mod aggregate;
pub mod clock;
pub mod entities;
pub mod pagination;
pub mod ports;
pub mod validation;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, SystemClock};
pub use pagination::{CategorySort, Pagination, SearchQuery, SortDirection};
pub use validation::{Notification, ValidationError, ValidationErrors, ValidationHandler};
