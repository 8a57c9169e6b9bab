//! Catalog Admin
//!
//! Domain model and use cases for managing the categories of a content catalog.
//! Uses hexagonal (ports & adapters) architecture: the domain owns the
//! `CategoryGateway` port and storage adapters live outside this crate.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;



pub use app::{
    CreateCategoryCommand, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase,
    ListCategoriesUseCase, UpdateCategoryCommand, UpdateCategoryUseCase,
};
pub use config::Config;
pub use domain::entities::{Category, CategoryId};
pub use domain::ports::CategoryGateway;
pub use domain::{AggregateRoot, Clock, Notification, SystemClock, ValidationError};
pub use error::{AppError, DomainError};
