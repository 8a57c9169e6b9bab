//! Category domain entity
//!
//! A catalog category. Deletion is logical: an inactive category carries the
//! instant it was soft-deleted in `deleted_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::aggregate::AggregateRoot;
use crate::domain::clock::Clock;
use crate::domain::validation::{ValidationError, ValidationHandler};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| format!("Invalid category id: {}", s))
    }
}

/// A catalog category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "is_active")]
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Set iff the category is inactive
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Build a fresh category. Does not validate; call `validate` afterwards.
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        clock: &dyn Clock,
    ) -> Self {
        let now = clock.now();
        Self {
            id: CategoryId::new(),
            name,
            description,
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    /// Rebuild a category from stored parts (used by gateway implementations)
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Soft-delete. An existing `deleted_at` is kept.
    pub fn deactivate(&mut self, clock: &dyn Clock) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(clock.now());
        }
        self.active = false;
        self.updated_at = clock.now();
        self
    }

    pub fn activate(&mut self, clock: &dyn Clock) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = clock.now();
        self
    }

    /// Replace name and description verbatim, then activate or deactivate.
    /// Does not validate.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        clock: &dyn Clock,
    ) -> &mut Self {
        self.name = name;
        self.description = description;
        self.updated_at = clock.now();
        if is_active {
            self.activate(clock)
        } else {
            self.deactivate(clock)
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate<H: ValidationHandler>(&self, handler: &mut H) {
        CategoryValidator::new(self, handler).validate();
    }
}

/// Checks the field rules of a category
pub struct CategoryValidator<'a, H: ValidationHandler> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }

    pub fn validate(&mut self) {
        self.check_name_constraints();
    }

    // null, then empty, then length; each failure ends the name checks
    fn check_name_constraints(&mut self) {
        let Some(name) = self.category.name() else {
            self.handler.append(ValidationError::new("'name' should not be null"));
            return;
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.handler.append(ValidationError::new("'name' should not be empty"));
            return;
        }

        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            self.handler.append(ValidationError::new(format!(
                "'name' must be between {} and {} characters",
                NAME_MIN_LENGTH, NAME_MAX_LENGTH
            )));
        }
    }
}
