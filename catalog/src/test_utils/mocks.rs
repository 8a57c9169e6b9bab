//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

use crate::domain::clock::Clock;
use crate::domain::entities::{Category, CategoryId};
use crate::domain::pagination::{CategorySort, Pagination, SearchQuery, SortDirection};
use crate::domain::ports::CategoryGateway;
use crate::domain::AggregateRoot;
use crate::error::DomainError;

// ============================================================================
// Stepping Clock
// ============================================================================

/// Deterministic clock: every read returns an instant one step after the last
pub struct SteppingClock {
    base: DateTime<Utc>,
    step_ms: i64,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            step_ms: 1,
            ticks: AtomicI64::new(0),
        }
    }

    /// The instant the next `now` call will return
    pub fn peek(&self) -> DateTime<Utc> {
        self.at(self.ticks.load(AtomicOrdering::SeqCst))
    }

    pub fn step(&self) -> Duration {
        Duration::milliseconds(self.step_ms)
    }

    fn at(&self, tick: i64) -> DateTime<Utc> {
        self.base + Duration::milliseconds(self.step_ms * tick)
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        self.at(self.ticks.fetch_add(1, AtomicOrdering::SeqCst))
    }
}

// ============================================================================
// In-Memory Category Gateway
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryGateway {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            categories: Arc::default(),
            should_fail: Arc::new(RwLock::new(true)),
        }
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        {
            let mut categories = self.categories.write().unwrap();
            categories.insert(*category.id(), category);
        }
        self
    }

    /// Number of stored categories
    pub fn len(&self) -> usize {
        self.categories.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a stored category without going through the port
    pub fn stored(&self, id: &CategoryId) -> Option<Category> {
        self.categories.read().unwrap().get(id).cloned()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock gateway failure".to_string()));
        }
        Ok(())
    }
}

fn matches_terms(category: &Category, terms: &str) -> bool {
    if terms.is_empty() {
        return true;
    }
    let terms = terms.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&terms))
            .unwrap_or(false)
    };
    contains(category.name()) || contains(category.description())
}

fn compare(a: &Category, b: &Category, sort: CategorySort) -> Ordering {
    match sort {
        CategorySort::Name => a.name().cmp(&b.name()),
        CategorySort::Description => a.description().cmp(&b.description()),
        CategorySort::CreatedAt => a.created_at().cmp(&b.created_at()),
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        self.check_failure()?;
        let mut categories = self.categories.write().unwrap();
        categories.insert(*category.id(), category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        self.check_failure()?;
        let mut categories = self.categories.write().unwrap();
        if !categories.contains_key(category.id()) {
            return Err(DomainError::NotFound(format!(
                "Category {} not found",
                category.id()
            )));
        }
        categories.insert(*category.id(), category.clone());
        Ok(category.clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        self.check_failure()?;
        let categories = self.categories.read().unwrap();
        Ok(categories.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut categories = self.categories.write().unwrap();
        categories.remove(id);
        Ok(())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, DomainError> {
        self.check_failure()?;
        let categories = self.categories.read().unwrap();

        let mut matching: Vec<Category> = categories
            .values()
            .filter(|c| matches_terms(c, &query.terms))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as u64;
        let offset = query.page as usize * query.per_page as usize;
        let items = matching
            .into_iter()
            .skip(offset)
            .take(query.per_page as usize)
            .collect();

        Ok(Pagination {
            current_page: query.page,
            per_page: query.per_page,
            total,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_category_named;

    #[test]
    fn stepping_clock_strictly_increases() {
        let clock = SteppingClock::new();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(second - first, clock.step());
    }

    #[test]
    fn peek_does_not_advance() {
        let clock = SteppingClock::new();
        let peeked = clock.peek();
        assert_eq!(clock.peek(), peeked);
        assert_eq!(clock.now(), peeked);
    }

    #[test]
    fn stepping_clock_keeps_increasing_past_i32_ticks() {
        let clock = SteppingClock::new();
        let base = clock.peek();
        clock
            .ticks
            .store(i64::from(i32::MAX) + 1, AtomicOrdering::SeqCst);

        let first = clock.now();
        let second = clock.now();

        assert!(first > base);
        assert_eq!(first - base, Duration::milliseconds(i64::from(i32::MAX) + 1));
        assert_eq!(second - first, clock.step());
    }

    #[tokio::test]
    async fn find_all_filters_sorts_and_pages() {
        let gateway = InMemoryCategoryGateway::new()
            .with_category(test_category_named("Series"))
            .with_category(test_category_named("Filmes"))
            .with_category(test_category_named("Documentarios"));

        let query = SearchQuery {
            per_page: 2,
            ..SearchQuery::default()
        };
        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 3);
        let names: Vec<_> = page.items.iter().map(|c| c.name().unwrap()).collect();
        assert_eq!(names, vec!["Documentarios", "Filmes"]);

        let query = SearchQuery {
            page: 1,
            per_page: 2,
            ..SearchQuery::default()
        };
        let page = gateway.find_all(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), Some("Series"));

        let query = SearchQuery {
            terms: "FIL".to_string(),
            direction: SortDirection::Desc,
            ..SearchQuery::default()
        };
        let page = gateway.find_all(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), Some("Filmes"));
    }

    #[tokio::test]
    async fn failing_gateway_returns_storage_error() {
        let gateway = InMemoryCategoryGateway::failing();
        let result = gateway.find_by_id(&CategoryId::new()).await;
        assert!(matches!(result, Err(DomainError::Storage(_))));
    }
}
