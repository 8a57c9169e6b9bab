//! Search query and page types shared by gateways

use serde::{Deserialize, Serialize};

/// Default page size when a query does not specify one
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Field a category search is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySort {
    #[default]
    Name,
    Description,
    CreatedAt,
}

impl std::fmt::Display for CategorySort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySort::Name => write!(f, "name"),
            CategorySort::Description => write!(f, "description"),
            CategorySort::CreatedAt => write!(f, "created_at"),
        }
    }
}

impl std::str::FromStr for CategorySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(CategorySort::Name),
            "description" => Ok(CategorySort::Description),
            "created_at" | "createdat" => Ok(CategorySort::CreatedAt),
            _ => Err(format!("Unknown category sort: {}", s)),
        }
    }
}

/// Paginated search over categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Zero-based page index
    pub page: u32,
    pub per_page: u32,
    /// Free-text filter; empty matches everything
    pub terms: String,
    pub sort: CategorySort,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            terms: String::new(),
            sort: CategorySort::default(),
            direction: SortDirection::default(),
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    /// Convert the items, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
