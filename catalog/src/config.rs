use std::env;

use tracing_subscriber::util::TryInitError;

use crate::domain::pagination::DEFAULT_PER_PAGE;
use crate::telemetry;

const DEFAULT_MAX_PER_PAGE: u32 = 100;
const DEFAULT_LOG_FILTER: &str = "info,catalog_admin=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page size used when a listing asks for zero items per page
    pub default_per_page: u32,
    /// Upper bound on items per page
    pub max_per_page: u32,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            default_per_page: parse_var("CATALOG_DEFAULT_PER_PAGE").unwrap_or(DEFAULT_PER_PAGE),
            max_per_page: parse_var("CATALOG_MAX_PER_PAGE").unwrap_or(DEFAULT_MAX_PER_PAGE),
            log_filter: env::var("CATALOG_LOG_FILTER")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Install the global tracing subscriber with `log_filter` as the fallback filter
    pub fn init_tracing(&self) -> Result<(), TryInitError> {
        telemetry::init_tracing(&self.log_filter)
    }

    /// Clamp a requested page size into `1..=max_per_page`
    pub fn normalize_per_page(&self, requested: u32) -> u32 {
        let per_page = if requested == 0 {
            self.default_per_page
        } else {
            requested
        };
        per_page.clamp(1, self.max_per_page.max(1))
    }
}

fn parse_var(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
