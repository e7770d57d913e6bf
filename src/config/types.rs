//! Configuration types for the staff engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from YAML. Every field has a default, so an empty document is
//! a valid configuration.

use serde::{Deserialize, Serialize};

use crate::derivation::StatusPolicy;
use crate::error::{EngineError, EngineResult};
use crate::query::DEFAULT_CACHE_CAPACITY;
use crate::schedule::WeekStart;

/// Default certification warning window, in days.
pub const DEFAULT_WARNING_WINDOW_DAYS: i64 = 30;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Engine configuration.
///
/// # Example
///
/// ```
/// use staff_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.warning_window_days, 30);
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.search_fields, vec!["name", "email", "role"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many days before expiry a certification counts as expiring soon.
    pub warning_window_days: i64,
    /// Rows per page for paginated views.
    pub page_size: usize,
    /// Which day the week starts on in flattened and calendar views.
    pub week_start: WeekStart,
    /// Staff fields the directory search box matches against.
    pub search_fields: Vec<String>,
    /// Whether certification status is read from the dataset or derived
    /// from the expiration date.
    pub status_policy: StatusPolicy,
    /// Most queries each engine cache keeps before evicting.
    pub query_cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warning_window_days: DEFAULT_WARNING_WINDOW_DAYS,
            page_size: DEFAULT_PAGE_SIZE,
            week_start: WeekStart::default(),
            search_fields: vec!["name".to_string(), "email".to_string(), "role".to_string()],
            status_policy: StatusPolicy::default(),
            query_cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Checks that the configuration holds usable values.
    ///
    /// Search field names are checked later, against the record type they
    /// are applied to.
    pub fn validate(&self) -> EngineResult<()> {
        if self.page_size == 0 {
            return Err(EngineError::InvalidConfig {
                field: "page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.warning_window_days < 0 {
            return Err(EngineError::InvalidConfig {
                field: "warning_window_days".to_string(),
                message: format!("cannot be negative (got {})", self.warning_window_days),
            });
        }

        if self.query_cache_capacity == 0 {
            return Err(EngineError::InvalidConfig {
                field: "query_cache_capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
