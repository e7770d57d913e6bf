//! Query engine for the staff engine.
//!
//! This module searches, filters, sorts and paginates record collections.
//! The same machinery serves the staff directory and the flattened
//! certifications table: any type implementing [`Queryable`] can be queried.
//! A [`Query`] composes the stages in their fixed order (search and filters,
//! then sort, then page); the free functions are available for callers that
//! compose stages themselves, in that same order.

mod cache;
mod compose;
mod field;
mod filter;
mod paginate;
mod records;
mod search;
mod sort;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, QueryCache};
pub use compose::Query;
pub use field::{FieldValue, Queryable, compare_values};
pub use filter::{CertificationFilter, FilterSet, Predicate, StaffFilter, filter};
pub use paginate::{Page, paginate};
pub use records::{CertificationRow, certification_rows};
pub use search::search;
pub use sort::{SortDirection, SortSpec, sort};
