//! Composed queries.
//!
//! A [`Query`] bundles a search term, active filters, an optional sort and a
//! page request, and always applies them in the same order: search and
//! filters, then sort, then pagination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DEFAULT_PAGE_SIZE, EngineConfig};
use crate::error::EngineResult;

use super::field::{Queryable, check_search_field, check_sort_key};
use super::filter::{FilterSet, Predicate};
use super::paginate::{Page, paginate};
use super::search::matches_search;
use super::sort::{SortSpec, compare_records};

/// A complete table query.
///
/// Queries are plain values: they compare and hash by content, which lets
/// [`super::QueryCache`] key results by query.
///
/// # Example
///
/// ```
/// use staff_engine::query::{Query, SortSpec, StaffFilter};
/// use staff_engine::models::StaffStatus;
///
/// let query = Query::new()
///     .search("teacher", ["name", "role"])
///     .filter(StaffFilter::Status(StaffStatus::Active))
///     .sort_by(SortSpec::ascending("name"))
///     .page(0, 10);
///
/// assert_eq!(query.page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query<F> {
    /// Search text; empty matches everything.
    pub search: String,
    /// Fields the search text is matched against.
    pub search_fields: Vec<String>,
    /// Filters that must all pass.
    pub filters: FilterSet<F>,
    /// Optional ordering; input order is kept when absent.
    pub sort: Option<SortSpec>,
    /// Zero-based page to return.
    pub page_index: usize,
    /// Records per page.
    pub page_size: usize,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_fields: Vec::new(),
            filters: FilterSet::default(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F> Query<F> {
    /// Creates a query matching everything, first page, default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query using the configured page size and search fields.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            search_fields: config.search_fields.clone(),
            page_size: config.page_size,
            ..Self::default()
        }
    }

    /// Sets the search text and the fields it is matched against.
    pub fn search<I, S>(mut self, text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = text.into();
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search text, keeping the current search fields.
    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Adds a filter.
    pub fn filter(mut self, filter: F) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the ordering.
    pub fn sort_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page to return.
    pub fn page(mut self, page_index: usize, page_size: usize) -> Self {
        self.page_index = page_index;
        self.page_size = page_size;
        self
    }

    /// Runs the query, returning positions into `records` instead of
    /// references.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error for an unknown search field, an
    /// unknown sort key or a zero page size. Arguments are checked before
    /// any record is examined, so an empty input still reports them.
    pub fn select<T>(&self, records: &[T]) -> EngineResult<Page<usize>>
    where
        T: Queryable,
        F: Predicate<T>,
    {
        for field in &self.search_fields {
            check_search_field::<T>(field)?;
        }
        if let Some(sort) = &self.sort {
            check_sort_key::<T>(&sort.key)?;
        }

        let search_lower = self.search.to_lowercase();
        let mut selected: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                self.filters.matches(*record)
                    && matches_search(*record, &search_lower, &self.search_fields)
            })
            .map(|(index, _)| index)
            .collect();

        if let Some(sort) = &self.sort {
            selected.sort_by(|a, b| {
                compare_records(&records[*a], &records[*b], &sort.key, sort.direction)
            });
        }

        debug!(
            matched = selected.len(),
            of = records.len(),
            page_index = self.page_index,
            "Query selected records"
        );

        paginate(selected, self.page_index, self.page_size)
    }

    /// Runs the query against `records`.
    pub fn run<'a, T>(&self, records: &'a [T]) -> EngineResult<Page<&'a T>>
    where
        T: Queryable,
        F: Predicate<T>,
    {
        Ok(self.select(records)?.map(|index| &records[index]))
    }
}
