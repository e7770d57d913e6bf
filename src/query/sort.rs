//! Stable sorting by a named field.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::field::{FieldValue, Queryable, check_sort_key, compare_values};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub key: String,
    /// The sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates an ascending sort on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Compares two records on `key` in the given direction.
///
/// Missing values sort last in both directions.
pub(crate) fn compare_records<T: Queryable>(
    a: &T,
    b: &T,
    key: &str,
    direction: SortDirection,
) -> Ordering {
    let a = a.field_value(key);
    let b = b.field_value(key);

    match (&a, &b) {
        (FieldValue::Missing, _) | (_, FieldValue::Missing) => compare_values(&a, &b),
        _ => match direction {
            SortDirection::Ascending => compare_values(&a, &b),
            SortDirection::Descending => compare_values(&a, &b).reverse(),
        },
    }
}

/// Returns the records reordered by `key`.
///
/// The sort is stable: records with equal keys keep their input order, in
/// either direction. Text compares case-sensitively, dates chronologically.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownSortKey`] if `key` is not a
/// field of `T`.
pub fn sort<'a, T, I>(records: I, key: &str, direction: SortDirection) -> EngineResult<Vec<&'a T>>
where
    T: Queryable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    check_sort_key::<T>(key)?;

    let mut sorted: Vec<&'a T> = records.into_iter().collect();
    sorted.sort_by(|a, b| compare_records(*a, *b, key, direction));
    Ok(sorted)
}
