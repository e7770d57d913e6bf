//! Field access for queryable records.
//!
//! Records expose their columns through [`Queryable`], returning a
//! [`FieldValue`] per field name. Search, sort and column rendering all go
//! through this one accessor.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The value of one field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text or an enum label. Compares case-sensitively.
    Text(Cow<'a, str>),
    /// A calendar date. Compares chronologically.
    Date(NaiveDate),
    /// A decimal quantity.
    Number(Decimal),
    /// A count of child items.
    Count(usize),
    /// An optional field with no value. Sorts after every present value.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Wraps borrowed text.
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    /// Wraps an optional borrowed text field.
    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::text)
    }

    /// Returns the value as display text, or `None` when missing.
    ///
    /// Dates render as ISO `YYYY-MM-DD`.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(text) => Some(Cow::Borrowed(text.as_ref())),
            FieldValue::Date(date) => Some(Cow::Owned(date.format("%Y-%m-%d").to_string())),
            FieldValue::Number(number) => Some(Cow::Owned(number.normalize().to_string())),
            FieldValue::Count(count) => Some(Cow::Owned(count.to_string())),
            FieldValue::Missing => None,
        }
    }

    /// Returns true if the value's text contains `needle_lower`, ignoring
    /// case. `needle_lower` must already be lowercased.
    pub(crate) fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.to_text()
            .is_some_and(|text| text.to_lowercase().contains(needle_lower))
    }
}

/// Compares two field values in ascending order.
///
/// Present values sort before [`FieldValue::Missing`]. Values of different
/// kinds compare equal, which leaves them in their original relative order
/// under a stable sort.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
        (FieldValue::Count(a), FieldValue::Count(b)) => a.cmp(b),

        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Greater,
        (_, FieldValue::Missing) => Ordering::Less,

        _ => Ordering::Equal,
    }
}

/// A record type the query engine can search, sort and render.
///
/// # Example
///
/// ```
/// use staff_engine::query::{FieldValue, Queryable};
///
/// struct Room {
///     name: String,
///     capacity: usize,
/// }
///
/// impl Queryable for Room {
///     const FIELDS: &'static [&'static str] = &["name", "capacity"];
///
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "name" => FieldValue::text(&self.name),
///             "capacity" => FieldValue::Count(self.capacity),
///             _ => FieldValue::Missing,
///         }
///     }
/// }
///
/// let room = Room { name: "Infant Room".to_string(), capacity: 8 };
/// assert_eq!(room.field_value("capacity"), FieldValue::Count(8));
/// ```
pub trait Queryable {
    /// Every field name `field_value` answers for.
    const FIELDS: &'static [&'static str];

    /// Returns the value of a field. Names outside [`Queryable::FIELDS`]
    /// return [`FieldValue::Missing`].
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// Checks that `field` names a field of `T`, reporting it as an unknown
/// search field otherwise.
pub(crate) fn check_search_field<T: Queryable>(field: &str) -> EngineResult<()> {
    if T::FIELDS.contains(&field) {
        Ok(())
    } else {
        Err(EngineError::UnknownField {
            field: field.to_string(),
        })
    }
}

/// Checks that `key` names a field of `T`, reporting it as an unknown sort
/// key otherwise.
pub(crate) fn check_sort_key<T: Queryable>(key: &str) -> EngineResult<()> {
    if T::FIELDS.contains(&key) {
        Ok(())
    } else {
        Err(EngineError::UnknownSortKey {
            key: key.to_string(),
        })
    }
}
