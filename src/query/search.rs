//! Case-insensitive substring search.

use crate::error::EngineResult;

use super::field::{Queryable, check_search_field};

/// Returns the records where `query` occurs, ignoring case, in any of the
/// named fields.
///
/// An empty query matches every record. Matching records keep their input
/// order.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownField`] if a field name is not
/// a field of `T`, even when the query is empty.
///
/// # Example
///
/// ```
/// use staff_engine::query::{search, FieldValue, Queryable};
///
/// struct Room(String);
///
/// impl Queryable for Room {
///     const FIELDS: &'static [&'static str] = &["name"];
///     fn field_value(&self, field: &str) -> FieldValue<'_> {
///         match field {
///             "name" => FieldValue::text(&self.0),
///             _ => FieldValue::Missing,
///         }
///     }
/// }
///
/// let rooms = vec![Room("Infant Room".into()), Room("Toddler Room".into())];
/// let found = search(&rooms, "TODDLER", &["name"]).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].0, "Toddler Room");
/// ```
pub fn search<'a, T, I, S>(records: I, query: &str, fields: &[S]) -> EngineResult<Vec<&'a T>>
where
    T: Queryable + 'a,
    I: IntoIterator<Item = &'a T>,
    S: AsRef<str>,
{
    for field in fields {
        check_search_field::<T>(field.as_ref())?;
    }

    let query_lower = query.to_lowercase();
    Ok(records
        .into_iter()
        .filter(|record| matches_search(*record, &query_lower, fields))
        .collect())
}

/// Tests one record against an already-lowercased query.
pub(crate) fn matches_search<T, S>(record: &T, query_lower: &str, fields: &[S]) -> bool
where
    T: Queryable,
    S: AsRef<str>,
{
    query_lower.is_empty()
        || fields
            .iter()
            .any(|field| record.field_value(field.as_ref()).contains_lowercase(query_lower))
}
