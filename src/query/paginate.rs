//! Page slicing.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One page of a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Number of records in the whole result set.
    pub total: usize,
    /// Number of pages the whole result set spans.
    pub page_count: usize,
    /// Zero-based index of this page.
    pub page_index: usize,
    /// Maximum records per page.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Maps the page's items, keeping its position and totals.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page_count: self.page_count,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    /// Returns true if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// Returns true if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0 && self.page_count > 0
    }
}

/// Slices out one page of `records`.
///
/// `page_index` is zero-based. A page past the end yields no items, with
/// `total` and `page_count` still describing the whole set.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPageSize`] if `page_size` is zero.
///
/// # Example
///
/// ```
/// use staff_engine::query::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let page = paginate(items, 2, 10).unwrap();
///
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total, 25);
/// assert_eq!(page.page_count, 3);
/// ```
pub fn paginate<T, I>(records: I, page_index: usize, page_size: usize) -> EngineResult<Page<T>>
where
    I: IntoIterator<Item = T>,
{
    if page_size == 0 {
        return Err(EngineError::InvalidPageSize { page_size });
    }

    let records: Vec<T> = records.into_iter().collect();
    let total = records.len();
    let page_count = total.div_ceil(page_size);

    let items = match page_index.checked_mul(page_size) {
        Some(start) if start < total => records.into_iter().skip(start).take(page_size).collect(),
        _ => Vec::new(),
    };

    Ok(Page {
        items,
        total,
        page_count,
        page_index,
        page_size,
    })
}
