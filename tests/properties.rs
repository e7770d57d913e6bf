//! Property-based tests for the staff engine using proptest.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use staff_engine::derivation::derive_certification_status;
use staff_engine::models::CertificationStatus;
use staff_engine::query::{FieldValue, Queryable, SortDirection, filter, paginate, search, sort};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    name: String,
    room: Option<String>,
    count: usize,
}

impl Queryable for TestItem {
    const FIELDS: &'static [&'static str] = &["name", "room", "count"];

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::text(&self.name),
            "room" => FieldValue::optional_text(self.room.as_deref()),
            "count" => FieldValue::Count(self.count),
            _ => FieldValue::Missing,
        }
    }
}

fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    ("[a-zA-Z]{1,8}", prop::option::of("[A-C][a-z]{0,4}"), 0usize..20).prop_map(
        |(name, room, count)| TestItem { name, room, count },
    )
}

fn sort_key_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["name", "room", "count"])
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn make_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Orders statuses from worst to best so monotonicity can be checked.
fn rank(status: CertificationStatus) -> u8 {
    match status {
        CertificationStatus::Expired => 0,
        CertificationStatus::ExpiringSoon => 1,
        CertificationStatus::Active => 2,
        CertificationStatus::Unknown => u8::MAX,
    }
}

// ============================================================================
// Status derivation
// ============================================================================

proptest! {
    /// Every expiration maps to exactly one of the three statuses, in the
    /// band its offset from now falls into.
    #[test]
    fn derivation_partitions_expirations(
        offset_secs in -400_000_000i64..400_000_000,
        window_days in 0i64..400,
    ) {
        let now = make_now();
        let window_secs = window_days * 86_400;
        let expiration = now + Duration::seconds(offset_secs);
        let status = derive_certification_status(expiration, now, window_days);

        let expected = if offset_secs <= 0 {
            CertificationStatus::Expired
        } else if offset_secs <= window_secs {
            CertificationStatus::ExpiringSoon
        } else {
            CertificationStatus::Active
        };
        prop_assert_eq!(status, expected);
    }

    /// A later expiration never yields a worse status.
    #[test]
    fn derivation_is_monotonic(
        a in -400_000_000i64..400_000_000,
        b in -400_000_000i64..400_000_000,
        window_days in 0i64..400,
    ) {
        let now = make_now();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

        let first = derive_certification_status(now + Duration::seconds(earlier), now, window_days);
        let second = derive_certification_status(now + Duration::seconds(later), now, window_days);

        prop_assert!(rank(first) <= rank(second));
    }
}

// ============================================================================
// Search, filter, sort, paginate
// ============================================================================

proptest! {
    /// An empty search returns every record in input order.
    #[test]
    fn empty_search_is_identity(items in prop::collection::vec(test_item_strategy(), 0..50)) {
        let results = search(&items, "", &["name", "room"]).unwrap();
        let expected: Vec<&TestItem> = items.iter().collect();
        prop_assert_eq!(results, expected);
    }

    /// Search results are an order-preserving subset of the input.
    #[test]
    fn search_preserves_order(
        items in prop::collection::vec(test_item_strategy(), 0..50),
        query in "[a-z]{1,2}",
    ) {
        let results = search(&items, &query, &["name"]).unwrap();
        let expected: Vec<&TestItem> = items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect();
        prop_assert_eq!(results, expected);
    }

    /// Filtering never grows the collection.
    #[test]
    fn filter_never_grows_collection(
        items in prop::collection::vec(test_item_strategy(), 0..50),
        threshold in 0usize..20,
    ) {
        let results = filter(&items, |item: &TestItem| item.count > threshold);
        prop_assert!(results.len() <= items.len());
        prop_assert!(results.iter().all(|item| item.count > threshold));
    }

    /// Concatenating every page reproduces the input.
    #[test]
    fn pages_concatenate_to_input(
        items in prop::collection::vec(any::<u16>(), 0..100),
        page_size in 1usize..15,
    ) {
        let first = paginate(items.clone(), 0, page_size).unwrap();
        let mut collected = Vec::new();
        for page_index in 0..first.page_count {
            let page = paginate(items.clone(), page_index, page_size).unwrap();
            prop_assert!(page.items.len() <= page_size);
            prop_assert_eq!(page.total, items.len());
            collected.extend(page.items);
        }
        prop_assert_eq!(collected, items);
    }

    /// Pages past the end are empty but still report the totals.
    #[test]
    fn out_of_range_page_is_empty(
        items in prop::collection::vec(any::<u16>(), 0..100),
        page_size in 1usize..15,
        extra in 0usize..5,
    ) {
        let page_count = items.len().div_ceil(page_size);
        let page = paginate(items.clone(), page_count + extra, page_size).unwrap();
        prop_assert!(page.items.is_empty());
        prop_assert_eq!(page.total, items.len());
        prop_assert_eq!(page.page_count, page_count);
    }

    /// Sorting an already sorted sequence by the same key changes nothing.
    #[test]
    fn sort_is_idempotent(
        items in prop::collection::vec(test_item_strategy(), 0..50),
        key in sort_key_strategy(),
        direction in direction_strategy(),
    ) {
        let once = sort(&items, key, direction).unwrap();
        let twice = sort(once.iter().copied(), key, direction).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Records without a room always sort after those with one.
    #[test]
    fn missing_values_sort_last(
        items in prop::collection::vec(test_item_strategy(), 0..50),
        direction in direction_strategy(),
    ) {
        let sorted = sort(&items, "room", direction).unwrap();
        let first_missing = sorted
            .iter()
            .position(|item| item.room.is_none())
            .unwrap_or(sorted.len());
        prop_assert!(sorted[first_missing..].iter().all(|item| item.room.is_none()));
    }
}
