//! Property-based tests for windowing invariants.
//!
//! Tests validate:
//! 1. Without a paginator the whole (sorted) collection is visible
//! 2. Paginated windows hold `min(rows, total - first)` records
//! 3. Lazy windows take the head of the supplied page, ignoring `first`
//! 4. Reversing the sort order reverses the result; records are never mutated
//! 5. One page of `rows = total` equals the unpaginated collection

use dataview::model::{FieldPath, PageState, SortOrder, SortSpec, WindowMode};
use dataview::view_state::{compute_visible, WindowRequest};
use proptest::prelude::*;
use serde_json::{json, Value};

// ===== Strategies =====

/// Records with distinct `score` values, ids in insertion order.
fn distinct_records() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::hash_set(-1_000i64..1_000, 0..40).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(id, score)| json!({"id": id, "score": score}))
            .collect()
    })
}

fn records(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any::<i16>(), len).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(id, score)| json!({"id": id, "score": score}))
            .collect()
    })
}

fn score_sort(order: SortOrder) -> SortSpec {
    SortSpec::new(FieldPath::parse("score").unwrap(), order)
}

fn visible_ids(records: &[Value], request: &WindowRequest) -> Vec<Value> {
    compute_visible(records, request)
        .records()
        .map(|record| record["id"].clone())
        .collect()
}

// ===== Property 1: No paginator shows everything =====

proptest! {
    #[test]
    fn unpaginated_shows_full_collection(records in records(1..40), first in 0usize..60, rows in 0usize..10) {
        let request = WindowRequest {
            page: PageState::new(first, rows),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let window = compute_visible(&records, &request);
        let visible: Vec<&Value> = window.records().collect();
        let expected: Vec<&Value> = records.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn unpaginated_sorted_shows_every_record_once(records in distinct_records()) {
        let request = WindowRequest {
            sort: score_sort(SortOrder::Ascending),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let mut ids = visible_ids(&records, &request);
        prop_assert_eq!(ids.len(), records.len());
        ids.sort_by_key(|id| id.as_u64());
        let expected: Vec<Value> = (0..records.len()).map(|id| json!(id)).collect();
        prop_assert_eq!(ids, expected);
    }
}

// ===== Property 2: Paginated window length =====

proptest! {
    #[test]
    fn paginated_length_is_bounded_by_rows_and_remaining(
        records in records(0..40),
        first in 0usize..60,
        rows in 1usize..15,
    ) {
        let request = WindowRequest {
            page: PageState::new(first, rows),
            mode: WindowMode::paginated(),
            ..WindowRequest::default()
        };
        let total = records.len();
        let expected = if first < total { rows.min(total - first) } else { 0 };
        prop_assert_eq!(compute_visible(&records, &request).visible.len(), expected);
    }

    #[test]
    fn paginated_window_is_contiguous_slice(
        records in records(1..40),
        first in 0usize..40,
        rows in 1usize..15,
    ) {
        let request = WindowRequest {
            page: PageState::new(first, rows),
            mode: WindowMode::paginated(),
            ..WindowRequest::default()
        };
        let window = compute_visible(&records, &request);
        for (offset, visible) in window.visible.iter().enumerate() {
            prop_assert_eq!(visible.position, first + offset);
            prop_assert_eq!(visible.record, &records[first + offset]);
        }
    }

    #[test]
    fn missing_rows_shows_remaining_collection(records in records(0..40), first in 0usize..60) {
        let request = WindowRequest {
            page: PageState::unbounded(first),
            mode: WindowMode::paginated(),
            ..WindowRequest::default()
        };
        let expected = records.len().saturating_sub(first);
        prop_assert_eq!(compute_visible(&records, &request).visible.len(), expected);
    }
}

// ===== Property 3: Lazy windows =====

proptest! {
    #[test]
    fn lazy_takes_head_of_supplied_page(
        records in records(0..30),
        first in 0usize..500,
        rows in 1usize..15,
        total_records in 0usize..500,
    ) {
        let request = WindowRequest {
            page: PageState::new(first, rows),
            mode: WindowMode::lazy(),
            total_records: Some(total_records.max(records.len())),
            ..WindowRequest::default()
        };
        let window = compute_visible(&records, &request);
        let visible: Vec<&Value> = window.records().collect();
        let expected: Vec<&Value> = records.iter().take(rows.min(records.len())).collect();
        prop_assert_eq!(visible, expected);
    }
}

// ===== Property 4: Sorting =====

proptest! {
    #[test]
    fn reversing_order_reverses_result(records in distinct_records()) {
        let ascending = WindowRequest {
            sort: score_sort(SortOrder::Ascending),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let descending = WindowRequest {
            sort: score_sort(SortOrder::Descending),
            ..ascending.clone()
        };

        let mut forward = visible_ids(&records, &ascending);
        forward.reverse();
        prop_assert_eq!(forward, visible_ids(&records, &descending));
    }

    #[test]
    fn ascending_sort_is_ordered(records in records(0..40)) {
        let request = WindowRequest {
            sort: score_sort(SortOrder::Ascending),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let scores: Vec<i64> = compute_visible(&records, &request)
            .records()
            .filter_map(|record| record["score"].as_i64())
            .collect();
        prop_assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn sorting_never_mutates_the_collection(records in records(0..40), descending in any::<bool>()) {
        let before = records.clone();
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let request = WindowRequest {
            sort: score_sort(order),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let _ = compute_visible(&records, &request);
        prop_assert_eq!(records, before);
    }
}

// ===== Property 5: Round trip =====

proptest! {
    #[test]
    fn full_page_equals_unpaginated(records in records(1..40), sorted in any::<bool>()) {
        let sort = if sorted { score_sort(SortOrder::Ascending) } else { SortSpec::none() };
        let unpaginated = WindowRequest {
            sort: sort.clone(),
            mode: WindowMode::all(),
            ..WindowRequest::default()
        };
        let one_page = WindowRequest {
            page: PageState::new(0, records.len()),
            sort,
            mode: WindowMode::paginated(),
            ..WindowRequest::default()
        };
        prop_assert_eq!(
            visible_ids(&records, &unpaginated),
            visible_ids(&records, &one_page)
        );
    }
}
