//! Tests for the view controller.

use super::*;
use crate::model::FieldPath;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

// ===== Test Helpers =====

fn records(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({"id": i, "name": format!("r{i}")})).collect()
}

/// Item template rendering `"<layout>:<id>"`.
fn props(n: usize) -> DataViewProps<Value, String> {
    DataViewProps::new()
        .with_value(records(n))
        .with_item_template(|record: &Value, layout| format!("{layout}:{}", record["id"]))
}

fn contents(pass: &RenderPass<'_, String>) -> Vec<String> {
    pass.items().iter().map(|item| item.content.clone()).collect()
}

fn kinds(pass: &RenderPass<'_, String>) -> Vec<&'static str> {
    pass.sections
        .iter()
        .map(|section| match section {
            Section::LoadingOverlay => "loading",
            Section::Header(_) => "header",
            Section::Paginator(p) if p.placement == PaginatorPlacement::Top => "top",
            Section::Paginator(_) => "bottom",
            Section::Items(_) => "items",
            Section::Empty(_) => "empty",
            Section::Footer(_) => "footer",
        })
        .collect()
}

// ===== Construction =====

#[test]
fn missing_item_template_fails_fast() {
    let props: DataViewProps<Value, String> = DataViewProps::new().with_value(records(3));
    let err = DataView::new(props).unwrap_err();
    assert_eq!(err, DataViewError::MissingItemTemplate);
}

#[test]
fn uncontrolled_state_seeded_from_props() {
    let view = DataView::new(props(10).with_first(3).with_rows(3)).unwrap();
    assert!(!view.is_controlled());
    assert_eq!(view.effective_page(), PageState::new(3, 3));
}

#[test]
fn rows_default_to_unlimited() {
    let view = DataView::new(props(10)).unwrap();
    assert_eq!(view.effective_page(), PageState::unbounded(0));
}

// ===== Uncontrolled mode =====

#[test]
fn page_change_updates_internal_state() {
    let mut view = DataView::new(props(10).with_paginator(true).with_rows(3)).unwrap();
    view.page_change(PageEvent::new(6, 3));
    assert_eq!(view.effective_page(), PageState::new(6, 3));
    assert_eq!(contents(&view.render()), vec!["list:6", "list:7", "list:8"]);
}

#[test]
fn set_page_is_rejected_when_uncontrolled() {
    let mut view = DataView::new(props(10)).unwrap();
    let err = view.set_page(PageState::new(5, 5)).unwrap_err();
    assert_eq!(err, DataViewError::PageOwnedInternally);
}

#[test]
fn activating_disabled_link_is_a_no_op() {
    let mut view = DataView::new(props(10).with_paginator(true).with_rows(5)).unwrap();
    let prev = view.paginator().prev_link();
    assert!(prev.disabled);
    view.activate(&prev);
    assert_eq!(view.effective_page(), PageState::new(0, 5));

    let next = view.paginator().next_link();
    view.activate(&next);
    assert_eq!(view.effective_page(), PageState::new(5, 5));
}

#[test]
fn change_rows_realigns_first() {
    let mut view = DataView::new(props(50).with_paginator(true).with_first(14).with_rows(7)).unwrap();
    view.change_rows(10);
    assert_eq!(view.effective_page(), PageState::new(10, 10));
}

// ===== Controlled mode =====

#[test]
fn controlled_mode_forwards_events_verbatim() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let mut view = DataView::new(
        props(20)
            .with_paginator(true)
            .with_rows(5)
            .with_on_page(move |event| sink.borrow_mut().push(event)),
    )
    .unwrap();

    view.page_change(PageEvent::new(5, 5));

    assert_eq!(*received.borrow(), vec![PageEvent::new(5, 5)]);
    assert!(view.is_controlled());
    assert_eq!(view.effective_page(), PageState::new(0, 5));
    assert_eq!(contents(&view.render())[0], "list:0");
}

#[test]
fn controlled_mode_reflects_host_page() {
    let mut view = DataView::new(
        props(20)
            .with_paginator(true)
            .with_rows(5)
            .with_on_page(|_| {}),
    )
    .unwrap();

    view.set_page(PageState::new(10, 5)).unwrap();

    assert_eq!(view.effective_page(), PageState::new(10, 5));
    assert_eq!(contents(&view.render())[0], "list:10");
}

// ===== Render order =====

#[test]
fn sections_follow_fixed_order() {
    let mut view = DataView::new(
        props(10)
            .with_paginator(true)
            .with_rows(3)
            .with_paginator_position(PaginatorPosition::Both)
            .with_loading(true)
            .with_header("head".to_string())
            .with_footer("foot".to_string()),
    )
    .unwrap();
    assert_eq!(
        kinds(&view.render()),
        vec!["loading", "header", "top", "items", "bottom", "footer"]
    );
}

#[test]
fn paginator_positions_follow_literal_predicates() {
    let cases = [
        (PaginatorPosition::Top, vec!["top", "items"]),
        (PaginatorPosition::Bottom, vec!["items", "bottom"]),
        (PaginatorPosition::Both, vec!["top", "items", "bottom"]),
    ];
    for (position, expected) in cases {
        let mut view = DataView::new(
            props(10)
                .with_paginator(true)
                .with_rows(3)
                .with_paginator_position(position),
        )
        .unwrap();
        assert_eq!(kinds(&view.render()), expected, "{position:?}");
    }
}

#[test]
fn no_paginator_section_without_pagination() {
    let mut view = DataView::new(props(10).with_rows(3)).unwrap();
    assert_eq!(kinds(&view.render()), vec!["items"]);
    assert_eq!(view.render().items().len(), 10);
}

#[test]
fn single_page_hides_pager_unless_always_shown() {
    let mut view = DataView::new(
        props(3)
            .with_paginator(true)
            .with_rows(5)
            .with_always_show_paginator(false),
    )
    .unwrap();
    assert_eq!(kinds(&view.render()), vec!["items"]);

    let mut view = DataView::new(props(3).with_paginator(true).with_rows(5)).unwrap();
    assert_eq!(kinds(&view.render()), vec!["items", "bottom"]);
}

// ===== Content =====

#[test]
fn item_template_receives_layout() {
    let mut view = DataView::new(props(2).with_layout(Layout::Grid)).unwrap();
    assert_eq!(contents(&view.render()), vec!["grid:0", "grid:1"]);

    view.set_layout(Layout::List);
    let pass = view.render();
    assert_eq!(pass.layout, Layout::List);
    assert_eq!(contents(&pass), vec!["list:0", "list:1"]);
}

#[test]
fn empty_collection_shows_default_message() {
    let mut view = DataView::new(props(0)).unwrap();
    let pass = view.render();
    assert_eq!(pass.empty_message(), Some(DEFAULT_EMPTY_MESSAGE));
    assert!(pass.items().is_empty());
}

#[test]
fn absent_collection_shows_custom_message() {
    let props: DataViewProps<Value, String> = DataViewProps::new()
        .with_item_template(|_, _| String::new())
        .with_empty_message("Nothing here");
    let mut view = DataView::new(props).unwrap();
    assert_eq!(view.render().empty_message(), Some("Nothing here"));
}

#[test]
fn loading_suppresses_empty_message() {
    let mut view = DataView::new(props(0).with_loading(true)).unwrap();
    assert_eq!(kinds(&view.render()), vec!["loading", "items"]);
    assert_eq!(view.render().empty_message(), None);
}

#[test]
fn first_beyond_total_shows_empty_state() {
    let mut view = DataView::new(props(10).with_paginator(true).with_first(40).with_rows(5)).unwrap();
    assert_eq!(view.render().empty_message(), Some(DEFAULT_EMPTY_MESSAGE));
}

#[test]
fn sort_change_reorders_items() {
    let mut view = DataView::new(props(3)).unwrap();
    view.set_sort(SortSpec::new(
        FieldPath::parse("id").unwrap(),
        SortOrder::Descending,
    ));
    assert_eq!(contents(&view.render()), vec!["list:2", "list:1", "list:0"]);
}

#[test]
fn data_key_drives_render_keys() {
    let mut view = DataView::new(props(3).with_data_key(FieldPath::parse("name").unwrap())).unwrap();
    let keys: Vec<_> = view.render().items().iter().map(|i| i.key.clone()).collect();
    assert_eq!(
        keys,
        vec![
            RenderKey::Data("r0".into()),
            RenderKey::Data("r1".into()),
            RenderKey::Data("r2".into()),
        ]
    );
}

// ===== Paginator sections =====

#[test]
fn paginator_section_uses_effective_page_and_total_override() {
    let mut view = DataView::new(
        props(5)
            .with_paginator(true)
            .with_lazy(true)
            .with_rows(5)
            .with_first(10)
            .with_total_records(100),
    )
    .unwrap();
    let pass = view.render();
    let pager = pass.paginator(PaginatorPlacement::Bottom).unwrap();
    assert_eq!(pager.model.page_count(), 20);
    assert_eq!(pager.model.current_page(), 2);
    assert_eq!(pager.report(), "(3 of 20)");
    assert_eq!(pager.page_links(), vec![0, 1, 2, 3, 4]);
    assert_eq!(contents(&pass).len(), 5);
}

// ===== Memoization =====

#[test]
fn repeated_renders_hit_the_cache() {
    let mut view = DataView::new(props(10).with_paginator(true).with_rows(3)).unwrap();
    let _ = view.render();
    let _ = view.render();
    assert_eq!(view.cache_stats(), (1, 1));

    view.page_change(PageEvent::new(3, 3));
    let _ = view.render();
    assert_eq!(view.cache_stats(), (1, 2));
}

#[test]
fn replacing_value_invalidates_cache() {
    let mut view = DataView::new(props(4)).unwrap();
    let _ = view.render();
    view.set_value(Some(Dataset::new(records(2))));
    assert_eq!(view.render().items().len(), 2);
    assert_eq!(view.cache_stats(), (0, 2));
}
