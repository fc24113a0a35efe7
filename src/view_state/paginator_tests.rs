//! Tests for the paginator model.

use super::*;

fn model(first: usize, rows: usize, total: usize) -> PaginatorModel {
    PaginatorModel::new(PageState::new(first, rows), total)
}

// ===== Page arithmetic =====

#[test]
fn page_count_rounds_up() {
    assert_eq!(model(0, 3, 10).page_count(), 4);
    assert_eq!(model(0, 5, 10).page_count(), 2);
    assert_eq!(model(0, 5, 1).page_count(), 1);
}

#[test]
fn page_count_is_zero_without_records() {
    assert_eq!(model(0, 5, 0).page_count(), 0);
    assert!(model(0, 5, 0).is_empty());
}

#[test]
fn unbounded_rows_is_single_page() {
    let pager = model(0, 0, 42);
    assert_eq!(pager.page_count(), 1);
    assert_eq!(pager.current_page(), 0);
}

#[test]
fn current_page_from_first() {
    assert_eq!(model(9, 3, 10).current_page(), 3);
    assert_eq!(model(4, 3, 10).current_page(), 1);
}

// ===== Links =====

#[test]
fn first_page_disables_backward_links() {
    let pager = model(0, 3, 10);
    assert!(pager.first_link().disabled);
    assert!(pager.prev_link().disabled);
    assert!(!pager.next_link().disabled);
    assert!(!pager.last_link().disabled);
}

#[test]
fn last_page_disables_forward_links() {
    let pager = model(9, 3, 10);
    assert!(!pager.first_link().disabled);
    assert!(!pager.prev_link().disabled);
    assert!(pager.next_link().disabled);
    assert!(pager.last_link().disabled);
}

#[test]
fn empty_collection_disables_every_link() {
    let pager = model(0, 3, 0);
    for link in [
        pager.first_link(),
        pager.prev_link(),
        pager.next_link(),
        pager.last_link(),
    ] {
        assert!(link.disabled, "{:?} should be disabled", link.kind);
        assert_eq!(link.on_click(), None);
    }
}

#[test]
fn link_targets_move_by_whole_pages() {
    let pager = model(3, 3, 10);
    assert_eq!(pager.first_link().target, PageEvent::new(0, 3));
    assert_eq!(pager.prev_link().target, PageEvent::new(0, 3));
    assert_eq!(pager.next_link().target, PageEvent::new(6, 3));
    assert_eq!(pager.last_link().target, PageEvent::new(9, 3));
}

#[test]
fn page_event_clamps_to_last_page() {
    assert_eq!(model(0, 4, 10).page_event(99), PageEvent::new(8, 4));
}

// ===== Page links =====

#[test]
fn page_links_centre_on_current_page() {
    assert_eq!(model(15, 3, 60).page_links(5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn page_links_clamp_at_start() {
    assert_eq!(model(0, 3, 60).page_links(5), vec![0, 1, 2, 3, 4]);
    assert_eq!(model(3, 3, 60).page_links(5), vec![0, 1, 2, 3, 4]);
}

#[test]
fn page_links_clamp_at_end() {
    assert_eq!(model(57, 3, 60).page_links(5), vec![15, 16, 17, 18, 19]);
}

#[test]
fn page_links_never_exceed_page_count() {
    assert_eq!(model(0, 5, 12).page_links(5), vec![0, 1, 2]);
    assert!(model(0, 5, 0).page_links(5).is_empty());
}

#[test]
fn page_links_with_even_size() {
    assert_eq!(model(12, 3, 60).page_links(4), vec![2, 3, 4, 5]);
}

// ===== Rows per page =====

#[test]
fn change_rows_keeps_first_record_on_screen() {
    let pager = model(7, 7, 50);
    let event = pager.change_rows(5);
    assert_eq!(event, PageEvent::new(5, 5));
}

#[test]
fn change_rows_to_zero_means_no_limit() {
    let event = model(7, 7, 50).change_rows(0);
    assert_eq!(event.first, 0);
    assert_eq!(event.rows, None);
}

// ===== Report =====

#[test]
fn default_report_template() {
    assert_eq!(model(3, 3, 10).report(DEFAULT_REPORT_TEMPLATE), "(2 of 4)");
}

#[test]
fn report_expands_every_placeholder() {
    let text = model(9, 3, 10)
        .report("{first}-{last} of {totalRecords}, {rows} per page, page {currentPage}/{totalPages}");
    assert_eq!(text, "10-10 of 10, 3 per page, page 4/4");
}

#[test]
fn report_for_empty_collection() {
    assert_eq!(model(0, 3, 0).report(DEFAULT_REPORT_TEMPLATE), "(0 of 0)");
}

// ===== Visibility =====

#[test]
fn always_show_keeps_single_page_pager() {
    assert!(model(0, 10, 3).is_visible(true));
    assert!(!model(0, 10, 3).is_visible(false));
    assert!(model(0, 2, 3).is_visible(false));
}

// ===== Link rendering =====

#[test]
fn class_name_marks_disabled_links() {
    let pager = model(0, 3, 10);
    assert_eq!(
        pager.first_link().class_name(),
        "dataview-paginator-first dataview-paginator-element dataview-link dataview-disabled"
    );
    assert_eq!(
        pager.next_link().class_name(),
        "dataview-paginator-next dataview-paginator-element dataview-link"
    );
}

#[test]
fn render_without_template_returns_default_element() {
    let link = model(0, 3, 10).next_link();
    assert_eq!(link.render("›".to_string(), None), "›");
}

#[test]
fn render_with_template_receives_options() {
    let link = model(3, 3, 10).prev_link();
    let template: PageLinkTemplate<String> = Box::new(|options| {
        format!(
            "{}|{}|{}|{:?}",
            options.element, options.icon_class_name, options.disabled, options.on_click
        )
    });
    let rendered = link.render("‹".to_string(), Some(&template));
    assert_eq!(
        rendered,
        format!(
            "‹|dataview-paginator-icon angle-left|false|{:?}",
            Some(PageEvent::new(0, 3))
        )
    );
}
