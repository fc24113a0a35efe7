//! Page navigation keyboard action handler.
//!
//! Translates pager key actions into paginator link activations on a
//! [`DataView`], so keyboard navigation goes through the same page-change path
//! (and the same controlled/uncontrolled routing) as any other pager.

use crate::model::{KeyAction, Record};
use crate::state::data_view::DataView;

/// Apply a page navigation action.
///
/// Returns `false` for actions that are not page navigation, or when the
/// view has no paginator.
pub fn handle_page_action<R: Record, T>(view: &mut DataView<R, T>, action: KeyAction) -> bool {
    if !action.is_page_navigation() || !view.has_paginator() {
        return false;
    }

    let pager = view.paginator();
    match action {
        KeyAction::FirstPage => view.activate(&pager.first_link()),
        KeyAction::PrevPage => view.activate(&pager.prev_link()),
        KeyAction::NextPage => view.activate(&pager.next_link()),
        KeyAction::LastPage => view.activate(&pager.last_link()),
        KeyAction::MoreRows | KeyAction::FewerRows => {
            let current = view.effective_page().rows_or_zero();
            if let Some(rows) = adjacent_rows_option(view.rows_per_page_options(), current, action) {
                view.change_rows(rows);
            }
        }
        _ => {}
    }
    true
}

/// The rows-per-page option next to `current` in the direction of `action`.
///
/// An unlimited page size (`0`) counts as larger than every option.
fn adjacent_rows_option(options: &[usize], current: usize, action: KeyAction) -> Option<usize> {
    let current = if current == 0 { usize::MAX } else { current };
    let candidates = options.iter().copied().filter(|&rows| rows > 0);
    match action {
        KeyAction::MoreRows => candidates.filter(|&rows| rows > current).min(),
        KeyAction::FewerRows => candidates.filter(|&rows| rows < current).max(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageEvent, PageState};
    use crate::state::data_view::DataViewProps;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn view(n: usize, first: usize, rows: usize) -> DataView<Value, String> {
        let props = DataViewProps::new()
            .with_value((0..n).map(|i| json!({"id": i})).collect::<Vec<_>>())
            .with_item_template(|record: &Value, _| record["id"].to_string())
            .with_paginator(true)
            .with_first(first)
            .with_rows(rows)
            .with_rows_per_page_options(vec![5, 10, 20]);
        DataView::new(props).unwrap()
    }

    #[test]
    fn next_and_prev_move_by_one_page() {
        let mut view = view(30, 0, 10);
        assert!(handle_page_action(&mut view, KeyAction::NextPage));
        assert_eq!(view.effective_page(), PageState::new(10, 10));
        handle_page_action(&mut view, KeyAction::PrevPage);
        assert_eq!(view.effective_page(), PageState::new(0, 10));
    }

    #[test]
    fn next_on_last_page_stays() {
        let mut view = view(30, 20, 10);
        handle_page_action(&mut view, KeyAction::NextPage);
        assert_eq!(view.effective_page(), PageState::new(20, 10));
    }

    #[test]
    fn first_and_last_jump() {
        let mut view = view(33, 10, 10);
        handle_page_action(&mut view, KeyAction::LastPage);
        assert_eq!(view.effective_page(), PageState::new(30, 10));
        handle_page_action(&mut view, KeyAction::FirstPage);
        assert_eq!(view.effective_page(), PageState::new(0, 10));
    }

    #[test]
    fn more_rows_picks_next_larger_option() {
        let mut view = view(100, 25, 10);
        handle_page_action(&mut view, KeyAction::MoreRows);
        assert_eq!(view.effective_page(), PageState::new(20, 20));
        handle_page_action(&mut view, KeyAction::MoreRows);
        assert_eq!(view.effective_page(), PageState::new(20, 20));
    }

    #[test]
    fn fewer_rows_picks_next_smaller_option() {
        let mut view = view(100, 20, 20);
        handle_page_action(&mut view, KeyAction::FewerRows);
        assert_eq!(view.effective_page(), PageState::new(20, 10));
    }

    #[test]
    fn fewer_rows_from_unlimited_picks_largest_option() {
        assert_eq!(adjacent_rows_option(&[5, 10, 20], 0, KeyAction::FewerRows), Some(20));
        assert_eq!(adjacent_rows_option(&[5, 10, 20], 0, KeyAction::MoreRows), None);
    }

    #[test]
    fn non_navigation_actions_are_ignored() {
        let mut view = view(30, 0, 10);
        assert!(!handle_page_action(&mut view, KeyAction::ToggleLayout));
        assert!(!handle_page_action(&mut view, KeyAction::Quit));
    }

    #[test]
    fn without_paginator_nothing_moves() {
        let props = DataViewProps::new()
            .with_value(vec![json!(1), json!(2)])
            .with_item_template(|record: &Value, _| record.to_string());
        let mut view: DataView<Value, String> = DataView::new(props).unwrap();
        assert!(!handle_page_action(&mut view, KeyAction::NextPage));
    }

    #[test]
    fn controlled_view_forwards_keyboard_navigation() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let props = DataViewProps::new()
            .with_value((0..30).map(|i| json!({"id": i})).collect::<Vec<_>>())
            .with_item_template(|record: &Value, _| record["id"].to_string())
            .with_paginator(true)
            .with_rows(10)
            .with_on_page(move |event| sink.borrow_mut().push(event));
        let mut view: DataView<Value, String> = DataView::new(props).unwrap();

        handle_page_action(&mut view, KeyAction::NextPage);

        assert_eq!(*received.borrow(), vec![PageEvent::new(10, 10)]);
        assert_eq!(view.effective_page(), PageState::new(0, 10));
    }
}
