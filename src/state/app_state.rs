//! Application state and transitions.
//!
//! AppState is the root state of the terminal host: the data view, the
//! layout toggle bound to it, and the quit flag. Key events are dispatched
//! here; rendering reads from it.

use crate::config::KeyBindings;
use crate::model::{InputEvent, KeyAction, Record, SortSpec};
use crate::state::data_view::DataView;
use crate::state::layout_options::{LayoutChangeEvent, LayoutOptions};
use crate::state::page_handler::handle_page_action;
use crossterm::event::KeyEvent;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

// ===== AppState =====

/// Application state for the terminal host.
///
/// # State Transitions
///
/// - Page: driven by pager key actions through the data view's paginator links
/// - Layout: the toggle reports a request, AppState accepts it and pushes the
///   new layout into both the view and the toggle
/// - Sort: `none → asc → desc → none` on the configured sort field
/// - Quit: terminal
#[derive(Debug)]
pub struct AppState<R, T> {
    /// The data view being browsed.
    view: DataView<R, T>,

    /// List/grid toggle.
    layout_options: LayoutOptions<InputEvent>,

    /// Request delivered by the toggle and not yet applied.
    requested_layout: Rc<Cell<Option<LayoutChangeEvent<InputEvent>>>>,

    /// Whether the user asked to quit.
    should_quit: bool,
}

impl<R: Record, T> AppState<R, T> {
    /// Wrap a built data view.
    pub fn new(view: DataView<R, T>) -> Self {
        let requested_layout = Rc::new(Cell::new(None));
        let sink = Rc::clone(&requested_layout);
        let layout_options = LayoutOptions::new(view.layout(), move |event: LayoutChangeEvent<InputEvent>| {
            debug!(value = %event.value, "layout change event");
            sink.set(Some(event));
        });
        Self {
            view,
            layout_options,
            requested_layout,
            should_quit: false,
        }
    }

    /// The data view.
    pub fn view(&self) -> &DataView<R, T> {
        &self.view
    }

    /// Mutable access for rendering.
    pub fn view_mut(&mut self) -> &mut DataView<R, T> {
        &mut self.view
    }

    /// The layout toggle.
    pub fn layout_options(&self) -> &LayoutOptions<InputEvent> {
        &self.layout_options
    }

    /// Whether the application should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatch a key press.
    ///
    /// Returns the event after dispatch; its default action is prevented when
    /// a control consumed it.
    pub fn handle_key(&mut self, key: KeyEvent, bindings: &KeyBindings) -> InputEvent {
        let event = InputEvent::new(key);
        match bindings.get(key) {
            Some(action) => self.handle_action(action, event),
            None => event,
        }
    }

    /// Apply a key action.
    pub fn handle_action(&mut self, action: KeyAction, event: InputEvent) -> InputEvent {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleLayout => {
                self.layout_options.toggle(event);
                // The toggle owns the event now; hand back the one it delivered
                if let Some(consumed) = self.apply_requested_layout() {
                    return consumed;
                }
            }
            KeyAction::CycleSortOrder => self.cycle_sort_order(),
            page_action => {
                handle_page_action(&mut self.view, page_action);
            }
        }
        event
    }

    /// Accept a pending layout request from the toggle, returning its event.
    fn apply_requested_layout(&mut self) -> Option<InputEvent> {
        let LayoutChangeEvent {
            original_event,
            value: layout,
        } = self.requested_layout.take()?;
        info!(%layout, "layout changed");
        self.view.set_layout(layout);
        self.layout_options.set_layout(layout);
        Some(original_event)
    }

    /// Advance the sort order on the configured sort field.
    fn cycle_sort_order(&mut self) {
        let SortSpec { field, order } = self.view.sort().clone();
        let Some(field) = field else {
            debug!("no sort field configured; ignoring sort cycle");
            return;
        };
        let order = order.cycled();
        info!(field = %field, %order, "sort order changed");
        self.view.set_sort(SortSpec {
            field: Some(field),
            order,
        });
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
