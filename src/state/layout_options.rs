//! Layout toggle control.
//!
//! A stateless pair of list/grid buttons. Activating one reports the request
//! to the host and suppresses the input event's default action; the control
//! never changes its own layout. The host decides and pushes the value back
//! with [`LayoutOptions::set_layout`].

use crate::model::{Cancelable, Layout};
use std::fmt;
use tracing::debug;

/// A layout change requested through the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChangeEvent<E> {
    /// The input event that triggered the request.
    pub original_event: E,
    /// Requested layout.
    pub value: Layout,
}

/// Handler receiving layout change requests.
pub type LayoutChangeHandler<E> = Box<dyn FnMut(LayoutChangeEvent<E>)>;

/// The list/grid toggle.
pub struct LayoutOptions<E> {
    layout: Layout,
    on_change: LayoutChangeHandler<E>,
}

impl<E> fmt::Debug for LayoutOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutOptions")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<E: Cancelable> LayoutOptions<E> {
    /// Toggle showing `layout`, reporting requests to `on_change`.
    pub fn new(layout: Layout, on_change: impl FnMut(LayoutChangeEvent<E>) + 'static) -> Self {
        Self {
            layout,
            on_change: Box::new(on_change),
        }
    }

    /// Layout the toggle currently reflects.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether the button for `layout` is highlighted.
    pub fn is_highlighted(&self, layout: Layout) -> bool {
        self.layout == layout
    }

    /// Activate the button for `layout`.
    ///
    /// Suppresses the default action of `event` and hands it to the host
    /// along with the requested layout.
    pub fn select(&mut self, mut event: E, layout: Layout) {
        event.prevent_default();
        debug!(current = %self.layout, requested = %layout, "layout change requested");
        (self.on_change)(LayoutChangeEvent {
            original_event: event,
            value: layout,
        });
    }

    /// Activate the button for the layout not currently shown.
    pub fn toggle(&mut self, event: E) {
        self.select(event, self.layout.toggled());
    }

    /// Host update after accepting (or overriding) a request.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }
}
