//! UI state machine (pure).
//!
//! The data view controller, the layout toggle and the host application
//! state. All transitions are testable without a terminal.

pub mod app_state;
pub mod data_view;
pub mod layout_options;
pub mod page_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use data_view::{
    DataView, DataViewProps, ItemTemplate, PageHandler, PaginatorPlacement, PaginatorSection,
    RenderPass, RenderedItem, Section, DEFAULT_EMPTY_MESSAGE,
};
pub use layout_options::{LayoutChangeEvent, LayoutChangeHandler, LayoutOptions};
pub use page_handler::handle_page_action;
