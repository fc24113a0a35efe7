//! View-state layer - windowing, sorting and pagination arithmetic
//!
//! Everything here is a pure function of its inputs and can be tested
//! without a terminal.
//!
//! # Module Structure
//!
//! - `sort`: Null-aware record comparator and stable sort permutation
//! - `identity`: RenderKey - data key or positional render identity
//! - `window`: WindowRequest / WindowPlan - the windowing engine
//! - `cache`: Dataset and WindowCache - memoized window computation
//! - `paginator`: PaginatorModel / PageLink - the pager contract

pub mod cache;
pub mod identity;
pub mod paginator;
pub mod sort;
pub mod window;

pub use cache::{Dataset, WindowCache};
pub use identity::{record_identity, RenderKey};
pub use paginator::{
    PageLink, PageLinkKind, PageLinkOptions, PageLinkTemplate, PaginatorModel,
    DEFAULT_PAGE_LINK_SIZE, DEFAULT_REPORT_TEMPLATE,
};
pub use sort::{compare_values, natural_cmp, sort_permutation};
pub use window::{
    compute_visible, compute_window, PlannedItem, VisibleRecord, Window, WindowPlan,
    WindowRequest,
};
