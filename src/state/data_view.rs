//! View controller: page-state ownership, event wiring and the render pass.
//!
//! A [`DataView`] is built once from [`DataViewProps`]. Whether the view owns
//! its page position or reflects a host-owned one is decided at that point by
//! the presence of `on_page` and never changes afterwards:
//!
//! - **Uncontrolled** (no `on_page`): page events overwrite the internal
//!   [`PageState`], seeded from `first`/`rows`.
//! - **Controlled** (`on_page` given): page events are forwarded verbatim to
//!   the host handler and nothing is mutated. The host pushes the new
//!   position back through [`DataView::set_page`].
//!
//! [`DataView::render`] runs the windowing engine (memoized) and returns the
//! sections to draw in their fixed order: loading overlay, header, top
//! paginator, content, bottom paginator, footer.

use crate::model::{
    DataViewError, FieldPath, Layout, PageEvent, PageState, PaginatorPosition, Record,
    SortOrder, SortSpec, WindowMode,
};
use crate::view_state::{
    Dataset, PageLink, PaginatorModel, RenderKey, Window, WindowCache, WindowRequest,
    DEFAULT_PAGE_LINK_SIZE, DEFAULT_REPORT_TEMPLATE,
};
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

/// Empty-state text used when no `empty_message` is configured.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

/// Renders one record for the current layout.
pub type ItemTemplate<R, T> = Box<dyn Fn(&R, Layout) -> T>;

/// Host handler that owns the page position in controlled mode.
pub type PageHandler = Box<dyn FnMut(PageEvent)>;

// ===== Props =====

/// Configuration surface of a [`DataView`].
///
/// Everything is optional except `item_template`, which
/// [`DataView::new`] requires.
pub struct DataViewProps<R, T> {
    /// Records to show.
    pub value: Option<Dataset<R>>,
    /// List or grid presentation.
    pub layout: Layout,
    /// Field whose value identifies a record across renders.
    pub data_key: Option<FieldPath>,
    /// Initial (uncontrolled) or current (controlled) first record index.
    pub first: usize,
    /// Page size, `None` for no limit.
    pub rows: Option<NonZeroUsize>,
    /// Total record count override (server-side total in lazy mode).
    pub total_records: Option<usize>,
    /// Slice into pages and show a paginator.
    pub paginator: bool,
    /// Where the paginator goes.
    pub paginator_position: PaginatorPosition,
    /// Show the paginator even with a single page.
    pub always_show_paginator: bool,
    /// Number of numbered page links.
    pub page_link_size: usize,
    /// Choices offered for the page size.
    pub rows_per_page_options: Vec<usize>,
    /// Template for the current page report.
    pub current_page_report_template: String,
    /// The supplied records are only the current page.
    pub lazy: bool,
    /// Data is being fetched.
    pub loading: bool,
    /// Field to sort by.
    pub sort_field: Option<FieldPath>,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Required per-record renderer.
    pub item_template: Option<ItemTemplate<R, T>>,
    /// Page change handler; selects controlled mode.
    pub on_page: Option<PageHandler>,
    /// Empty-state text.
    pub empty_message: Option<String>,
    /// Content above the records.
    pub header: Option<T>,
    /// Content below the records.
    pub footer: Option<T>,
}

impl<R, T> Default for DataViewProps<R, T> {
    fn default() -> Self {
        Self {
            value: None,
            layout: Layout::List,
            data_key: None,
            first: 0,
            rows: None,
            total_records: None,
            paginator: false,
            paginator_position: PaginatorPosition::Bottom,
            always_show_paginator: true,
            page_link_size: DEFAULT_PAGE_LINK_SIZE,
            rows_per_page_options: Vec::new(),
            current_page_report_template: DEFAULT_REPORT_TEMPLATE.to_string(),
            lazy: false,
            loading: false,
            sort_field: None,
            sort_order: SortOrder::Unsorted,
            item_template: None,
            on_page: None,
            empty_message: None,
            header: None,
            footer: None,
        }
    }
}

impl<R, T> fmt::Debug for DataViewProps<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataViewProps")
            .field("records", &self.value.as_ref().map(|v| v.len()))
            .field("layout", &self.layout)
            .field("first", &self.first)
            .field("rows", &self.rows)
            .field("paginator", &self.paginator)
            .field("lazy", &self.lazy)
            .field("controlled", &self.on_page.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, T> DataViewProps<R, T> {
    /// Default props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the records.
    pub fn with_value(mut self, value: impl Into<Dataset<R>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the data key.
    pub fn with_data_key(mut self, data_key: FieldPath) -> Self {
        self.data_key = Some(data_key);
        self
    }

    /// Set the first record index.
    pub fn with_first(mut self, first: usize) -> Self {
        self.first = first;
        self
    }

    /// Set the page size; `0` means no limit.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = NonZeroUsize::new(rows);
        self
    }

    /// Override the total record count.
    pub fn with_total_records(mut self, total: usize) -> Self {
        self.total_records = Some(total);
        self
    }

    /// Enable pagination.
    pub fn with_paginator(mut self, paginator: bool) -> Self {
        self.paginator = paginator;
        self
    }

    /// Place the paginator.
    pub fn with_paginator_position(mut self, position: PaginatorPosition) -> Self {
        self.paginator_position = position;
        self
    }

    /// Show the paginator even with a single page.
    pub fn with_always_show_paginator(mut self, always_show: bool) -> Self {
        self.always_show_paginator = always_show;
        self
    }

    /// Number of numbered page links.
    pub fn with_page_link_size(mut self, size: usize) -> Self {
        self.page_link_size = size;
        self
    }

    /// Page size choices.
    pub fn with_rows_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.rows_per_page_options = options;
        self
    }

    /// Current page report template.
    pub fn with_current_page_report_template(mut self, template: impl Into<String>) -> Self {
        self.current_page_report_template = template.into();
        self
    }

    /// Treat the records as the current page only.
    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Mark data as loading.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sort by `field` in `order`.
    pub fn with_sort(mut self, field: FieldPath, order: SortOrder) -> Self {
        self.sort_field = Some(field);
        self.sort_order = order;
        self
    }

    /// Per-record renderer.
    pub fn with_item_template(mut self, template: impl Fn(&R, Layout) -> T + 'static) -> Self {
        self.item_template = Some(Box::new(template));
        self
    }

    /// Hand page ownership to the host.
    pub fn with_on_page(mut self, handler: impl FnMut(PageEvent) + 'static) -> Self {
        self.on_page = Some(Box::new(handler));
        self
    }

    /// Empty-state text.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Header content.
    pub fn with_header(mut self, header: T) -> Self {
        self.header = Some(header);
        self
    }

    /// Footer content.
    pub fn with_footer(mut self, footer: T) -> Self {
        self.footer = Some(footer);
        self
    }
}

// ===== Page ownership =====

/// Who owns the page position. Fixed at construction.
enum PageOwnership {
    Uncontrolled { state: PageState },
    Controlled { on_page: PageHandler },
}

impl fmt::Debug for PageOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageOwnership::Uncontrolled { state } => {
                f.debug_struct("Uncontrolled").field("state", state).finish()
            }
            PageOwnership::Controlled { .. } => f.write_str("Controlled"),
        }
    }
}

// ===== Render output =====

/// Which paginator slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorPlacement {
    /// Above the content.
    Top,
    /// Below the content.
    Bottom,
}

/// What a paginator collaborator needs to draw one pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorSection<'a> {
    /// Slot.
    pub placement: PaginatorPlacement,
    /// Page arithmetic for the effective page.
    pub model: PaginatorModel,
    /// Number of numbered page links.
    pub link_size: usize,
    /// Report template.
    pub report_template: &'a str,
    /// Page size choices.
    pub rows_per_page_options: &'a [usize],
}

impl PaginatorSection<'_> {
    /// Navigation links in display order.
    pub fn links(&self) -> [PageLink; 4] {
        [
            self.model.first_link(),
            self.model.prev_link(),
            self.model.next_link(),
            self.model.last_link(),
        ]
    }

    /// Numbered page links (zero-based).
    pub fn page_links(&self) -> Vec<usize> {
        self.model.page_links(self.link_size)
    }

    /// Expanded report text.
    pub fn report(&self) -> String {
        self.model.report(self.report_template)
    }
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<T> {
    /// Render identity.
    pub key: RenderKey,
    /// Position in the processed collection.
    pub position: usize,
    /// Output of the item template.
    pub content: T,
}

/// A piece of the render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a, T> {
    /// Loading indicator drawn over the view.
    LoadingOverlay,
    /// Header content.
    Header(&'a T),
    /// A pager.
    Paginator(PaginatorSection<'a>),
    /// Visible records. Empty while loading with nothing to show.
    Items(Vec<RenderedItem<T>>),
    /// Empty-state text.
    Empty(&'a str),
    /// Footer content.
    Footer(&'a T),
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass<'a, T> {
    /// Layout the items were rendered for.
    pub layout: Layout,
    /// Whether data is loading.
    pub loading: bool,
    /// Sections in draw order.
    pub sections: Vec<Section<'a, T>>,
}

impl<T> RenderPass<'_, T> {
    /// Rendered items, if the content section holds any.
    pub fn items(&self) -> &[RenderedItem<T>] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Items(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// The empty-state text, if shown.
    pub fn empty_message(&self) -> Option<&str> {
        self.sections.iter().find_map(|section| match section {
            Section::Empty(message) => Some(*message),
            _ => None,
        })
    }

    /// The pager in `placement`, if shown.
    pub fn paginator(&self, placement: PaginatorPlacement) -> Option<&PaginatorSection<'_>> {
        self.sections.iter().find_map(|section| match section {
            Section::Paginator(pager) if pager.placement == placement => Some(pager),
            _ => None,
        })
    }
}

// ===== DataView =====

/// The view controller.
pub struct DataView<R, T> {
    value: Option<Dataset<R>>,
    layout: Layout,
    data_key: Option<FieldPath>,
    /// Host-supplied page position; authoritative in controlled mode.
    props_page: PageState,
    ownership: PageOwnership,
    total_records: Option<usize>,
    paginator: bool,
    paginator_position: PaginatorPosition,
    always_show_paginator: bool,
    page_link_size: usize,
    rows_per_page_options: Vec<usize>,
    current_page_report_template: String,
    lazy: bool,
    loading: bool,
    sort: SortSpec,
    item_template: ItemTemplate<R, T>,
    empty_message: String,
    header: Option<T>,
    footer: Option<T>,
    cache: WindowCache,
}

impl<R, T> fmt::Debug for DataView<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("records", &self.value.as_ref().map(|v| v.len()))
            .field("layout", &self.layout)
            .field("ownership", &self.ownership)
            .field("props_page", &self.props_page)
            .field("paginator", &self.paginator)
            .field("lazy", &self.lazy)
            .field("loading", &self.loading)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl<R: Record, T> DataView<R, T> {
    /// Validate `props` and build the controller.
    ///
    /// # Errors
    ///
    /// [`DataViewError::MissingItemTemplate`] when no item template is set.
    pub fn new(props: DataViewProps<R, T>) -> Result<Self, DataViewError> {
        let item_template = props
            .item_template
            .ok_or(DataViewError::MissingItemTemplate)?;

        let props_page = PageState {
            first: props.first,
            rows: props.rows,
        };
        let ownership = match props.on_page {
            Some(on_page) => PageOwnership::Controlled { on_page },
            None => PageOwnership::Uncontrolled { state: props_page },
        };
        debug!(?ownership, ?props_page, "data view created");

        Ok(Self {
            value: props.value,
            layout: props.layout,
            data_key: props.data_key,
            props_page,
            ownership,
            total_records: props.total_records,
            paginator: props.paginator,
            paginator_position: props.paginator_position,
            always_show_paginator: props.always_show_paginator,
            page_link_size: props.page_link_size,
            rows_per_page_options: props.rows_per_page_options,
            current_page_report_template: props.current_page_report_template,
            lazy: props.lazy,
            loading: props.loading,
            sort: SortSpec {
                field: props.sort_field,
                order: props.sort_order,
            },
            item_template,
            empty_message: props
                .empty_message
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
            header: props.header,
            footer: props.footer,
            cache: WindowCache::new(),
        })
    }

    // ===== Page state =====

    /// True when the host owns the page position.
    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, PageOwnership::Controlled { .. })
    }

    /// Page position used for windowing.
    pub fn effective_page(&self) -> PageState {
        match &self.ownership {
            PageOwnership::Uncontrolled { state } => *state,
            PageOwnership::Controlled { .. } => self.props_page,
        }
    }

    /// Deliver a page change.
    ///
    /// Uncontrolled: the internal state becomes `event`. Controlled: `event`
    /// goes to the host handler unchanged and nothing else happens.
    pub fn page_change(&mut self, event: PageEvent) {
        match &mut self.ownership {
            PageOwnership::Uncontrolled { state } => {
                debug!(first = event.first, rows = ?event.rows, "page change (internal)");
                *state = event.into();
            }
            PageOwnership::Controlled { on_page } => {
                debug!(first = event.first, rows = ?event.rows, "page change (forwarded)");
                on_page(event);
            }
        }
    }

    /// Activate a navigation link; disabled links do nothing.
    pub fn activate(&mut self, link: &PageLink) {
        if let Some(event) = link.on_click() {
            self.page_change(event);
        }
    }

    /// Switch the page size, keeping the current first record on screen.
    pub fn change_rows(&mut self, rows: usize) {
        let event = self.paginator().change_rows(rows);
        self.page_change(event);
    }

    /// Host update of the page position in controlled mode.
    ///
    /// # Errors
    ///
    /// [`DataViewError::PageOwnedInternally`] on an uncontrolled view, whose
    /// position only moves through [`DataView::page_change`].
    pub fn set_page(&mut self, page: PageState) -> Result<(), DataViewError> {
        match self.ownership {
            PageOwnership::Controlled { .. } => {
                self.props_page = page;
                Ok(())
            }
            PageOwnership::Uncontrolled { .. } => Err(DataViewError::PageOwnedInternally),
        }
    }

    // ===== Host updates =====

    /// Replace the records.
    pub fn set_value(&mut self, value: Option<Dataset<R>>) {
        self.value = value;
    }

    /// Change the layout.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Change the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Change the sort directive.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Change the total record override.
    pub fn set_total_records(&mut self, total: Option<usize>) {
        self.total_records = total;
    }

    // ===== Accessors =====

    /// Records, if any.
    pub fn value(&self) -> Option<&Dataset<R>> {
        self.value.as_ref()
    }

    /// Current layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether data is loading.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Current sort directive.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Whether pagination is enabled.
    pub fn has_paginator(&self) -> bool {
        self.paginator
    }

    /// Page size choices.
    pub fn rows_per_page_options(&self) -> &[usize] {
        &self.rows_per_page_options
    }

    /// Effective total record count.
    pub fn total_records(&self) -> usize {
        self.request().total(self.records().len())
    }

    /// Pager model for the effective page.
    pub fn paginator(&self) -> PaginatorModel {
        PaginatorModel::new(self.effective_page(), self.total_records())
    }

    /// Cache statistics as `(hits, misses)`.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }

    fn records(&self) -> &[R] {
        self.value.as_ref().map(Dataset::as_slice).unwrap_or(&[])
    }

    fn request(&self) -> WindowRequest {
        WindowRequest {
            page: self.effective_page(),
            sort: self.sort.clone(),
            mode: WindowMode {
                paginator: self.paginator,
                lazy: self.lazy,
            },
            total_records: self.total_records,
            data_key: self.data_key.clone(),
        }
    }

    // ===== Rendering =====

    /// Visible records for the effective page.
    pub fn visible(&mut self) -> Window<'_, R> {
        let request = self.request();
        let records = self.value.as_ref().map(Dataset::as_slice).unwrap_or(&[]);
        self.cache
            .plan(self.value.as_ref(), &request)
            .materialize(records)
    }

    /// Run one render pass.
    pub fn render(&mut self) -> RenderPass<'_, T> {
        let request = self.request();
        let records = self.value.as_ref().map(Dataset::as_slice).unwrap_or(&[]);
        let plan = self.cache.plan(self.value.as_ref(), &request);

        let items: Vec<RenderedItem<T>> = plan
            .items()
            .iter()
            .filter_map(|item| {
                records.get(item.source_index).map(|record| RenderedItem {
                    key: item.key.clone(),
                    position: item.position,
                    content: (self.item_template)(record, self.layout),
                })
            })
            .collect();

        let model = PaginatorModel::new(request.page, plan.total());
        let show_pager = self.paginator && model.is_visible(self.always_show_paginator);
        let pager = PaginatorSection {
            placement: PaginatorPlacement::Top,
            model,
            link_size: self.page_link_size,
            report_template: &self.current_page_report_template,
            rows_per_page_options: &self.rows_per_page_options,
        };

        let mut sections = Vec::with_capacity(6);
        if self.loading {
            sections.push(Section::LoadingOverlay);
        }
        if let Some(header) = &self.header {
            sections.push(Section::Header(header));
        }
        if show_pager && self.paginator_position.shows_top() {
            sections.push(Section::Paginator(pager.clone()));
        }
        if !items.is_empty() || self.loading {
            sections.push(Section::Items(items));
        } else {
            sections.push(Section::Empty(&self.empty_message));
        }
        if show_pager && self.paginator_position.shows_bottom() {
            sections.push(Section::Paginator(PaginatorSection {
                placement: PaginatorPlacement::Bottom,
                ..pager
            }));
        }
        if let Some(footer) = &self.footer {
            sections.push(Section::Footer(footer));
        }

        RenderPass {
            layout: self.layout,
            loading: self.loading,
            sections,
        }
    }
}

#[cfg(test)]
#[path = "data_view_tests.rs"]
mod tests;
