//! Paginator model: the contract between the data view and its pager.
//!
//! [`PaginatorModel`] answers everything a pager renderer needs: page count,
//! current page, the four navigation links with their disabled state and
//! target page, the window of numbered page links and the report text.
//! Rendering itself belongs to the collaborator (see `view::paginator`).

use crate::model::{PageEvent, PageState};
use std::num::NonZeroUsize;

/// Default number of numbered page links.
pub const DEFAULT_PAGE_LINK_SIZE: usize = 5;

/// Default current page report template.
pub const DEFAULT_REPORT_TEMPLATE: &str = "({currentPage} of {totalPages})";

/// Which navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLinkKind {
    /// Jump to the first page.
    First,
    /// Go back one page.
    Prev,
    /// Go forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl PageLinkKind {
    /// Element class of the link.
    pub fn class_name(self) -> &'static str {
        match self {
            PageLinkKind::First => "dataview-paginator-first",
            PageLinkKind::Prev => "dataview-paginator-prev",
            PageLinkKind::Next => "dataview-paginator-next",
            PageLinkKind::Last => "dataview-paginator-last",
        }
    }

    /// Icon class of the link.
    pub fn icon_class_name(self) -> &'static str {
        match self {
            PageLinkKind::First => "dataview-paginator-icon angle-double-left",
            PageLinkKind::Prev => "dataview-paginator-icon angle-left",
            PageLinkKind::Next => "dataview-paginator-icon angle-right",
            PageLinkKind::Last => "dataview-paginator-icon angle-double-right",
        }
    }

    /// Glyph shown by the default element.
    pub fn glyph(self) -> &'static str {
        match self {
            PageLinkKind::First => "«",
            PageLinkKind::Prev => "‹",
            PageLinkKind::Next => "›",
            PageLinkKind::Last => "»",
        }
    }
}

/// A first/prev/next/last navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Which link.
    pub kind: PageLinkKind,
    /// Whether activating the link is a no-op.
    pub disabled: bool,
    /// Page change emitted on activation.
    pub target: PageEvent,
}

/// Everything a link template receives.
#[derive(Debug)]
pub struct PageLinkOptions<'a, T> {
    /// Link kind.
    pub kind: PageLinkKind,
    /// Page change to emit when clicked; `None` when disabled.
    pub on_click: Option<PageEvent>,
    /// Composed element class.
    pub class_name: String,
    /// Icon class.
    pub icon_class_name: &'static str,
    /// Disabled state.
    pub disabled: bool,
    /// The default rendered element.
    pub element: T,
    /// The link being rendered.
    pub props: &'a PageLink,
}

/// Host override for rendering a navigation link.
pub type PageLinkTemplate<T> = Box<dyn Fn(PageLinkOptions<'_, T>) -> T>;

impl PageLink {
    /// Page change to emit on activation, `None` when disabled.
    pub fn on_click(&self) -> Option<PageEvent> {
        (!self.disabled).then_some(self.target)
    }

    /// Element class including the disabled marker.
    pub fn class_name(&self) -> String {
        let mut class = format!("{} dataview-paginator-element dataview-link", self.kind.class_name());
        if self.disabled {
            class.push_str(" dataview-disabled");
        }
        class
    }

    /// Render through `template` if given, else return `element` unchanged.
    pub fn render<T>(&self, element: T, template: Option<&PageLinkTemplate<T>>) -> T {
        match template {
            Some(template) => template(PageLinkOptions {
                kind: self.kind,
                on_click: self.on_click(),
                class_name: self.class_name(),
                icon_class_name: self.kind.icon_class_name(),
                disabled: self.disabled,
                element,
                props: self,
            }),
            None => element,
        }
    }
}

/// Pagination arithmetic for one page position and total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatorModel {
    first: usize,
    rows: Option<NonZeroUsize>,
    total: usize,
}

impl PaginatorModel {
    /// Model for `page` over `total` records.
    pub fn new(page: PageState, total: usize) -> Self {
        Self {
            first: page.first,
            rows: page.rows,
            total,
        }
    }

    /// Index of the first record of the current page.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Page size.
    pub fn rows(&self) -> Option<NonZeroUsize> {
        self.rows
    }

    /// Total record count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages; `0` when there are no records.
    pub fn page_count(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        match self.rows {
            Some(rows) => self.total.div_ceil(rows.get()),
            None => 1,
        }
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.rows.map_or(0, |rows| self.first / rows.get())
    }

    /// True when there is nothing to page through.
    pub fn is_empty(&self) -> bool {
        self.page_count() == 0
    }

    /// True on the first page.
    pub fn is_first_page(&self) -> bool {
        self.current_page() == 0
    }

    /// True on (or past) the last page.
    pub fn is_last_page(&self) -> bool {
        self.current_page() + 1 >= self.page_count()
    }

    /// Page event that shows page `page` (zero-based), clamped to the last page.
    pub fn page_event(&self, page: usize) -> PageEvent {
        let last = self.page_count().saturating_sub(1);
        let first = self
            .rows
            .map_or(0, |rows| page.min(last).saturating_mul(rows.get()));
        PageEvent {
            first,
            rows: self.rows,
        }
    }

    /// Link to the first page.
    pub fn first_link(&self) -> PageLink {
        PageLink {
            kind: PageLinkKind::First,
            disabled: self.is_first_page() || self.is_empty(),
            target: self.page_event(0),
        }
    }

    /// Link to the previous page.
    pub fn prev_link(&self) -> PageLink {
        PageLink {
            kind: PageLinkKind::Prev,
            disabled: self.is_first_page() || self.is_empty(),
            target: self.page_event(self.current_page().saturating_sub(1)),
        }
    }

    /// Link to the next page.
    pub fn next_link(&self) -> PageLink {
        PageLink {
            kind: PageLinkKind::Next,
            disabled: self.is_last_page() || self.is_empty(),
            target: self.page_event(self.current_page() + 1),
        }
    }

    /// Link to the last page.
    pub fn last_link(&self) -> PageLink {
        PageLink {
            kind: PageLinkKind::Last,
            disabled: self.is_last_page() || self.is_empty(),
            target: self.page_event(self.page_count().saturating_sub(1)),
        }
    }

    /// Zero-based page numbers to show as numbered links.
    ///
    /// A window of up to `link_size` pages centred on the current page and
    /// shifted to stay within `[0, page_count)`.
    pub fn page_links(&self, link_size: usize) -> Vec<usize> {
        let count = self.page_count();
        let visible = link_size.min(count);
        if visible == 0 {
            return Vec::new();
        }

        let page = self.current_page().min(count - 1);
        // ceil(page - visible / 2), floored at zero
        let start = (2 * page).saturating_sub(visible).div_ceil(2);
        let end = (start + visible - 1).min(count - 1);
        let start = start.saturating_sub(visible - (end - start + 1));
        (start..=end).collect()
    }

    /// Event that switches to `rows` per page while keeping the current first
    /// record on screen.
    pub fn change_rows(&self, rows: usize) -> PageEvent {
        match NonZeroUsize::new(rows) {
            Some(new_rows) => PageEvent {
                first: (self.first / new_rows.get()) * new_rows.get(),
                rows: Some(new_rows),
            },
            None => PageEvent {
                first: 0,
                rows: None,
            },
        }
    }

    /// Expand a report template.
    ///
    /// Placeholders: `{currentPage}`, `{totalPages}`, `{first}`, `{last}`,
    /// `{rows}`, `{totalRecords}`. Page numbers and record positions are
    /// one-based.
    pub fn report(&self, template: &str) -> String {
        let current_page = if self.page_count() > 0 {
            self.current_page() + 1
        } else {
            0
        };
        let first = if self.total == 0 { 0 } else { self.first + 1 };
        let last = match self.rows {
            Some(rows) => self.first.saturating_add(rows.get()).min(self.total),
            None => self.total,
        };

        template
            .replace("{currentPage}", &current_page.to_string())
            .replace("{totalPages}", &self.page_count().to_string())
            .replace("{first}", &first.to_string())
            .replace("{last}", &last.to_string())
            .replace("{rows}", &self.rows.map_or(0, NonZeroUsize::get).to_string())
            .replace("{totalRecords}", &self.total.to_string())
    }

    /// Whether the pager should be shown at all.
    ///
    /// With `always_show` off, a single page (or none) hides the pager.
    pub fn is_visible(&self, always_show: bool) -> bool {
        always_show || self.page_count() > 1
    }
}

#[cfg(test)]
#[path = "paginator_tests.rs"]
mod tests;
