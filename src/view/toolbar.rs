//! Toolbar and status bar.
//!
//! The toolbar shows the layout toggle and the active sort. The status bar
//! shows the record count and key hints.

use crate::model::{Cancelable, Layout, SortOrder, SortSpec};
use crate::state::LayoutOptions;
use crate::view::styles::ViewStyles;
use ratatui::text::{Line, Span};

/// Layout choices in display order.
const LAYOUTS: [Layout; 2] = [Layout::List, Layout::Grid];

/// Key hints shown in the status bar.
const KEY_HINTS: &str = "n/p page  +/- rows  v layout  o sort  q quit";

/// Toolbar line: layout toggle, then the sort indicator.
///
/// Owned so it can be built before the data view is borrowed for rendering.
pub fn toolbar_line<E: Cancelable>(
    layout_options: &LayoutOptions<E>,
    sort: &SortSpec,
    styles: &ViewStyles,
) -> Line<'static> {
    let mut spans = Vec::new();
    for layout in LAYOUTS {
        let label = layout_label(layout);
        if layout_options.is_highlighted(layout) {
            spans.push(Span::styled(format!("[{label}]"), styles.highlighted_option));
        } else {
            spans.push(Span::styled(format!(" {label} "), styles.muted));
        }
    }

    if let Some(field) = &sort.field {
        spans.push(Span::styled("  sort: ", styles.muted));
        spans.push(Span::raw(format!("{field} {}", sort_arrow(sort.order))));
    }

    Line::from(spans)
}

/// Status bar line.
pub fn status_line(total_records: usize, styles: &ViewStyles) -> Line<'static> {
    let noun = if total_records == 1 { "record" } else { "records" };
    Line::from(vec![
        Span::raw(format!("{total_records} {noun}")),
        Span::styled(format!("  {KEY_HINTS}"), styles.muted),
    ])
}

fn layout_label(layout: Layout) -> &'static str {
    match layout {
        Layout::List => "List",
        Layout::Grid => "Grid",
    }
}

fn sort_arrow(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "↑",
        SortOrder::Descending => "↓",
        SortOrder::Unsorted => "-",
    }
}
