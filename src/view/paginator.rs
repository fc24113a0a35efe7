//! Pager rendering.
//!
//! Draws one [`PaginatorSection`] as a single line:
//! `« ‹ 1 [2] 3 › » (2 of 3) rows: 10`.
//! Navigation links pass through [`PageLink::render`], so a host link
//! template can restyle or replace them.

use crate::state::PaginatorSection;
use crate::view::styles::ViewStyles;
use crate::view_state::{PageLink, PageLinkTemplate};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Link template over ratatui spans.
pub type SpanLinkTemplate = PageLinkTemplate<Span<'static>>;

/// Build the pager line for `section`.
pub fn paginator_line(
    section: &PaginatorSection<'_>,
    styles: &ViewStyles,
    link_template: Option<&SpanLinkTemplate>,
) -> Line<'static> {
    let [first, prev, next, last] = section.links();
    let current = section.model.current_page();

    let mut spans = vec![
        link_span(&first, styles, link_template),
        Span::raw(" "),
        link_span(&prev, styles, link_template),
    ];

    for page in section.page_links() {
        spans.push(Span::raw(" "));
        spans.push(if page == current {
            Span::styled(format!("[{}]", page + 1), styles.current_page)
        } else {
            Span::styled((page + 1).to_string(), styles.link)
        });
    }

    spans.push(Span::raw(" "));
    spans.push(link_span(&next, styles, link_template));
    spans.push(Span::raw(" "));
    spans.push(link_span(&last, styles, link_template));

    let report = section.report();
    if !report.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(report, styles.report));
    }

    if !section.rows_per_page_options.is_empty() {
        let rows = section
            .model
            .rows()
            .map_or_else(|| "all".to_string(), |rows| rows.to_string());
        spans.push(Span::styled(format!(" rows: {rows}"), styles.muted));
    }

    Line::from(spans)
}

fn link_span(
    link: &PageLink,
    styles: &ViewStyles,
    template: Option<&SpanLinkTemplate>,
) -> Span<'static> {
    let style = if link.disabled {
        styles.disabled_link
    } else {
        styles.link
    };
    link.render(Span::styled(link.kind.glyph(), style), template)
}

/// Render a pager centered in `area`.
pub fn render_paginator(
    frame: &mut Frame,
    area: Rect,
    section: &PaginatorSection<'_>,
    styles: &ViewStyles,
    link_template: Option<&SpanLinkTemplate>,
) {
    let line = paginator_line(section, styles, link_template);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
