//! Data view rendering.
//!
//! Draws a [`RenderPass`] top to bottom in section order. Items are stacked
//! lines in list layout and bordered cells in grid layout. The loading
//! overlay is drawn last, over everything else.

use crate::model::Layout;
use crate::state::{RenderPass, RenderedItem, Section};
use crate::view::constants::{
    DEFAULT_GRID_COLUMNS, GRID_CELL_BORDER_HEIGHT, LOADING_POPUP_HEIGHT, LOADING_POPUP_WIDTH,
    PAGINATOR_HEIGHT,
};
use crate::view::paginator::{render_paginator, SpanLinkTemplate};
use crate::view::styles::ViewStyles;
use ratatui::{
    layout::{Alignment, Constraint, Layout as Split, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::fmt;

/// Loading overlay text.
const LOADING_TEXT: &str = "Loading...";

/// Rendering options for the data view.
pub struct ViewOptions {
    /// Cells per grid row.
    pub grid_columns: usize,
    /// Widget styles.
    pub styles: ViewStyles,
    /// Optional override for navigation links.
    pub link_template: Option<SpanLinkTemplate>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
            styles: ViewStyles::default(),
            link_template: None,
        }
    }
}

impl fmt::Debug for ViewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewOptions")
            .field("grid_columns", &self.grid_columns)
            .field("styles", &self.styles)
            .field("link_template", &self.link_template.is_some())
            .finish()
    }
}

/// Render `pass` into `area`.
pub fn render_data_view(
    frame: &mut Frame,
    area: Rect,
    pass: &RenderPass<'_, Text<'static>>,
    options: &ViewOptions,
) {
    let laid_out: Vec<&Section<'_, Text<'static>>> = pass
        .sections
        .iter()
        .filter(|section| !matches!(section, Section::LoadingOverlay))
        .collect();

    let areas = Split::vertical(laid_out.iter().map(|section| section_constraint(section)))
        .split(area);

    for (section, section_area) in laid_out.into_iter().zip(areas.iter().copied()) {
        match section {
            Section::LoadingOverlay => {}
            Section::Header(text) | Section::Footer(text) => {
                frame.render_widget(Paragraph::new((*text).clone()), section_area);
            }
            Section::Paginator(pager) => render_paginator(
                frame,
                section_area,
                pager,
                &options.styles,
                options.link_template.as_ref(),
            ),
            Section::Items(items) => match pass.layout {
                Layout::List => render_list(frame, section_area, items),
                Layout::Grid => render_grid(frame, section_area, items, options.grid_columns),
            },
            Section::Empty(message) => {
                let empty = Paragraph::new(Line::styled(message.to_string(), options.styles.empty))
                    .alignment(Alignment::Center);
                frame.render_widget(empty, section_area);
            }
        }
    }

    if pass.loading {
        render_loading_overlay(frame, area, &options.styles);
    }
}

fn section_constraint(section: &Section<'_, Text<'static>>) -> Constraint {
    match section {
        Section::Header(text) | Section::Footer(text) => Constraint::Length(text_height(text)),
        Section::Paginator(_) => Constraint::Length(PAGINATOR_HEIGHT),
        Section::Items(_) | Section::Empty(_) => Constraint::Fill(1),
        Section::LoadingOverlay => Constraint::Length(0),
    }
}

fn text_height(text: &Text<'_>) -> u16 {
    u16::try_from(text.height()).unwrap_or(u16::MAX)
}

fn render_list(frame: &mut Frame, area: Rect, items: &[RenderedItem<Text<'static>>]) {
    let lines: Vec<Line<'static>> = items
        .iter()
        .flat_map(|item| item.content.lines.iter().cloned())
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    items: &[RenderedItem<Text<'static>>],
    columns: usize,
) {
    let columns = columns.max(1);
    let rows: Vec<&[RenderedItem<Text<'static>>]> = items.chunks(columns).collect();

    let row_constraints = rows.iter().map(|row| {
        let content_height = row.iter().map(|item| text_height(&item.content)).max().unwrap_or(0);
        Constraint::Length(content_height.saturating_add(GRID_CELL_BORDER_HEIGHT))
    });
    let row_areas = Split::vertical(row_constraints).split(area);

    let column_count = u32::try_from(columns).unwrap_or(u32::MAX);
    for (row, row_area) in rows.into_iter().zip(row_areas.iter().copied()) {
        let cell_areas =
            Split::horizontal((0..columns).map(|_| Constraint::Ratio(1, column_count)))
                .split(row_area);
        for (item, cell_area) in row.iter().zip(cell_areas.iter().copied()) {
            let cell = Paragraph::new(item.content.clone()).block(Block::default().borders(Borders::ALL));
            frame.render_widget(cell, cell_area);
        }
    }
}

fn render_loading_overlay(frame: &mut Frame, area: Rect, styles: &ViewStyles) {
    let popup_area = centered_rect(LOADING_POPUP_WIDTH, LOADING_POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup_area);

    let loading = Paragraph::new(Line::styled(LOADING_TEXT, styles.loading))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.loading),
        );
    frame.render_widget(loading, popup_area);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
