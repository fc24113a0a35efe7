//! Windowing engine: which records are visible for a page.
//!
//! [`compute_window`] is a pure function of the collection and a
//! [`WindowRequest`]. It returns a [`WindowPlan`] of indices so it can be
//! cached independently of the records' lifetime; [`WindowPlan::materialize`]
//! turns it into borrowed records.
//!
//! # Bounds
//!
//! | mode | start | end |
//! | --- | --- | --- |
//! | no paginator | `0` | collection length |
//! | paginator | `first` | `min(first + rows, total)` |
//! | paginator + lazy | `0` | `min(rows, total)` |
//!
//! A missing page size means "no limit" (`end = total`). Positions in
//! `[start, end)` that hold no record (a `total_records` override larger than
//! the supplied collection) are skipped.

use super::identity::{record_identity, RenderKey};
use super::sort::sort_permutation;
use crate::model::{FieldPath, PageState, Record, SortSpec, WindowMode};
use std::ops::Range;

/// All inputs that determine the visible window, apart from the records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WindowRequest {
    /// Effective page position.
    pub page: PageState,
    /// Sort directive.
    pub sort: SortSpec,
    /// Paginator / lazy flags.
    pub mode: WindowMode,
    /// Explicit total record count (server-side total in lazy mode).
    pub total_records: Option<usize>,
    /// Field used for render identities.
    pub data_key: Option<FieldPath>,
}

impl WindowRequest {
    /// Total record count for a collection of `len` records.
    ///
    /// A zero override counts as "not provided".
    pub fn total(&self, len: usize) -> usize {
        self.total_records.filter(|&total| total > 0).unwrap_or(len)
    }

    /// Half-open range of processed positions to show.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let total = self.total(len);
        if !self.mode.paginator {
            return 0..len;
        }

        let start = if self.mode.lazy { 0 } else { self.page.first };
        let end = match self.page.rows {
            Some(rows) => start.saturating_add(rows.get()).min(total),
            None => total,
        };
        start..end.max(start)
    }
}

/// A visible position in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    /// Index into the source collection.
    pub source_index: usize,
    /// Position in the processed (sorted) collection.
    pub position: usize,
    /// Render identity.
    pub key: RenderKey,
}

/// Result of windowing, expressed as indices into the source collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowPlan {
    items: Vec<PlannedItem>,
    total: usize,
}

impl WindowPlan {
    /// Planned items in display order.
    pub fn items(&self) -> &[PlannedItem] {
        &self.items
    }

    /// Total record count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the planned records out of `records`.
    ///
    /// `records` must be the collection the plan was computed from; indices
    /// that fall outside it are skipped.
    pub fn materialize<'a, R>(&self, records: &'a [R]) -> Window<'a, R> {
        let visible = self
            .items
            .iter()
            .filter_map(|item| {
                records.get(item.source_index).map(|record| VisibleRecord {
                    record,
                    key: item.key.clone(),
                    position: item.position,
                })
            })
            .collect();
        Window {
            visible,
            total: self.total,
        }
    }
}

/// A record selected for display.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRecord<'a, R> {
    /// The record.
    pub record: &'a R,
    /// Render identity.
    pub key: RenderKey,
    /// Position in the processed collection.
    pub position: usize,
}

/// Visible slice and total count.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<'a, R> {
    /// Records to render, in display order.
    pub visible: Vec<VisibleRecord<'a, R>>,
    /// Total record count.
    pub total: usize,
}

impl<'a, R> Window<'a, R> {
    /// The visible records without identities.
    pub fn records(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.visible.iter().map(|v| v.record)
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Compute the visible window of `records` for `request`.
pub fn compute_window<R: Record>(records: &[R], request: &WindowRequest) -> WindowPlan {
    let total = request.total(records.len());
    if records.is_empty() {
        return WindowPlan {
            items: Vec::new(),
            total,
        };
    }

    let order = sort_permutation(records, &request.sort);
    let items = request
        .bounds(records.len())
        .filter_map(|position| {
            order.get(position).map(|&source_index| PlannedItem {
                source_index,
                position,
                key: record_identity(&records[source_index], position, request.data_key.as_ref()),
            })
        })
        .collect();

    WindowPlan { items, total }
}

/// Convenience wrapper: compute and materialize in one step.
pub fn compute_visible<'a, R: Record>(records: &'a [R], request: &WindowRequest) -> Window<'a, R> {
    compute_window(records, request).materialize(records)
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
