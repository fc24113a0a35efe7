//! Page state, sort directives and mode flags.

use super::error::ParseEnumError;
use super::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

// ===== PageState =====

/// Position of the visible page within the collection.
///
/// `rows == None` means "no page limit": everything from `first` onward is
/// visible. A zero page size is normalised to `None` by [`PageState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageState {
    /// Index of the first visible record.
    pub first: usize,
    /// Page size, if limited.
    pub rows: Option<NonZeroUsize>,
}

impl PageState {
    /// Create a page state. `rows == 0` means unlimited.
    pub fn new(first: usize, rows: usize) -> Self {
        Self {
            first,
            rows: NonZeroUsize::new(rows),
        }
    }

    /// Page state without a page size limit.
    pub fn unbounded(first: usize) -> Self {
        Self { first, rows: None }
    }

    /// Page size as a plain integer, `0` when unlimited.
    pub fn rows_or_zero(&self) -> usize {
        self.rows.map_or(0, NonZeroUsize::get)
    }
}

impl From<PageEvent> for PageState {
    fn from(event: PageEvent) -> Self {
        Self {
            first: event.first,
            rows: event.rows,
        }
    }
}

/// A user-driven page change, delivered verbatim to the page handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageEvent {
    /// Requested first record index.
    pub first: usize,
    /// Requested page size.
    pub rows: Option<NonZeroUsize>,
}

impl PageEvent {
    /// Create a page event. `rows == 0` means unlimited.
    pub fn new(first: usize, rows: usize) -> Self {
        Self {
            first,
            rows: NonZeroUsize::new(rows),
        }
    }
}

impl From<PageState> for PageEvent {
    fn from(state: PageState) -> Self {
        Self {
            first: state.first,
            rows: state.rows,
        }
    }
}

// ===== Sorting =====

/// Sort direction, mirroring the `1 | -1 | null` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first (`1`).
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first (`-1`).
    #[serde(alias = "desc")]
    Descending,
    /// No reordering (`null`).
    #[default]
    Unsorted,
}

impl SortOrder {
    /// Multiplier applied to the raw comparison result.
    pub fn sign(self) -> i8 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
            SortOrder::Unsorted => 0,
        }
    }

    /// Build from the numeric convention. Anything other than `1`/`-1` is unsorted.
    pub fn from_sign(sign: Option<i8>) -> Self {
        match sign {
            Some(1) => SortOrder::Ascending,
            Some(-1) => SortOrder::Descending,
            _ => SortOrder::Unsorted,
        }
    }

    /// Opposite direction; `Unsorted` stays unsorted.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Unsorted => SortOrder::Unsorted,
        }
    }

    /// Next state in the cycle Unsorted → Ascending → Descending → Unsorted.
    pub fn cycled(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
            SortOrder::Unsorted => "none",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" | "1" => Ok(SortOrder::Ascending),
            "desc" | "descending" | "-1" => Ok(SortOrder::Descending),
            "none" | "unsorted" => Ok(SortOrder::Unsorted),
            other => Err(ParseEnumError::new("sort order", other)),
        }
    }
}

/// Which field to sort by and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    /// Field to compare; `None` leaves the collection in insertion order.
    pub field: Option<FieldPath>,
    /// Direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Sort by `field` in `order`.
    pub fn new(field: FieldPath, order: SortOrder) -> Self {
        Self {
            field: Some(field),
            order,
        }
    }

    /// No sorting.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when applying this spec can reorder records.
    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.order != SortOrder::Unsorted
    }
}

// ===== Mode flags =====

/// Presentation of the visible records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One record per row.
    #[default]
    List,
    /// Records arranged in columns.
    Grid,
}

impl Layout {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            Layout::List => Layout::Grid,
            Layout::Grid => Layout::List,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::List => "list",
            Layout::Grid => "grid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Layout::List),
            "grid" => Ok(Layout::Grid),
            other => Err(ParseEnumError::new("layout", other)),
        }
    }
}

/// Where the paginator is placed relative to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginatorPosition {
    /// Above the content.
    Top,
    /// Below the content.
    #[default]
    Bottom,
    /// Above and below.
    Both,
}

impl PaginatorPosition {
    /// Whether a paginator is rendered above the content.
    ///
    /// Literal rule: position is not `bottom`, or is `both`.
    #[allow(clippy::nonminimal_bool)]
    pub fn shows_top(self) -> bool {
        self != PaginatorPosition::Bottom || self == PaginatorPosition::Both
    }

    /// Whether a paginator is rendered below the content.
    ///
    /// Literal rule: position is not `top`, or is `both`.
    #[allow(clippy::nonminimal_bool)]
    pub fn shows_bottom(self) -> bool {
        self != PaginatorPosition::Top || self == PaginatorPosition::Both
    }
}

impl FromStr for PaginatorPosition {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(PaginatorPosition::Top),
            "bottom" => Ok(PaginatorPosition::Bottom),
            "both" => Ok(PaginatorPosition::Both),
            other => Err(ParseEnumError::new("paginator position", other)),
        }
    }
}

/// Windowing mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowMode {
    /// Slice the collection into pages.
    pub paginator: bool,
    /// The supplied collection already holds only the current page.
    pub lazy: bool,
}

impl WindowMode {
    /// Non-paginated: everything is visible.
    pub fn all() -> Self {
        Self::default()
    }

    /// Paginated locally over the full collection.
    pub fn paginated() -> Self {
        Self {
            paginator: true,
            lazy: false,
        }
    }

    /// Paginated with server-side windowing.
    pub fn lazy() -> Self {
        Self {
            paginator: true,
            lazy: true,
        }
    }
}
