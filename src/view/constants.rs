//! Layout dimension constants for TUI rendering.

/// Height of the toolbar (layout toggle and sort state) in lines.
pub const TOOLBAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one pager in lines.
pub const PAGINATOR_HEIGHT: u16 = 1;

/// Vertical space taken by a grid cell's border.
pub const GRID_CELL_BORDER_HEIGHT: u16 = 2;

/// Fallback column count when the configured grid has none.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Width of the loading overlay popup in columns.
pub const LOADING_POPUP_WIDTH: u16 = 20;

/// Height of the loading overlay popup in lines (border + text).
pub const LOADING_POPUP_HEIGHT: u16 = 3;
