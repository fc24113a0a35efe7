//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Go to the first page. Default: g/Home
    FirstPage,
    /// Go to the previous page. Default: p/←/Page Up
    PrevPage,
    /// Go to the next page. Default: n/→/Page Down
    NextPage,
    /// Go to the last page. Default: G/End
    LastPage,
    /// Switch to the next larger rows-per-page option. Default: +
    MoreRows,
    /// Switch to the next smaller rows-per-page option. Default: -
    FewerRows,

    // Presentation
    /// Switch between list and grid layout. Default: v
    ToggleLayout,
    /// Cycle the sort order: none → asc → desc. Default: o
    CycleSortOrder,

    // Application
    /// Quit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action changes the page position.
    pub fn is_page_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::FirstPage
                | KeyAction::PrevPage
                | KeyAction::NextPage
                | KeyAction::LastPage
                | KeyAction::MoreRows
                | KeyAction::FewerRows
        )
    }
}
