//! Terminal host for the data view.
//!
//! Owns the crossterm terminal and the event loop, and draws the toolbar,
//! the data view and the status bar with ratatui.

pub mod constants;
pub mod data_view;
pub mod item;
pub mod paginator;
pub mod styles;
pub mod toolbar;

pub use data_view::{render_data_view, ViewOptions};
pub use item::ItemRenderer;
pub use paginator::{paginator_line, SpanLinkTemplate};
pub use styles::{ColorConfig, ViewStyles};

use crate::config::KeyBindings;
use crate::model::AppError;
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::Text,
    widgets::Paragraph,
    Frame, Terminal,
};
use serde_json::Value;
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

use constants::{STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};

/// App state of the terminal host: JSON records rendered to ratatui text.
pub type HostState = AppState<Value, Text<'static>>;

/// Failure of the terminal host.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Reading events or drawing failed.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The hosted application failed.
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// The running viewer: terminal, host state and key bindings.
///
/// Any ratatui backend works; tests draw into a `TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: HostState,
    key_bindings: KeyBindings,
    options: ViewOptions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Take over stdout: raw mode plus the alternate screen.
    pub fn new(
        app_state: HostState,
        key_bindings: KeyBindings,
        options: ViewOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, app_state, key_bindings, options))
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application drawing to `terminal`.
    ///
    /// Does not touch terminal modes; use with `TestBackend` in tests.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: HostState,
        key_bindings: KeyBindings,
        options: ViewOptions,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            options,
        }
    }

    /// Block on terminal events until the quit key. Redraws after every key press and resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Dispatch a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.app_state.handle_key(key, &self.key_bindings);
        self.app_state.should_quit()
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            options,
            ..
        } = self;
        terminal.draw(|frame| render_app(frame, app_state, options))?;
        Ok(())
    }

    /// The application state.
    pub fn app_state(&self) -> &HostState {
        &self.app_state
    }

    /// The terminal, for inspecting a test backend's buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Render toolbar, data view and status bar.
pub fn render_app(frame: &mut Frame, state: &mut HostState, options: &ViewOptions) {
    let [toolbar_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(TOOLBAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    // Owned lines first; the render pass borrows the view mutably
    let toolbar = toolbar::toolbar_line(state.layout_options(), state.view().sort(), &options.styles);
    let status = toolbar::status_line(state.view().total_records(), &options.styles);

    frame.render_widget(Paragraph::new(toolbar), toolbar_area);
    let pass = state.view_mut().render();
    render_data_view(frame, content_area, &pass, options);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Show `app_state` until the user quits.
///
/// The terminal is restored whether setup, the loop, or neither failed.
/// Install the tracing subscriber first; nothing may print to stdout here.
pub fn run(
    app_state: HostState,
    key_bindings: KeyBindings,
    options: ViewOptions,
) -> Result<(), TuiError> {
    let result =
        TuiApp::new(app_state, key_bindings, options).and_then(|mut app| app.run());
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
