//! TUI rendering and terminal management (impure shell).
//!
//! Everything impure lives here: the terminal, the crossterm event
//! loop, and wall-clock reads. The loop's poll timeout is the only
//! timer in the program — on every expiry it hands `Instant::now()` to
//! the pure state layer, which decides whether any deadline fired.

pub mod constants;
mod help;
mod helpers;
mod laptop;
pub mod layout;
mod panels;
mod phone;
pub mod styles;

pub use layout::{compute_layout, render_app, DeskLayout};
pub use styles::{ColorConfig, Palette};

use std::io::{self, Stdout};
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;
use tracing::info;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::content::PortfolioContent;
use crate::state::{handle_contact_key, handle_key_action, handle_mouse, AppState, HitAreas};
use crate::view::constants::POLL_INTERVAL;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over the backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Hit areas recorded by the last render, for mouse handling.
    hit_areas: HitAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and
    /// mouse capture enabled.
    pub fn new(
        config: &ResolvedConfig,
        content: PortfolioContent,
        no_color: bool,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, config, content, no_color))
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits. Event-driven: redraws happen on
    /// input events and on timer expirations that actually changed
    /// state; an idle carousel consumes no render cycles while paused.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        handle_mouse(&mut self.app_state, &self.hit_areas, mouse, Instant::now());
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.app_state.on_timer(Instant::now()) {
                // Timer expired and something (carousel tick, form
                // deadline, manual-window expiry) changed.
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an application around an existing terminal.
    ///
    /// This is the backend-agnostic constructor used by `new` and by
    /// tests running against `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        content: PortfolioContent,
        no_color: bool,
    ) -> Self {
        Self {
            terminal,
            app_state: AppState::new(content, config, Instant::now()),
            key_bindings: KeyBindings::with_overrides(&config.keybindings),
            colors: ColorConfig::from_env_and_args(no_color),
            hit_areas: HitAreas::default(),
        }
    }

    /// Handle a single keyboard event.
    ///
    /// Returns `true` if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while the form is capturing input.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let now = Instant::now();

        // Any key dismisses the help overlay.
        if self.app_state.help_visible {
            self.app_state.toggle_help();
            return false;
        }

        // The contact form captures printable input before bindings.
        if handle_contact_key(&mut self.app_state, key, now) {
            return false;
        }

        // Normalize kind/state so Repeat events match bindings too.
        let normalized = KeyEvent::new(key.code, key.modifiers);
        match self.key_bindings.get(normalized) {
            Some(action) => handle_key_action(&mut self.app_state, action, now),
            None => false,
        }
    }

    /// Render the current state and record this frame's hit areas.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let colors = self.colors;
        let mut areas = HitAreas::default();
        self.terminal.draw(|frame| {
            areas = render_app(frame, state, colors);
        })?;
        self.hit_areas = areas;
        Ok(())
    }

    /// Read access to the state, for assertions in tests.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point: it sets up the terminal, runs the
/// event loop, and restores the terminal on every exit path.
///
/// Note: logging must be initialized by the caller first.
pub fn run_with_config(
    config: ResolvedConfig,
    content: PortfolioContent,
    no_color: bool,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(&config, content, no_color)?;
    info!("Entering main loop");

    // Run the app and ensure cleanup happens even on error.
    let result = app.run();

    restore_terminal()?;
    result
}

/// Restore the terminal to its normal state.
///
/// Disables raw mode and mouse capture, leaves the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }
}
