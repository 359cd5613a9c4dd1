//! Terminal form for `promptgen`.
//!
//! Renders a [`Session`] with ratatui + crossterm and maps key presses onto
//! session actions. The session is owned by the caller and driven from a
//! single thread: one key event is handled to completion before the next
//! frame, and deferred events (the unlock notice timeout) are fired by
//! calling [`Session::tick`] once per frame.
//!
//! # Quick start
//!
//! ```ignore
//! use promptgen::prelude::*;
//! use promptgen_tui::{Osc52Clipboard, TuiConfig, run_tui};
//!
//! let config = GeneratorConfig::default();
//! let mut session = Session::new(
//!     Catalog::builtin(),
//!     config.open_store(),
//!     Osc52Clipboard::stdout(),
//!     config,
//! );
//! run_tui(&mut session, &TuiConfig::default())?;
//! ```

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use promptgen::clipboard::Clipboard;
use promptgen::logging::LogBuffer;
use promptgen::session::Session;
use promptgen::store::KeyValueStore;
use ratatui::prelude::*;

mod app;
pub mod clipboard;
mod input;
mod render;

pub use clipboard::Osc52Clipboard;
pub use render::{centered_rect, log_level_style};

use app::App;
use input::handle_key_event;
use render::render;

/// Input poll timeout; also bounds how late a deferred event can fire.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the TUI.
#[derive(Default)]
pub struct TuiConfig {
    /// Optional log buffer from the tracing layer.
    ///
    /// When set, the TUI drains pending log lines once per frame into its
    /// log pane (toggled with `,`).
    pub log_buffer: Option<LogBuffer>,
}

/// Run the form until the user quits (blocking).
pub fn run_tui<S: KeyValueStore, C: Clipboard>(
    session: &mut Session<S, C>,
    config: &TuiConfig,
) -> io::Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    event_loop(&mut terminal, session, config)
}

/// Restores the terminal when dropped, on every exit path out of
/// [`run_tui`] including errors and panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = restore_screen(&mut io::stdout());
    }
}

fn restore_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

fn event_loop<B: Backend, S: KeyValueStore, C: Clipboard>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S, C>,
    config: &TuiConfig,
) -> io::Result<()> {
    let mut app = App::new();

    while !app.should_quit {
        session.tick(Instant::now());

        if let Some(ref log_buf) = config.log_buffer {
            log_buf.flush_into(&mut app.logs);
        }

        terminal.draw(|frame| render(frame, session, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(key, &mut app, session, Instant::now());
        }
    }
    Ok(())
}
