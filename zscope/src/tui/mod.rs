// zscope/src/tui/mod.rs
pub mod app;
pub mod ui;

use std::io::{self, Write};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use anyhow::{Context, Result};
use futures::stream::StreamExt;
use log::debug;

use crate::tui::app::App;
use crate::ui::theme::ThemeMap;

/// Raw mode and the alternate screen, undone on every exit path.
struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, dropping the guard restores the terminal.
        let mut guard = Self { out, active: true };
        execute!(guard.out, EnterAlternateScreen).context("Failed to enter the alternate screen")?;
        Ok(guard)
    }

    /// Runs every cleanup step even if one fails, returning the first error.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode();
        let screen = execute!(self.out, LeaveAlternateScreen, Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Runs the interactive chart until the user quits.
///
/// The terminal is restored even when setup or the event loop fails.
pub async fn run_tui(app: App, theme_map: ThemeMap) -> Result<()> {
    let mut guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, app, &theme_map).await;

    let restored = guard.restore();
    outcome?;
    restored.context("Failed to restore the terminal")
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App, theme_map: &ThemeMap) -> Result<()> {
    let mut event_stream = event::EventStream::new();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app, theme_map))?;

        match event_stream.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
            None => {
                debug!("Terminal event stream closed");
                break;
            }
        }
    }

    Ok(())
}
