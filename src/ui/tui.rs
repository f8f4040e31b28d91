// src/ui/tui.rs
//! Terminal setup and the main event loop.

use std::{
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::terminal::TerminalGuard;
use crate::app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the browser until the user quits. The guard restores the terminal
/// on every exit path.
pub fn run(mut app: App) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let terminal = guard.terminal();
    terminal.clear()?;
    log::info!("terminal ready ({:?})", terminal.size()?);

    let result = event_loop(terminal, &mut app);
    if let Err(e) = &result {
        log::error!("event loop failed: {e:#}");
    }
    result
}

fn event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.draw(f))?;
        let timeout = TICK_RATE.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.on_key(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                }
                CEvent::Mouse(mouse) => app.on_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
}
