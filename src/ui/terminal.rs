// src/ui/terminal.rs
//! Terminal setup and teardown. Raw mode, the alternate screen and mouse
//! capture are undone when the guard drops, on early returns and on panics.

use std::{
    io::{self, Stdout},
    panic,
};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

/// Owns the terminal and restores it on drop.
pub struct TerminalGuard<B: Backend> {
    terminal: Terminal<B>,
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard<CrosstermBackend<Stdout>> {
    /// Enter raw mode and the alternate screen with mouse capture.
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };
        match setup() {
            Ok(terminal) => Ok(Self::with_restore(terminal, restore_terminal)),
            Err(e) => {
                let _ = restore_terminal();
                Err(e)
            }
        }
    }
}

impl<B: Backend> TerminalGuard<B> {
    /// Wrap an already prepared terminal; `restore` runs on drop.
    pub fn with_restore(terminal: Terminal<B>, restore: fn() -> io::Result<()>) -> Self {
        Self { terminal, restore }
    }

    pub fn terminal(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Drop for TerminalGuard<B> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            log::error!("failed to restore terminal: {e}");
        }
    }
}

/// Undo every setup step. Each step is attempted even if an earlier one
/// fails; the first error is returned.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
