//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::store::TransactionStore;

use super::app::App;
use super::event::{Event, EventPoller};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
///
/// The store is re-read at startup, on every tick and whenever the user
/// asks for a refresh.
pub fn run_dashboard(store: &dyn TransactionStore, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, store, settings);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, store: &dyn TransactionStore, settings: &Settings) -> Result<()> {
    let mut app = App::new(store, settings);
    let mut events = EventPoller::default();

    app.refresh(Local::now().date_naive());

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        match events.next()? {
            Event::Key(key) => {
                if app.handle_key(key) {
                    app.refresh(Local::now().date_naive());
                }
            }
            Event::Tick => app.refresh(Local::now().date_naive()),
            Event::Resize(_, _) => {}
        }
    }

    Ok(())
}
