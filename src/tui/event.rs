//! Event handling for the TUI
//!
//! Polls crossterm for key presses and resizes on the calling thread, and
//! yields a tick whenever the tick interval elapses without input.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic refresh
    Tick,
}

/// Synchronous event source
pub struct EventPoller {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventPoller {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Block until the next event or tick
    pub fn next(&mut self) -> io::Result<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    // Ignore key releases reported on some platforms
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        return Ok(Event::Key(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        return Ok(Event::Resize(width, height));
                    }
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
        }
    }
}

impl Default for EventPoller {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
