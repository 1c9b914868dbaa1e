use crossterm::event::{Event, KeyEventKind};

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Runs an [`App`] on the terminal until it asks to exit.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(),
        }
    }

    /// Takes over the terminal and drives `app`.
    ///
    /// - `TuiEvent::Tick`: `app.tick()`
    /// - `TuiEvent::Render`: `app.draw()`
    /// - key presses: `app.handle_key()`
    ///
    /// Terminal setup and restore (also on error) are left to `ratatui::run`.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next(app.tick_interval())? {
                    TuiEvent::Tick => app.tick(),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    TuiEvent::Crossterm(_) => {}
                }
            }
            Ok(())
        })
    }
}
