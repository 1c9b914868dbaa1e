use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Trait for TUI applications run by [`Tui::run`](super::Tui::run).
pub trait App {
    /// Interval between two [`App::tick`] calls.
    ///
    /// Queried before every wait, so a new value applies from the next tick on.
    fn tick_interval(&self) -> Duration;

    /// Returns whether the runtime should stop.
    fn should_exit(&self) -> bool;

    /// Handles a key press. Repeats and releases are filtered out.
    fn handle_key(&mut self, key: KeyEvent);

    /// Advances time-driven state.
    fn tick(&mut self);

    fn draw(&self, frame: &mut Frame);
}
