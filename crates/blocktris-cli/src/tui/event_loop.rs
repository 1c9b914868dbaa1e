use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Produces ticks at a caller-supplied interval, redraws after any change,
/// and terminal events in between.
#[derive(Debug)]
pub(super) struct EventLoop {
    last_tick: Instant,
    dirty: bool,
    /// Set after a tick; blocks the next tick until input has been polled.
    tick_fired: bool,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            // draw once before the first input arrives
            dirty: true,
            tick_fired: false,
        }
    }

    /// Blocks until the next tick is due, a redraw is pending, or a terminal
    /// event arrives.
    pub(super) fn next(&mut self, tick_interval: Duration) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.poll_timers(now, tick_interval) {
                return Ok(event);
            }

            // Zero when a tick is overdue, so pending input is still read
            // between two back-to-back ticks.
            let timeout = self.time_until_tick(now, tick_interval);
            let has_input = event::poll(timeout)?;
            self.input_polled();
            if !has_input {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn poll_timers(&mut self, now: Instant, tick_interval: Duration) -> Option<TuiEvent> {
        if !self.tick_fired && self.time_until_tick(now, tick_interval).is_zero() {
            self.last_tick = now;
            self.dirty = true;
            self.tick_fired = true;
            return Some(TuiEvent::Tick);
        }
        if self.dirty {
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    fn input_polled(&mut self) {
        self.tick_fired = false;
    }

    fn time_until_tick(&self, now: Instant, tick_interval: Duration) -> Duration {
        (self.last_tick + tick_interval).saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_renders_first_then_waits() {
        let mut events = EventLoop::new();
        let now = events.last_tick;
        assert!(events.poll_timers(now, INTERVAL).unwrap().is_render());
        assert!(events.poll_timers(now, INTERVAL).is_none());
        assert_eq!(events.time_until_tick(now, INTERVAL), INTERVAL);
    }

    #[test]
    fn test_tick_when_due_then_render() {
        let mut events = EventLoop::new();
        let start = events.last_tick;
        events.dirty = false;

        let later = start + INTERVAL;
        assert!(events.poll_timers(later, INTERVAL).unwrap().is_tick());
        assert_eq!(events.last_tick, later);
        assert!(events.poll_timers(later, INTERVAL).unwrap().is_render());
    }

    #[test]
    fn test_shorter_interval_fires_sooner() {
        let mut events = EventLoop::new();
        let start = events.last_tick;
        events.dirty = false;

        let later = start + Duration::from_millis(80);
        assert!(events.poll_timers(later, INTERVAL).is_none());
        assert!(
            events
                .poll_timers(later, Duration::from_millis(75))
                .unwrap()
                .is_tick()
        );
    }

    #[test]
    fn test_zero_interval_does_not_starve_render_or_input() {
        let mut events = EventLoop::new();
        let now = events.last_tick;

        for _ in 0..100 {
            assert!(events.poll_timers(now, Duration::ZERO).unwrap().is_tick());
            assert!(events.poll_timers(now, Duration::ZERO).unwrap().is_render());
            // No second tick until input has had its turn.
            assert!(events.poll_timers(now, Duration::ZERO).is_none());
            events.input_polled();
        }
    }
}
