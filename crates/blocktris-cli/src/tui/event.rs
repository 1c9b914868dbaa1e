use crossterm::event::Event as CrosstermEvent;

/// Events produced by [`EventLoop`](super::event_loop::EventLoop).
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The tick interval elapsed.
    Tick,
    /// State changed since the last draw.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
