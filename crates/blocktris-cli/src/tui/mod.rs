//! Terminal runtime shared by interactive commands.
//!
//! The app decides the tick interval; the runtime only interleaves ticks,
//! key input and redraws.

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
