//! Game rules built on top of [`crate::core`].
//!
//! - [`GameState`] - the state machine every caller talks to
//! - [`BlockQueue`] - next-block generator with one-step preview
//! - [`BlockSeed`] - seed for reproducible block sequences
//! - [`GameAction`] - the player commands as a value
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`] (optionally from a [`BlockSeed`])
//! 2. Move, rotate or hold the current block
//! 3. A blocked soft drop or a hard drop locks the block, clears full rows
//!    and spawns the next block
//! 4. Repeat until a lock leaves a block in the hidden rows
//!
//! The engine has no notion of time. Callers decide how often to call
//! [`GameState::move_block_down`].

pub use self::{block_queue::*, game_action::*, game_state::*};

mod block_queue;
mod game_action;
mod game_state;
