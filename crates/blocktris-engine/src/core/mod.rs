//! Static game data: positions, block shapes and the occupancy grid.
//!
//! Nothing in this module decides legality on its own. [`Block`] moves and
//! rotates freely, and [`GameGrid`] only answers occupancy questions; the
//! rules that tie them together live in [`crate::engine`].

pub use self::{block::*, game_grid::*, position::*};

pub(crate) mod block;
pub(crate) mod game_grid;
pub(crate) mod position;
