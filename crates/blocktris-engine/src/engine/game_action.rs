use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A player command accepted by [`GameState::apply`](super::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameAction {
    #[display("move left")]
    MoveLeft,
    #[display("move right")]
    MoveRight,
    /// Soft drop by one row; locks the block if it cannot descend.
    #[display("move down")]
    MoveDown,
    /// Hard drop: fall as far as possible and lock.
    #[display("drop")]
    Drop,
    #[display("rotate clockwise")]
    RotateCw,
    #[display("rotate counterclockwise")]
    RotateCcw,
    #[display("hold")]
    Hold,
}

impl GameAction {
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Drop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Hold,
    ];
}

impl Distribution<GameAction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameAction {
        GameAction::ALL[rng.random_range(0..GameAction::LEN)]
    }
}
