use crate::{
    BlockSeed,
    core::{
        block::{Block, BlockKind},
        game_grid::GameGrid,
    },
    engine::{block_queue::BlockQueue, game_action::GameAction},
};

/// Lifecycle of a game. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum GameStatus {
    #[default]
    Active,
    GameOver,
}

/// A complete game: grid, block queue, current and held block, score.
///
/// Every command runs synchronously and enforces one invariant: all tiles
/// of the current block are inside the grid and over empty cells. Moves and
/// rotations that would break it are reverted silently. A blocked downward
/// move locks the block instead.
///
/// Once the game is over, every command is a no-op and the last block stays
/// where it locked.
///
/// # Example
///
/// ```
/// use blocktris_engine::GameState;
///
/// let mut game = GameState::new();
/// game.move_block_left();
/// game.rotate_block_cw();
/// game.drop_block();
///
/// assert_eq!(game.placed_blocks(), 1);
/// assert!(!game.is_game_over());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GameGrid,
    queue: BlockQueue,
    current_block: Block,
    held_block: Option<Block>,
    score: usize,
    placed_blocks: usize,
    can_hold: bool,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub const ROWS: usize = 22;
    pub const COLUMNS: usize = 10;
    /// Rows at the top of the grid that are not part of the visible field.
    /// A lock that leaves any of them occupied ends the game.
    pub const HIDDEN_ROWS: usize = 2;

    /// Starts a new game with a randomly seeded queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queue(BlockQueue::new())
    }

    #[must_use]
    pub fn with_seed(seed: BlockSeed) -> Self {
        Self::with_queue(BlockQueue::with_seed(seed))
    }

    #[must_use]
    pub fn with_queue(mut queue: BlockQueue) -> Self {
        let grid = GameGrid::new(Self::ROWS, Self::COLUMNS);
        let current_block = spawned(&grid, queue.get_and_update());
        Self {
            grid,
            queue,
            current_block,
            held_block: None,
            score: 0,
            placed_blocks: 0,
            can_hold: true,
            status: GameStatus::Active,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &GameGrid {
        &self.grid
    }

    #[must_use]
    pub fn current_block(&self) -> &Block {
        &self.current_block
    }

    /// Returns where the current block would lock if hard-dropped now.
    #[must_use]
    pub fn ghost_block(&self) -> Block {
        let mut ghost = self.current_block;
        ghost.move_by(self.block_drop_distance(), 0);
        ghost
    }

    #[must_use]
    pub fn next_block(&self) -> BlockKind {
        self.queue.next_block()
    }

    #[must_use]
    pub fn held_block(&self) -> Option<BlockKind> {
        self.held_block.map(|block| block.kind())
    }

    /// Total number of rows cleared so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of blocks locked into the grid so far.
    #[must_use]
    pub fn placed_blocks(&self) -> usize {
        self.placed_blocks
    }

    #[must_use]
    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Returns `true` if every tile of `block` is inside the grid and over an
    /// empty cell.
    #[must_use]
    pub fn block_fits(&self, block: &Block) -> bool {
        block_fits(&self.grid, block)
    }

    /// Dispatches `action` to the matching command.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_block_left(),
            GameAction::MoveRight => self.move_block_right(),
            GameAction::MoveDown => self.move_block_down(),
            GameAction::Drop => self.drop_block(),
            GameAction::RotateCw => self.rotate_block_cw(),
            GameAction::RotateCcw => self.rotate_block_ccw(),
            GameAction::Hold => self.hold_block(),
        }
    }

    /// Sets the current block aside, or swaps it with the held one.
    ///
    /// Allowed once per spawned block; further calls before the next lock do
    /// nothing.
    pub fn hold_block(&mut self) {
        if !self.can_hold || self.is_game_over() {
            return;
        }

        let mut current = self.current_block;
        current.reset();
        let next = self
            .held_block
            .replace(current)
            .unwrap_or_else(|| self.queue.get_and_update());
        self.current_block = spawned(&self.grid, next);
        self.can_hold = false;
    }

    pub fn rotate_block_cw(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.current_block.rotate_cw();
        if !self.current_fits() {
            self.current_block.rotate_ccw();
        }
    }

    pub fn rotate_block_ccw(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.current_block.rotate_ccw();
        if !self.current_fits() {
            self.current_block.rotate_cw();
        }
    }

    pub fn move_block_left(&mut self) {
        self.try_shift(0, -1);
    }

    pub fn move_block_right(&mut self) {
        self.try_shift(0, 1);
    }

    /// Moves the current block down one row, locking it if it cannot move.
    pub fn move_block_down(&mut self) {
        if !self.try_shift(1, 0) && !self.is_game_over() {
            self.place_block();
        }
    }

    /// Number of rows the current block can fall before it collides.
    #[must_use]
    pub fn block_drop_distance(&self) -> i32 {
        let max_drop = i32::try_from(self.grid.rows()).unwrap_or(i32::MAX);
        self.current_block
            .tile_positions()
            .into_iter()
            .map(|pos| {
                let mut drop = 0;
                while self.grid.is_empty(pos.row + drop + 1, pos.column) {
                    drop += 1;
                }
                drop
            })
            .fold(max_drop, i32::min)
    }

    /// Drops the current block as far as it goes and locks it.
    pub fn drop_block(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.current_block.move_by(self.block_drop_distance(), 0);
        self.place_block();
    }

    fn current_fits(&self) -> bool {
        block_fits(&self.grid, &self.current_block)
    }

    /// Moves the current block, reverting if it no longer fits.
    ///
    /// Returns `true` if the block moved.
    fn try_shift(&mut self, rows: i32, columns: i32) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.current_block.move_by(rows, columns);
        if self.current_fits() {
            return true;
        }
        self.current_block.move_by(-rows, -columns);
        false
    }

    fn place_block(&mut self) {
        let id = self.current_block.id();
        for pos in self.current_block.tile_positions() {
            self.grid.set_cell(pos.row, pos.column, id);
        }
        self.score += self.grid.clear_full_rows();
        self.placed_blocks += 1;

        if self.hidden_rows_occupied() {
            self.status = GameStatus::GameOver;
            return;
        }
        self.current_block = spawned(&self.grid, self.queue.get_and_update());
        self.can_hold = true;
    }

    fn hidden_rows_occupied(&self) -> bool {
        (0..Self::HIDDEN_ROWS).any(|r| !self.grid.is_row_empty(r))
    }
}

fn block_fits(grid: &GameGrid, block: &Block) -> bool {
    block
        .tile_positions()
        .into_iter()
        .all(|pos| grid.is_position_empty(pos))
}

/// Resets `block` to its spawn state and nudges it down up to two rows,
/// keeping each step only while it still fits.
fn spawned(grid: &GameGrid, mut block: Block) -> Block {
    block.reset();
    for _ in 0..2 {
        block.move_by(1, 0);
        if !block_fits(grid, &block) {
            block.move_by(-1, 0);
        }
    }
    block
}
