use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::position::Position;

/// The seven block variants.
///
/// The discriminant is the block's id, which is also the value written into
/// [`GameGrid`](super::game_grid::GameGrid) cells when the block locks.
/// Id `0` is reserved for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockKind {
    /// I-block.
    I = 1,
    /// J-block.
    J = 2,
    /// L-block.
    L = 3,
    /// O-block.
    O = 4,
    /// S-block.
    S = 5,
    /// T-block.
    T = 6,
    /// Z-block.
    Z = 7,
}

impl Distribution<BlockKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BlockKind {
        BlockKind::ALL[rng.random_range(0..BlockKind::LEN)]
    }
}

impl BlockKind {
    /// Number of block variants (7).
    pub const LEN: usize = 7;

    /// Every variant, ordered by id.
    pub const ALL: [Self; Self::LEN] = [
        BlockKind::I,
        BlockKind::J,
        BlockKind::L,
        BlockKind::O,
        BlockKind::S,
        BlockKind::T,
        BlockKind::Z,
    ];

    /// Returns the cell id of this variant (1-7).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a variant by cell id. Returns `None` for `0` and anything above `7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_engine::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_id(6), Some(BlockKind::T));
    /// assert_eq!(BlockKind::from_id(0), None);
    /// ```
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(BlockKind::I),
            2 => Some(BlockKind::J),
            3 => Some(BlockKind::L),
            4 => Some(BlockKind::O),
            5 => Some(BlockKind::S),
            6 => Some(BlockKind::T),
            7 => Some(BlockKind::Z),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            BlockKind::I => 'I',
            BlockKind::J => 'J',
            BlockKind::L => 'L',
            BlockKind::O => 'O',
            BlockKind::S => 'S',
            BlockKind::T => 'T',
            BlockKind::Z => 'Z',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(BlockKind::I),
            'J' => Some(BlockKind::J),
            'L' => Some(BlockKind::L),
            'O' => Some(BlockKind::O),
            'S' => Some(BlockKind::S),
            'T' => Some(BlockKind::T),
            'Z' => Some(BlockKind::Z),
            _ => None,
        }
    }

    /// Returns the tile layouts of this variant, one entry per rotation state.
    #[must_use]
    pub fn rotation_states(self) -> &'static [RotationState] {
        SHAPES[self.index()].rotations
    }

    /// Number of distinct rotation states (1 for O, 4 for every other variant).
    #[must_use]
    pub fn rotation_count(self) -> usize {
        self.rotation_states().len()
    }

    /// Offset applied on reset, placing the block's origin over the top rows.
    #[must_use]
    pub fn spawn_offset(self) -> Position {
        SHAPES[self.index()].spawn_offset
    }

    const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The four tile offsets of one rotation state, relative to the block origin.
pub type RotationState = [Position; 4];

/// A block: a fixed [`BlockKind`] plus its current rotation and offset.
///
/// `Block` is a plain value that moves and rotates without any legality
/// check. Whether the result fits is decided by
/// [`GameState`](crate::GameState), which reverts illegal changes.
///
/// # Example
///
/// ```
/// use blocktris_engine::{Block, BlockKind, Position};
///
/// let mut block = Block::new(BlockKind::T);
/// block.move_by(2, 1);
/// block.rotate_cw();
/// assert_eq!(block.rotation(), 1);
/// assert_eq!(block.offset(), Position::new(2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    rotation: usize,
    offset: Position,
}

impl Block {
    /// Creates a block of the given kind at its spawn offset, rotation 0.
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            rotation: 0,
            offset: kind.spawn_offset(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    #[must_use]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    #[must_use]
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Returns the absolute grid positions of the four tiles.
    #[must_use]
    pub fn tile_positions(&self) -> [Position; 4] {
        self.kind.rotation_states()[self.rotation].map(|tile| tile + self.offset)
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.kind.rotation_count();
    }

    pub fn rotate_ccw(&mut self) {
        let count = self.kind.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    pub fn move_by(&mut self, rows: i32, columns: i32) {
        self.offset = self.offset.offset_by(rows, columns);
    }

    /// Returns the block to rotation 0 at its spawn offset.
    pub fn reset(&mut self) {
        self.rotation = 0;
        self.offset = self.kind.spawn_offset();
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "kind#rotation@row,column" (e.g., "T#1@5,3")
        write!(
            f,
            "{}#{}@{},{}",
            self.kind, self.rotation, self.offset.row, self.offset.column
        )
    }
}

struct Shape {
    rotations: &'static [RotationState],
    spawn_offset: Position,
}

const fn p(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

// Indexed by `BlockKind::index()`.
const SHAPES: [Shape; BlockKind::LEN] = [
    // I-block
    Shape {
        rotations: &[
            [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
            [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
            [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
            [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
        ],
        spawn_offset: p(-1, 3),
    },
    // J-block
    Shape {
        rotations: &[
            [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
            [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
            [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
        ],
        spawn_offset: p(0, 3),
    },
    // L-block
    Shape {
        rotations: &[
            [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
            [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
            [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
        ],
        spawn_offset: p(0, 3),
    },
    // O-block
    Shape {
        rotations: &[[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]],
        spawn_offset: p(0, 4),
    },
    // S-block
    Shape {
        rotations: &[
            [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
            [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
            [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
            [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
        ],
        spawn_offset: p(0, 3),
    },
    // T-block
    Shape {
        rotations: &[
            [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
            [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
            [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
        ],
        spawn_offset: p(0, 3),
    },
    // Z-block
    Shape {
        rotations: &[
            [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
            [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
            [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
            [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
        ],
        spawn_offset: p(0, 3),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_stable_and_round_trip() {
        for (i, kind) in BlockKind::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(kind.id()), i + 1);
            assert_eq!(BlockKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(BlockKind::from_id(0), None);
        assert_eq!(BlockKind::from_id(8), None);
    }

    #[test]
    fn test_char_conversion() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_char(kind.as_char()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_char().to_string());
        }
        assert_eq!(BlockKind::from_char('X'), None);
        assert_eq!(BlockKind::from_char('t'), None);
    }

    #[test]
    fn test_rotation_counts() {
        for kind in BlockKind::ALL {
            let expected = if kind == BlockKind::O { 1 } else { 4 };
            assert_eq!(kind.rotation_count(), expected, "{kind}");
        }
    }

    #[test]
    fn test_every_rotation_state_has_four_distinct_tiles() {
        for kind in BlockKind::ALL {
            for (rotation, tiles) in kind.rotation_states().iter().enumerate() {
                let distinct: HashSet<_> = tiles.iter().copied().collect();
                assert_eq!(distinct.len(), 4, "{kind} rotation {rotation}");
            }
        }
    }

    #[test]
    fn test_spawn_tiles_are_inside_standard_width() {
        for kind in BlockKind::ALL {
            for tile in Block::new(kind).tile_positions() {
                assert!(tile.row >= 0, "{kind} spawns above the grid");
                assert!((0..10).contains(&tile.column), "{kind} spawns off the side");
            }
        }
    }

    #[test]
    fn test_tile_positions_apply_offset() {
        let block = Block::new(BlockKind::T);
        assert_eq!(
            block.tile_positions(),
            [p(0, 4), p(1, 3), p(1, 4), p(1, 5)]
        );

        let block = Block::new(BlockKind::I);
        assert_eq!(
            block.tile_positions(),
            [p(0, 3), p(0, 4), p(0, 5), p(0, 6)]
        );
    }

    #[test]
    fn test_rotate_cw_wraps_around() {
        let mut block = Block::new(BlockKind::J);
        for expected in [1, 2, 3, 0, 1] {
            block.rotate_cw();
            assert_eq!(block.rotation(), expected);
        }
    }

    #[test]
    fn test_rotate_ccw_wraps_around() {
        let mut block = Block::new(BlockKind::S);
        for expected in [3, 2, 1, 0, 3] {
            block.rotate_ccw();
            assert_eq!(block.rotation(), expected);
        }
    }

    #[test]
    fn test_o_block_rotation_is_identity() {
        let mut block = Block::new(BlockKind::O);
        let before = block.tile_positions();
        block.rotate_cw();
        assert_eq!(block.rotation(), 0);
        block.rotate_ccw();
        assert_eq!(block.rotation(), 0);
        assert_eq!(block.tile_positions(), before);
    }

    #[test]
    fn test_rotate_cw_then_ccw_round_trips() {
        for kind in BlockKind::ALL {
            let mut block = Block::new(kind);
            block.move_by(5, -2);
            for _ in 0..4 {
                let before = block;
                block.rotate_cw();
                block.rotate_ccw();
                assert_eq!(block, before);
                block.rotate_cw();
            }
        }
    }

    #[test]
    fn test_tile_positions_are_copies() {
        let block = Block::new(BlockKind::L);
        let mut tiles = block.tile_positions();
        tiles[0].row += 10;
        assert_eq!(block.tile_positions()[0], p(0, 5));
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut block = Block::new(BlockKind::Z);
        block.rotate_cw();
        block.move_by(7, 2);
        block.reset();
        assert_eq!(block, Block::new(BlockKind::Z));
        assert_eq!(block.offset(), BlockKind::Z.spawn_offset());
    }

    #[test]
    fn test_display_format() {
        let mut block = Block::new(BlockKind::T);
        block.rotate_cw();
        block.move_by(5, 0);
        assert_eq!(block.to_string(), "T#1@5,3");

        assert_eq!(Block::new(BlockKind::I).to_string(), "I#0@-1,3");
    }
}
