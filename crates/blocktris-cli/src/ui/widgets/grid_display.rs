use std::iter;

use blocktris_engine::{Block, GameState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, Tile};

const VISIBLE_ROWS: usize = GameState::ROWS - GameState::HIDDEN_ROWS;

/// The visible part of the grid with the current block and its ghost drawn
/// on top.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    game: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self {
            game,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        GameState::COLUMNS as u16 * CellDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        VISIBLE_ROWS as u16 * CellDisplay::HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Composes the tiles for rows `HIDDEN_ROWS..ROWS`, top to bottom.
///
/// The current block is drawn over its ghost, and tiles in hidden rows are
/// dropped.
pub fn visible_tiles(game: &GameState, show_ghost: bool) -> Vec<Vec<Tile>> {
    let mut tiles: Vec<Vec<Tile>> = game
        .grid()
        .rows_iter()
        .map(|row| row.iter().copied().map(Tile::from_cell_id).collect())
        .collect();

    let mut overlay = |block: &Block, tile: Tile| {
        for pos in block.tile_positions() {
            if let (Ok(r), Ok(c)) = (usize::try_from(pos.row), usize::try_from(pos.column))
                && let Some(cell) = tiles.get_mut(r).and_then(|row| row.get_mut(c))
            {
                *cell = tile;
            }
        }
    };

    if !game.is_game_over() {
        if show_ghost {
            overlay(&game.ghost_block(), Tile::Ghost);
        }
        let current = game.current_block();
        overlay(current, Tile::Filled(current.kind()));
    }

    tiles.split_off(GameState::HIDDEN_ROWS)
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..GameState::COLUMNS).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..VISIBLE_ROWS).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let screen_rows = area
            .layout::<VISIBLE_ROWS>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ GameState::COLUMNS }>(&horizontal));

        for (screen_row, tiles) in iter::zip(screen_rows, visible_tiles(self.game, true)) {
            for (area, tile) in iter::zip(screen_row, tiles) {
                CellDisplay::from_tile(tile, true).render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blocktris_engine::BlockSeed;

    use super::*;

    fn game() -> GameState {
        GameState::with_seed(BlockSeed::from_bytes([9; 16]))
    }

    #[test]
    fn test_only_visible_rows_are_composed() {
        let tiles = visible_tiles(&game(), true);
        assert_eq!(tiles.len(), VISIBLE_ROWS);
        assert!(tiles.iter().all(|row| row.len() == GameState::COLUMNS));
    }

    #[test]
    fn test_current_block_and_ghost_are_drawn() {
        let game = game();
        let kind = game.current_block().kind();
        let tiles = visible_tiles(&game, true);

        let filled = tiles.iter().flatten().filter(|t| **t == Tile::Filled(kind)).count();
        let ghosts = tiles.iter().flatten().filter(|t| **t == Tile::Ghost).count();
        assert_eq!(filled, 4);
        assert_eq!(ghosts, 4);

        let tiles = visible_tiles(&game, false);
        assert!(!tiles.iter().flatten().any(|t| *t == Tile::Ghost));
    }

    #[test]
    fn test_locked_cells_are_shown() {
        let mut game = game();
        let kind = game.current_block().kind();
        game.drop_block();
        let tiles = visible_tiles(&game, false);
        let bottom = &tiles[VISIBLE_ROWS - 1];
        assert!(bottom.contains(&Tile::Filled(kind)));
        assert!(bottom.iter().all(|t| matches!(t, Tile::Empty | Tile::Filled(_))));
    }
}
