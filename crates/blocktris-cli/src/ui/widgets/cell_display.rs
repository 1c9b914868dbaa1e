use blocktris_engine::BlockKind;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// What a single on-screen cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Ghost,
    Filled(BlockKind),
}

impl Tile {
    /// Maps a grid cell id (0 = empty) to a tile.
    pub fn from_cell_id(id: u8) -> Self {
        BlockKind::from_id(id).map_or(Self::Empty, Self::Filled)
    }
}

/// Renders one [`Tile`] as a two-column terminal cell.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub fn from_tile(tile: Tile, show_dots: bool) -> Self {
        let (style, symbol) = match tile {
            Tile::Empty if show_dots => (style::EMPTY_DOT, "."),
            Tile::Empty => (style::EMPTY, ""),
            Tile::Ghost => (style::GHOST, "[]"),
            Tile::Filled(kind) => (style::block(kind), ""),
        };
        Self { style, symbol }
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // A Paragraph fills the whole area, not just the symbol's cells.
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_from_cell_id() {
        assert_eq!(Tile::from_cell_id(0), Tile::Empty);
        assert_eq!(Tile::from_cell_id(BlockKind::T.id()), Tile::Filled(BlockKind::T));
        assert_eq!(Tile::from_cell_id(200), Tile::Empty);
    }
}
