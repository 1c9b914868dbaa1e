use blocktris_engine::BlockKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, Tile};

/// A single block kind drawn in its spawn rotation, used for the next and
/// held panels. Renders as an empty panel if no kind is set.
#[derive(Debug, Default)]
pub struct BlockPreview<'a> {
    kind: Option<BlockKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BlockPreview<'a> {
    pub fn kind(self, kind: Option<BlockKind>) -> Self {
        Self { kind, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Occupancy mask of `kind` in rotation 0, trimmed to its bounding box.
///
/// Returned as rows of booleans, top to bottom.
pub fn preview_mask(kind: BlockKind) -> Vec<Vec<bool>> {
    let tiles = kind.rotation_states()[0];
    let min_row = tiles.iter().map(|p| p.row).min().unwrap_or(0);
    let max_row = tiles.iter().map(|p| p.row).max().unwrap_or(0);
    let min_col = tiles.iter().map(|p| p.column).min().unwrap_or(0);
    let max_col = tiles.iter().map(|p| p.column).max().unwrap_or(0);

    (min_row..=max_row)
        .map(|r| {
            (min_col..=max_col)
                .map(|c| tiles.iter().any(|p| p.row == r && p.column == c))
                .collect()
        })
        .collect()
}

impl Widget for BlockPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(kind) = self.kind else {
            return;
        };
        let mask = preview_mask(kind);
        let rows = u16::try_from(mask.len()).unwrap_or(0);
        let columns = u16::try_from(mask.first().map_or(0, Vec::len)).unwrap_or(0);

        let preview_area = area.centered(
            Constraint::Length(columns * CellDisplay::WIDTH),
            Constraint::Length(rows * CellDisplay::HEIGHT),
        );
        let horizontal =
            Layout::horizontal((0..columns).map(|_| Constraint::Length(CellDisplay::WIDTH)))
                .flex(Flex::Center);
        let vertical = Layout::vertical((0..rows).map(|_| Constraint::Length(CellDisplay::HEIGHT)));

        let filled = CellDisplay::from_tile(Tile::Filled(kind), false);
        let empty = CellDisplay::from_tile(Tile::Empty, false);
        for (row_area, mask_row) in preview_area.layout_vec(&vertical).into_iter().zip(&mask) {
            for (cell_area, occupied) in row_area.layout_vec(&horizontal).into_iter().zip(mask_row)
            {
                let cell = if *occupied { &filled } else { &empty };
                cell.render(cell_area, buf);
            }
        }
    }
}
