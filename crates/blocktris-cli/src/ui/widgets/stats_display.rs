use std::{iter, time::Duration};

use blocktris_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Score panel: rows cleared, blocks placed, current descent delay and status.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    game: &'a GameState,
    delay: Duration,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(game: &'a GameState, delay: Duration) -> Self {
        Self {
            game,
            delay,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        // `rows()` always yields `ROW_COUNT` entries
        ROW_COUNT + super::block_vertical_margin(self.block.as_ref())
    }

    fn rows(&self) -> [Option<(&'static str, String)>; ROW_COUNT as usize] {
        let status = if self.game.is_game_over() {
            "OVER"
        } else {
            "PLAYING"
        };
        [
            Some(("SCORE:", self.game.score().to_string())),
            Some(("BLOCKS:", self.game.placed_blocks().to_string())),
            None,
            Some(("DELAY:", format!("{}ms", self.delay.as_millis()))),
            Some(("STATUS:", status.to_owned())),
        ]
    }
}

const ROW_COUNT: u16 = 5;

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let row_areas = Layout::vertical((0..ROW_COUNT).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(self.rows(), row_areas.iter().copied()) {
            let Some((label, value)) = row else {
                continue;
            };
            let [label_area, value_area] =
                area.layout(&Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]));
            Line::styled(label, style)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value, style)
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
