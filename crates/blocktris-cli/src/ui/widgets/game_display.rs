use std::time::Duration;

use blocktris_engine::GameState;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BlockPreview, GridDisplay, StatsDisplay, style};

/// Full play screen: held block and stats on the left, the grid in the
/// middle, the next block on the right.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a GameState,
    delay: Duration,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a GameState, delay: Duration) -> Self {
        Self { game, delay }
    }
}

fn panel(title: &str, border_color: ratatui::style::Color) -> Block<'_> {
    Block::bordered()
        .title(Line::from(title).centered())
        .padding(Padding::horizontal(1))
        .border_style(border_color)
        .style(style::DEFAULT)
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.game.is_game_over() {
            style::GAME_OVER_BORDER
        } else {
            style::ACTIVE_BORDER
        };

        let grid = GridDisplay::new(self.game).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let held = BlockPreview::default()
            .kind(self.game.held_block())
            .block(panel("HOLD", border_color));
        let next = BlockPreview::default()
            .kind(Some(self.game.next_block()))
            .block(panel("NEXT", border_color));
        let stats = StatsDisplay::new(self.game, self.delay).block(panel("STATS", border_color));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(u16::max(held.width(), stats.width())),
            Constraint::Length(grid.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [held_area, stats_area] = Layout::vertical([
            Constraint::Length(held.height()),
            Constraint::Length(stats.height()),
        ])
        .spacing(1)
        .areas(left_column);
        let held_area = held_area.layout::<1>(
            &Layout::horizontal([Constraint::Length(held.width())]).flex(Flex::End),
        )[0];
        let [grid_area] = Layout::vertical([Constraint::Length(grid.height())]).areas(center_column);
        let [next_area] = Layout::vertical([Constraint::Length(next.height())]).areas(right_column);

        let grid_width = grid.width();
        held.render(held_area, buf);
        stats.render(stats_area, buf);
        grid.render(grid_area, buf);
        next.render(next_area, buf);

        if self.game.is_game_over() {
            let popup = Block::new().style(style::GAME_OVER);
            let area = grid_area.centered(Constraint::Length(grid_width), Constraint::Length(4));
            let inner = popup.inner(area);
            Clear.render(area, buf);
            popup.render(area, buf);
            Text::from(vec![Line::from("GAME OVER"), Line::from("press r to restart")])
                .style(style::GAME_OVER)
                .centered()
                .render(inner.centered_vertically(Constraint::Length(2)), buf);
        }
    }
}
