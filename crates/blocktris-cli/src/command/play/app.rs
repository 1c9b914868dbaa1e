use std::time::Duration;

use blocktris_engine::{BlockSeed, GameAction, GameState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng as _;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::gravity::Gravity;
use crate::{
    tui::App,
    ui::widgets::{GameDisplay, KeyBinding, KeyBindingDisplay},
};

const PLAYING_KEYS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑", "Z"], "Rotate"),
    (&["C"], "Hold"),
    (&["Space"], "Drop"),
    (&["Q"], "Quit"),
];

const GAME_OVER_KEYS: &[KeyBinding] = &[(&["R"], "New Game"), (&["Q"], "Quit")];

/// What a key press means to the play screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Game(GameAction),
    Restart,
    Quit,
}

fn key_command(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Left => Command::Game(GameAction::MoveLeft),
        KeyCode::Right => Command::Game(GameAction::MoveRight),
        KeyCode::Down => Command::Game(GameAction::MoveDown),
        KeyCode::Up => Command::Game(GameAction::RotateCw),
        KeyCode::Char('z' | 'Z') => Command::Game(GameAction::RotateCcw),
        KeyCode::Char('c' | 'C') => Command::Game(GameAction::Hold),
        KeyCode::Char(' ') => Command::Game(GameAction::Drop),
        KeyCode::Char('r' | 'R') => Command::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[derive(Debug)]
pub(crate) struct PlayApp {
    seed: BlockSeed,
    game: GameState,
    gravity: Gravity,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(seed: BlockSeed, gravity: Gravity) -> Self {
        Self {
            seed,
            game: GameState::with_seed(seed),
            gravity,
            is_exiting: false,
        }
    }

    pub(crate) fn seed(&self) -> BlockSeed {
        self.seed
    }

    pub(crate) fn game(&self) -> &GameState {
        &self.game
    }

    fn restart(&mut self) {
        self.seed = rand::rng().random();
        self.game = GameState::with_seed(self.seed);
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Game(action) => self.game.apply(action),
            Command::Restart if self.game.is_game_over() => self.restart(),
            Command::Restart => {}
            Command::Quit => self.is_exiting = true,
        }
    }
}

impl App for PlayApp {
    fn tick_interval(&self) -> Duration {
        self.gravity.delay(self.game.score())
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = key_command(key) {
            self.run_command(command);
        }
    }

    fn tick(&mut self) {
        self.game.move_block_down();
    }

    fn draw(&self, frame: &mut Frame) {
        let bindings = if self.game.is_game_over() {
            GAME_OVER_KEYS
        } else {
            PLAYING_KEYS
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(24), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(GameDisplay::new(&self.game, self.tick_interval()), main_area);
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }
}
