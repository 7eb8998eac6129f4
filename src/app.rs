use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::constants::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH,
    MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};
use crate::game::{Color, GameSession, MoveError, MoveOutcome, SessionState};
use crate::input::{InputToken, Selection};

/// Which screen the player is looking at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Menu,
    Game,
    Resize,
}

/// Presentation-side state: the active screen, the session (created on the
/// first game), and the board size used for the next game.
pub struct App {
    pub screen: Screen,
    pub session: Option<GameSession>,
    pub rows: usize,
    pub cols: usize,
    pub pending_rows: usize,
    pub pending_cols: usize,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            screen: Screen::Menu,
            session: None,
            rows: DEFAULT_BOARD_HEIGHT,
            cols: DEFAULT_BOARD_WIDTH,
            pending_rows: DEFAULT_BOARD_HEIGHT,
            pending_cols: DEFAULT_BOARD_WIDTH,
            message: None,
            should_quit: false,
        }
    }

    pub fn best_score(&self) -> Option<u32> {
        self.session.as_ref().and_then(|session| session.best_score())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.message = None;

        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Game => self.handle_game_key(key.code),
            Screen::Resize => self.handle_resize_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('s') | KeyCode::Char('S') => self.start_game(),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.pending_rows = self.rows;
                self.pending_cols = self.cols;
                self.screen = Screen::Resize;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::Menu;
            return;
        };

        match session.state() {
            SessionState::InProgress => {
                match InputToken::from_key(code).map(InputToken::selection) {
                    Some(Selection::Color(color)) => match session.submit_move(color) {
                        Ok(MoveOutcome::Applied { .. }) => {}
                        Ok(MoveOutcome::Rejected) => {
                            self.message =
                                Some("Already flooding that color, pick a different one.".into());
                        }
                        // Unreachable while the game is in progress.
                        Err(MoveError::GameOver) => {}
                    },
                    Some(Selection::Quit) => {
                        session.quit();
                        self.screen = Screen::Menu;
                    }
                    Some(Selection::Unrecognized) => {
                        self.message =
                            Some("Keys: r b g y c m flood a color, q quits.".into());
                    }
                    None => {}
                }
            }
            SessionState::Won => match code {
                KeyCode::Char('n') | KeyCode::Char('N') => self.start_game(),
                KeyCode::Char('m') | KeyCode::Char('M') => self.screen = Screen::Menu,
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                _ => {}
            },
            SessionState::Quit => self.screen = Screen::Menu,
        }
    }

    fn handle_resize_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.pending_rows = (self.pending_rows + 1).min(MAX_BOARD_HEIGHT);
            }
            KeyCode::Down => {
                self.pending_rows = (self.pending_rows - 1).max(MIN_BOARD_HEIGHT);
            }
            KeyCode::Right => {
                self.pending_cols = (self.pending_cols + 1).min(MAX_BOARD_WIDTH);
            }
            KeyCode::Left => {
                self.pending_cols = (self.pending_cols - 1).max(MIN_BOARD_WIDTH);
            }
            KeyCode::Enter => self.apply_resize(),
            KeyCode::Esc => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let mut rng = rand::thread_rng();
        match self.session.as_mut() {
            Some(session) => {
                // The menu and the won overlay are only reachable with the
                // game over, so this cannot fail.
                if session.new_game(&mut rng).is_err() {
                    return;
                }
            }
            None => {
                self.session = Some(GameSession::new(
                    self.rows,
                    self.cols,
                    &Color::ALL,
                    &mut rng,
                ));
            }
        }
        self.screen = Screen::Game;
    }

    fn apply_resize(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.resize(self.pending_rows, self.pending_cols).is_err() {
                self.message = Some("Finish the current game first.".into());
                return;
            }
        }
        self.rows = self.pending_rows;
        self.cols = self.pending_cols;
        self.screen = Screen::Menu;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
