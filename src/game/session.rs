use rand::Rng;

use crate::game::board::{Board, Recolor};
use crate::game::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    InProgress,
    Won,
    Quit,
}

/// Outcome of a submitted move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Color outside the palette, or the one already controlled. The turn
    /// counter does not advance; the caller should re-prompt.
    Rejected,
    /// The fill ran and the turn was counted.
    Applied { region_size: usize, solved: bool },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    /// Move submitted after the session reached `Won` or `Quit`.
    GameOver,
}

/// Error for operations that are only legal between games.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionError {
    GameInProgress,
}

/// One player's run of games at a fixed board size.
///
/// Owns the board and the turn counter for the current game, and the best
/// score across games. The best score survives `new_game` and is dropped on
/// `resize`, since scores at different sizes are not comparable.
pub struct GameSession {
    board: Board,
    palette: Vec<Color>,
    rows: usize,
    cols: usize,
    state: SessionState,
    turns: u32,
    region_size: usize,
    best_score: Option<u32>,
}

impl GameSession {
    /// Start a session with a fresh random board and the game in progress.
    pub fn new(rows: usize, cols: usize, palette: &[Color], rng: &mut impl Rng) -> Self {
        let board = Board::random(rows, cols, palette, rng);
        let region_size = board.origin_region_size();
        GameSession {
            board,
            palette: palette.to_vec(),
            rows,
            cols,
            state: SessionState::InProgress,
            turns: 0,
            region_size,
            best_score: None,
        }
    }

    /// Apply one color choice.
    ///
    /// Colors outside the palette and the currently controlled color come
    /// back as `Rejected` without advancing the turn counter. A successful
    /// fill counts one turn; solving the board wins the game and folds the
    /// turn count into the best score.
    pub fn submit_move(&mut self, target: Color) -> Result<MoveOutcome, MoveError> {
        if self.state != SessionState::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.palette.contains(&target) {
            return Ok(MoveOutcome::Rejected);
        }

        match self.board.recolor(target) {
            Recolor::NoOp => Ok(MoveOutcome::Rejected),
            Recolor::Filled { region_size, solved } => {
                self.turns += 1;
                self.region_size = region_size;
                if solved {
                    self.state = SessionState::Won;
                    self.best_score = Some(match self.best_score {
                        Some(best) => best.min(self.turns),
                        None => self.turns,
                    });
                }
                Ok(MoveOutcome::Applied { region_size, solved })
            }
        }
    }

    /// Abandon the session. Terminal; no further moves are accepted.
    pub fn quit(&mut self) {
        self.state = SessionState::Quit;
    }

    /// Start a fresh game at the configured size. Only legal once the
    /// previous game is over; the best score carries over.
    pub fn new_game(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            return Err(SessionError::GameInProgress);
        }
        self.board = Board::random(self.rows, self.cols, &self.palette, rng);
        self.region_size = self.board.origin_region_size();
        self.turns = 0;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Change the board dimensions used by the next `new_game`. Only legal
    /// between games; resets the best score.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            return Err(SessionError::GameInProgress);
        }
        assert!(rows >= 1 && cols >= 1, "board dimensions must be positive");
        self.rows = rows;
        self.cols = cols;
        self.best_score = None;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn controlling_color(&self) -> Color {
        self.board.origin_color()
    }

    pub fn region_size(&self) -> usize {
        self.region_size
    }

    /// Share of the board under the player's control, in whole percent.
    /// Measures the connected region, not a board-wide color tally.
    pub fn completion_percent(&self) -> usize {
        self.region_size * 100 / self.board.area()
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
