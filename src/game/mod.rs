pub mod board;
pub mod color;
pub mod session;

pub use board::{Board, Recolor};
pub use color::Color;
pub use session::{GameSession, MoveError, MoveOutcome, SessionError, SessionState};
