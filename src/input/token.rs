use crossterm::event::KeyCode;

use crate::game::Color;

/// Raw single-character token as typed by the player, before any meaning is
/// attached. Kept separate from `Color` so unrecognized input stays
/// representable instead of vanishing into a lookup failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InputToken(pub char);

/// What an in-game token asks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    Color(Color),
    Quit,
    Unrecognized,
}

impl InputToken {
    /// Tokens come only from character keys; navigation keys and modifiers
    /// carry no token.
    pub fn from_key(code: KeyCode) -> Option<InputToken> {
        match code {
            KeyCode::Char(ch) => Some(InputToken(ch)),
            _ => None,
        }
    }

    /// Total mapping from raw token to selection. Anything that is neither a
    /// palette token nor the quit key is `Unrecognized`, never a crash.
    pub fn selection(self) -> Selection {
        let ch = self.0.to_ascii_lowercase();
        if ch == 'q' {
            return Selection::Quit;
        }
        match Color::from_token(ch) {
            Some(color) => Selection::Color(color),
            None => Selection::Unrecognized,
        }
    }
}
