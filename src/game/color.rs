/// Canonical cell color. Input tokens and on-screen styling are derived from
/// this; equality is by variant, never by appearance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

impl Color {
    /// The default palette, in legend order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
    ];

    /// Single-letter token shown in the legend and typed by the player.
    pub fn token(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Cyan => 'c',
            Color::Magenta => 'm',
        }
    }

    /// Inverse of `token`. Unrecognized characters map to `None`.
    pub fn from_token(token: char) -> Option<Color> {
        match token.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'c' => Some(Color::Cyan),
            'm' => Some(Color::Magenta),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
        }
    }
}
