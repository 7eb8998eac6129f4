// Default board size, in cells
pub const DEFAULT_BOARD_WIDTH: usize = 14;
pub const DEFAULT_BOARD_HEIGHT: usize = 9;

// Bounds enforced by the change-size screen
pub const MIN_BOARD_WIDTH: usize = 2;
pub const MAX_BOARD_WIDTH: usize = 26;
pub const MIN_BOARD_HEIGHT: usize = 2;
pub const MAX_BOARD_HEIGHT: usize = 16;
