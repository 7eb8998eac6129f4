use rand::Rng;

use crate::game::color::Color;

/// Result of a recolor request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Recolor {
    /// The target matched the origin color; nothing changed.
    NoOp,
    /// The origin region was repainted.
    Filled { region_size: usize, solved: bool },
}

/// Rectangular grid of colored cells. Dimensions are fixed at construction;
/// changing size means building a new board.
///
/// Cell (0, 0) is the origin: the player always controls the 4-connected
/// region of origin-colored cells reachable from it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Board {
    /// Build a board with every cell drawn independently and uniformly from
    /// `palette`. Dimensions and palette are caller-controlled; both must be
    /// non-empty.
    pub fn random(rows: usize, cols: usize, palette: &[Color], rng: &mut impl Rng) -> Self {
        assert!(rows >= 1 && cols >= 1, "board dimensions must be positive");
        assert!(!palette.is_empty(), "palette must not be empty");

        let cells = (0..rows * cols)
            .map(|_| palette[rng.gen_range(0..palette.len())])
            .collect();

        Board { rows, cols, cells }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Color>) -> Self {
        assert_eq!(cells.len(), rows * cols);
        Board { rows, cols, cells }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[self.idx(row, col)]
    }

    /// Color of the origin cell, i.e. the player's controlling color.
    pub fn origin_color(&self) -> Color {
        self.cells[0]
    }

    /// Repaint the player's region with `target`.
    ///
    /// Flood-fills from the origin over the 4-connected region of cells that
    /// match the origin's current color, writing `target` into each member
    /// exactly once; cells outside the region are never touched. Uses an
    /// explicit worklist, so memory is bounded by the board and neighbor
    /// access never leaves the grid.
    ///
    /// Returns the size of the player's region on the repainted board. The
    /// fill can merge the old region with cells that already held `target`,
    /// so this is recomputed afterwards rather than read off a counter kept
    /// during the fill.
    pub fn recolor(&mut self, target: Color) -> Recolor {
        let origin = self.origin_color();
        if target == origin {
            return Recolor::NoOp;
        }

        let mut frontier = vec![(0usize, 0usize)];
        while let Some((row, col)) = frontier.pop() {
            let i = self.idx(row, col);
            // A cell can be pushed by two of its neighbors; only the first
            // pop still matches the origin color.
            if self.cells[i] != origin {
                continue;
            }
            self.cells[i] = target;

            if row > 0 {
                frontier.push((row - 1, col));
            }
            if row + 1 < self.rows {
                frontier.push((row + 1, col));
            }
            if col > 0 {
                frontier.push((row, col - 1));
            }
            if col + 1 < self.cols {
                frontier.push((row, col + 1));
            }
        }

        Recolor::Filled {
            region_size: self.origin_region_size(),
            solved: self.is_solved(),
        }
    }

    /// True when every cell matches the origin cell.
    pub fn is_solved(&self) -> bool {
        let origin = self.origin_color();
        self.cells.iter().all(|&cell| cell == origin)
    }

    /// Whole-board tally of `color`, connected or not. Display helper only;
    /// the fill never consults this.
    pub fn color_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == color).count()
    }

    /// Size of the player's region, without mutating anything. Same traversal
    /// as `recolor`, tracking visits instead of overwriting colors.
    pub fn origin_region_size(&self) -> usize {
        let origin = self.origin_color();
        let mut seen = vec![false; self.cells.len()];
        let mut size = 0;
        let mut frontier = vec![(0usize, 0usize)];
        while let Some((row, col)) = frontier.pop() {
            let i = self.idx(row, col);
            if seen[i] || self.cells[i] != origin {
                continue;
            }
            seen[i] = true;
            size += 1;

            if row > 0 {
                frontier.push((row - 1, col));
            }
            if row + 1 < self.rows {
                frontier.push((row + 1, col));
            }
            if col > 0 {
                frontier.push((row, col - 1));
            }
            if col + 1 < self.cols {
                frontier.push((row, col + 1));
            }
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Color::{Blue, Green, Red, Yellow};

    fn board_from(rows: &[&[Color]]) -> Board {
        let cells: Vec<Color> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Board::from_cells(rows.len(), rows[0].len(), cells)
    }

    #[test]
    fn test_random_board_draws_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = [Red, Blue, Green];
        let board = Board::random(9, 14, &palette, &mut rng);

        assert_eq!(board.rows(), 9);
        assert_eq!(board.cols(), 14);
        assert_eq!(board.area(), 126);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert!(palette.contains(&board.get(row, col)));
            }
        }
    }

    #[test]
    fn test_recolor_same_color_is_noop() {
        let mut board = board_from(&[&[Red, Blue], &[Green, Yellow]]);
        let before = board.clone();

        assert_eq!(board.recolor(Red), Recolor::NoOp);
        assert_eq!(board, before);
    }

    #[test]
    fn test_recolor_floods_split_board() {
        // [[R, R], [B, B]] with red origin: recoloring blue floods everything.
        let mut board = board_from(&[&[Red, Red], &[Blue, Blue]]);

        let outcome = board.recolor(Blue);

        assert_eq!(
            outcome,
            Recolor::Filled {
                region_size: 4,
                solved: true
            }
        );
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(board.get(row, col), Blue);
            }
        }
    }

    #[test]
    fn test_recolor_checkerboard_touches_only_origin() {
        let mut board = board_from(&[
            &[Red, Blue, Red],
            &[Blue, Red, Blue],
            &[Red, Blue, Red],
        ]);

        let outcome = board.recolor(Blue);

        // Only the origin cell changed, and it merged with the two blue
        // neighbors that were already there.
        assert_eq!(
            outcome,
            Recolor::Filled {
                region_size: 3,
                solved: false
            }
        );
        assert_eq!(board.get(0, 0), Blue);
        assert_eq!(board.get(1, 1), Red);
        assert_eq!(board.get(2, 2), Red);
        assert_eq!(board.get(0, 2), Red);
        assert_eq!(board.get(2, 0), Red);
    }

    #[test]
    fn test_recolor_without_adjacent_target_changes_one_cell() {
        let mut board = board_from(&[&[Red, Blue], &[Blue, Red]]);

        let outcome = board.recolor(Green);

        assert_eq!(
            outcome,
            Recolor::Filled {
                region_size: 1,
                solved: false
            }
        );
        assert_eq!(board.get(0, 0), Green);
        assert_eq!(board.get(0, 1), Blue);
        assert_eq!(board.get(1, 0), Blue);
        assert_eq!(board.get(1, 1), Red);
    }

    #[test]
    fn test_recolor_leaves_disconnected_same_color_cells() {
        // The bottom-right red cell matches the origin color but is cut off
        // by the blue band, so the fill must not reach it.
        let mut board = board_from(&[
            &[Red, Red, Blue],
            &[Red, Blue, Green],
            &[Blue, Green, Red],
        ]);

        let outcome = board.recolor(Green);

        assert_eq!(
            outcome,
            Recolor::Filled {
                region_size: 3,
                solved: false
            }
        );
        assert_eq!(board.get(0, 0), Green);
        assert_eq!(board.get(0, 1), Green);
        assert_eq!(board.get(1, 0), Green);
        assert_eq!(board.get(2, 2), Red);
        // Untouched cells keep their exact colors.
        assert_eq!(board.get(0, 2), Blue);
        assert_eq!(board.get(1, 1), Blue);
        assert_eq!(board.get(2, 0), Blue);
        assert_eq!(board.get(1, 2), Green);
        assert_eq!(board.get(2, 1), Green);
    }

    #[test]
    fn test_recolor_can_grow_the_region() {
        // Recoloring to blue merges the origin with the adjacent blue run,
        // even though only one cell was rewritten.
        let mut board = board_from(&[&[Red, Blue, Blue, Green]]);

        let outcome = board.recolor(Blue);

        assert_eq!(
            outcome,
            Recolor::Filled {
                region_size: 3,
                solved: false
            }
        );
        assert_eq!(board.origin_region_size(), 3);
        assert_eq!(board.get(0, 3), Green);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = board_from(&[&[Red]]);

        assert!(board.is_solved());
        assert_eq!(
            board.recolor(Blue),
            Recolor::Filled {
                region_size: 1,
                solved: true
            }
        );
        assert_eq!(board.get(0, 0), Blue);
    }

    #[test]
    fn test_region_size_bounds_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut board = Board::random(8, 8, &Color::ALL, &mut rng);
            let origin = board.origin_color();
            let target = Color::ALL
                .into_iter()
                .find(|&color| color != origin)
                .unwrap();

            match board.recolor(target) {
                Recolor::Filled { region_size, .. } => {
                    assert!(region_size >= 1 && region_size <= board.area());
                    // Every recolored cell now carries the target color.
                    assert!(board.color_count(target) >= region_size);
                }
                Recolor::NoOp => panic!("target differs from origin"),
            }
        }
    }

    #[test]
    fn test_is_solved_iff_one_color_covers_the_area() {
        let uniform = board_from(&[&[Green, Green], &[Green, Green]]);
        assert!(uniform.is_solved());
        assert_eq!(uniform.color_count(Green), uniform.area());
        for color in Color::ALL {
            if color != Green {
                assert_eq!(uniform.color_count(color), 0);
            }
        }

        let mixed = board_from(&[&[Green, Green], &[Green, Red]]);
        assert!(!mixed.is_solved());
        assert!(Color::ALL
            .into_iter()
            .all(|color| mixed.color_count(color) != mixed.area()));
    }

    #[test]
    fn test_recolor_agrees_with_fresh_traversal() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let board = Board::random(6, 10, &Color::ALL, &mut rng);
            let before = board.origin_region_size();

            let origin = board.origin_color();
            let target = Color::ALL
                .into_iter()
                .find(|&color| color != origin)
                .unwrap();
            let mut mutated = board.clone();
            match mutated.recolor(target) {
                Recolor::Filled { region_size, .. } => {
                    // The reported size is exactly what a fresh traversal of
                    // the repainted board sees, and filling never shrinks
                    // the region.
                    assert_eq!(region_size, mutated.origin_region_size());
                    assert!(region_size >= before);
                }
                Recolor::NoOp => panic!("target differs from origin"),
            }
        }
    }

    #[test]
    fn test_repeated_recolors_terminate_and_solve() {
        // Alternate between two colors on a two-color board; the region can
        // only grow, so the board must end up uniform.
        let mut board = board_from(&[
            &[Red, Blue, Red, Blue],
            &[Blue, Red, Blue, Red],
            &[Red, Blue, Red, Blue],
        ]);

        let mut moves = 0;
        loop {
            let target = if board.origin_color() == Red { Blue } else { Red };
            match board.recolor(target) {
                Recolor::Filled { solved: true, .. } => break,
                Recolor::Filled { .. } => moves += 1,
                Recolor::NoOp => panic!("alternating colors can never no-op"),
            }
            assert!(moves <= board.area(), "fill failed to converge");
        }
        assert!(board.is_solved());
    }
}
