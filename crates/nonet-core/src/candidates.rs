//! Candidate evaluation: which digits can legally go in a cell.

use crate::{Board, DigitSet};

impl Board {
    /// Returns the digits that can be placed at `index` without conflicting
    /// with any placed value in its row, column, or box.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80.
    #[must_use]
    pub fn candidates(&self, index: usize) -> DigitSet {
        (1..=9)
            .filter(|&value| self.conflicts(index, value).is_none())
            .collect()
    }

    /// Like [`candidates`](Board::candidates), but detects forced
    /// placements: if a surviving candidate digit has no *other* empty cell
    /// in this cell's row that could legally take it, or none in its column,
    /// the digit must go here, and a singleton set is returned immediately.
    ///
    /// The scan short-circuits on the first forced digit found, in ascending
    /// digit order, even if a later digit would also be forced. This is a
    /// heuristic row/column elimination, not full constraint propagation.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80.
    #[must_use]
    pub fn candidates_smart(&self, index: usize) -> DigitSet {
        let available = self.candidates(index);
        for value in available {
            if self.forced_in_row(index, value) || self.forced_in_column(index, value) {
                return DigitSet::single(value);
            }
        }
        available
    }

    /// No other empty cell in the index's row can take `value`.
    fn forced_in_row(&self, index: usize, value: u8) -> bool {
        let row = index / 9;
        (row * 9..row * 9 + 9).all(|other| !self.other_cell_can_take(index, other, value))
    }

    /// No other empty cell in the index's column can take `value`.
    fn forced_in_column(&self, index: usize, value: u8) -> bool {
        let col = index % 9;
        (0..9).all(|j| !self.other_cell_can_take(index, col + 9 * j, value))
    }

    fn other_cell_can_take(&self, index: usize, other: usize, value: u8) -> bool {
        other != index && self.value(other) == 0 && self.conflicts(other, value).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    #[test]
    fn empty_board_allows_everything() {
        let board = Board::new();
        for index in 0..CELL_COUNT {
            assert_eq!(board.candidates(index), DigitSet::ALL);
        }
    }

    #[test]
    fn candidates_exclude_peers() {
        let mut board = Board::new();
        board.set_value(1, 4); // row peer of 0
        board.set_value(9, 6); // column peer of 0
        board.set_value(20, 8); // box peer of 0

        let candidates = board.candidates(0);
        assert!(!candidates.contains(4));
        assert!(!candidates.contains(6));
        assert!(!candidates.contains(8));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn cell_with_no_options() {
        // Box 0 holds 1-8 and the rest of row 0 supplies the 9.
        let board: Board = "
            _ 1 2 | 9 _ _ | _ _ _
            3 5 6 | _ _ _ | _ _ _
            4 7 8 | _ _ _ | _ _ _
            ------+-------+------
            _ _ _ | _ _ _ | _ _ _
            _ _ _ | _ _ _ | _ _ _
            _ _ _ | _ _ _ | _ _ _
            ------+-------+------
            _ _ _ | _ _ _ | _ _ _
            _ _ _ | _ _ _ | _ _ _
            _ _ _ | _ _ _ | _ _ _
        "
        .parse()
        .unwrap();
        assert!(board.candidates(0).is_empty());
    }

    #[test]
    fn smart_detects_a_digit_forced_by_row_elimination() {
        // Every other cell of row 0 sees a 5 in its column, so the 5 is
        // forced into (0, 0) even though that cell has all 9 candidates.
        let mut board = Board::new();
        for (row, col) in [(1, 4), (2, 7), (3, 1), (4, 5), (5, 8), (6, 2), (7, 3), (8, 6)] {
            board.set_value(row * 9 + col, 5);
        }
        assert!(board.is_valid());

        assert_eq!(board.candidates(0), DigitSet::ALL);
        assert_eq!(board.candidates_smart(0), DigitSet::single(5));
    }

    #[test]
    fn smart_detects_a_digit_forced_by_column_elimination() {
        // Rows 2-8 each see a 5 and (1, 0) is occupied, so column 0 forces
        // the 5 into (0, 0). Column 7 has no 5, so row elimination alone
        // would not conclude anything.
        let mut board = Board::new();
        board.set_value(9, 7); // (1, 0)
        for (row, col) in [(2, 4), (3, 1), (4, 5), (5, 8), (6, 2), (7, 3), (8, 6)] {
            board.set_value(row * 9 + col, 5);
        }
        assert!(board.is_valid());

        assert!(!board.forced_in_row(0, 5));
        assert!(board.forced_in_column(0, 5));
        assert_eq!(board.candidates_smart(0), DigitSet::single(5));
    }

    #[test]
    fn smart_falls_back_to_the_plain_set() {
        let board = Board::new();
        assert_eq!(board.candidates_smart(40), DigitSet::ALL);
    }
}
