//! Backtracking sudoku solver.
//!
//! The solver enumerates completions of a board up to a caller-supplied
//! count. Callers that only care about solvability or uniqueness pass a
//! small limit so the search stops as early as possible: the generator and
//! reducer use `limit = 2` to distinguish a unique puzzle from an ambiguous
//! one without enumerating everything.
//!
//! Each search step picks the empty cell with the fewest legal candidates.
//! That ordering is what keeps near-empty boards tractable; correctness
//! does not depend on it.

use nonet_core::{Board, DigitSet};

/// Returns up to `limit` completions of `board`, in the order the search
/// finds them. The input is never mutated; every recursive step works on a
/// private copy.
///
/// # Examples
///
/// ```
/// use nonet_core::Board;
/// use nonet_solver::solve_at_most;
///
/// let board = Board::new();
/// assert_eq!(solve_at_most(&board, 2).len(), 2); // empty board is ambiguous
/// ```
#[must_use]
pub fn solve_at_most(board: &Board, limit: usize) -> Vec<Board> {
    let mut solutions = Vec::new();
    if limit > 0 {
        search(board, limit, &mut solutions);
    }
    solutions
}

/// Returns the first completion found, or `None` if the board is
/// unsolvable.
#[must_use]
pub fn solve_one(board: &Board) -> Option<Board> {
    solve_at_most(board, 1).into_iter().next()
}

/// Returns the completion of `board` if there is exactly one.
#[must_use]
pub fn solve_unique(board: &Board) -> Option<Board> {
    let mut solutions = solve_at_most(board, 2);
    if solutions.len() == 1 { solutions.pop() } else { None }
}

fn search(board: &Board, limit: usize, solutions: &mut Vec<Board>) {
    if board.is_full() {
        solutions.push(board.clone());
        return;
    }

    // Most-constrained cell first; a cell with no candidates kills the
    // whole branch.
    let mut best: Option<(usize, DigitSet)> = None;
    for index in 0..81 {
        if board.value(index) != 0 {
            continue;
        }
        let candidates = board.candidates(index);
        if candidates.is_empty() {
            return;
        }
        if best.is_none_or(|(_, other)| candidates.len() < other.len()) {
            best = Some((index, candidates));
        }
    }
    let Some((index, candidates)) = best else {
        return;
    };

    for value in candidates {
        if solutions.len() >= limit {
            return;
        }
        let mut next = board.clone();
        next.set_value(index, value);
        search(&next, limit, solutions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "
        5 3 . | . 7 . | . . .
        6 . . | 1 9 5 | . . .
        . 9 8 | . . . | . 6 .
        ------+-------+------
        8 . . | . 6 . | . . 3
        4 . . | 8 . 3 | . . 1
        7 . . | . 2 . | . . 6
        ------+-------+------
        . 6 . | . . . | 2 8 .
        . . . | 4 1 9 | . . 5
        . . . | . 8 . | . 7 9
    ";

    const SOLUTION: &str = "
        534678912672195348198342567859761423426853791713924856961537284287419635345286179
    ";

    fn puzzle() -> Board {
        PUZZLE.parse().unwrap()
    }

    fn solution() -> Board {
        SOLUTION.trim().parse().unwrap()
    }

    #[test]
    fn solves_a_unique_puzzle() {
        let solved = solve_unique(&puzzle()).unwrap();
        assert_eq!(solved.cells(), solution().cells());
    }

    #[test]
    fn respects_the_limit() {
        let board = Board::new();
        assert_eq!(solve_at_most(&board, 1).len(), 1);
        assert_eq!(solve_at_most(&board, 2).len(), 2);
        assert_eq!(solve_at_most(&board, 5).len(), 5);
        assert!(solve_at_most(&board, 0).is_empty());
    }

    #[test]
    fn empty_board_is_not_unique() {
        assert_eq!(solve_unique(&Board::new()), None);
    }

    #[test]
    fn found_solutions_are_complete_and_valid() {
        for solved in solve_at_most(&Board::new(), 3) {
            assert!(solved.is_full());
            assert!(solved.is_valid());
        }
    }

    #[test]
    fn reports_an_unsolvable_board() {
        // Box 0 holds 1-8 and the rest of row 0 supplies the 9, so (0, 0)
        // has no candidates.
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
        assert!(solve_at_most(&board, 2).is_empty());
        assert_eq!(solve_one(&board), None);
    }

    #[test]
    fn a_solved_board_solves_to_itself() {
        let solved = solution();
        let solutions = solve_at_most(&solved, 2);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].cells(), solved.cells());
    }

    #[test]
    fn input_keeps_its_fixed_mask_and_values() {
        let board = puzzle();
        let before = board.clone();
        let _ = solve_at_most(&board, 2);
        assert_eq!(board, before);
    }
}
