//! Random generation of completed boards.

use nonet_core::Board;
use rand::{Rng, seq::IndexedRandom};
use tinyvec::ArrayVec;

/// Give up on a board after this many row retries without progress.
const STUCK_LIMIT: u32 = 100;
/// Rows that must be gained to count as progress.
const PROGRESS_ROWS: usize = 2;

/// Generates a random completed board using the thread-local RNG.
///
/// Every cell of the returned board is filled, valid, and marked fixed; the
/// reducer unfixes cells as it removes them.
#[must_use]
pub fn generate_completed() -> Board {
    generate_completed_with(&mut rand::rng())
}

/// Generates a random completed board from the given RNG, for reproducible
/// output.
///
/// The board is built row by row, each cell drawn uniformly from its legal
/// candidates (with forced placements taken as soon as they are detected).
/// A row that runs into a cell with no candidates is cleared and redrawn;
/// when fewer than two rows are gained over 100 such retries the whole
/// board is discarded and construction restarts from the first row.
/// Termination is probabilistic but effectively certain on a 9×9 grid, so
/// no iteration cap is imposed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut rng = Pcg64Mcg::seed_from_u64(42);
/// let board = nonet_generator::generate_completed_with(&mut rng);
/// assert!(board.is_full());
/// assert!(board.is_valid());
/// ```
pub fn generate_completed_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut attempts = 0u32;
    loop {
        if let Some(board) = try_fill(rng) {
            return board;
        }
        attempts += 1;
        log::debug!("board generation stalled, restarting from an empty grid (attempt {attempts})");
    }
}

fn try_fill<R: Rng + ?Sized>(rng: &mut R) -> Option<Board> {
    let mut board = Board::new();
    let mut row = 0;
    let mut stuck_row = 0;
    let mut stuck_counter = 0;
    while row < 9 {
        if fill_row(&mut board, row, rng) {
            row += 1;
            if row - stuck_row >= PROGRESS_ROWS {
                stuck_row = row;
                stuck_counter = 0;
            }
        } else {
            clear_row(&mut board, row);
            stuck_counter += 1;
            if stuck_counter > STUCK_LIMIT {
                return None;
            }
        }
    }
    Some(board)
}

/// Fills one row left to right; `false` means a cell ran out of candidates
/// and the row was left partially filled.
fn fill_row<R: Rng + ?Sized>(board: &mut Board, row: usize, rng: &mut R) -> bool {
    for col in 0..9 {
        let index = row * 9 + col;
        let choices: ArrayVec<[u8; 9]> = board.candidates_smart(index).into_iter().collect();
        let Some(&value) = choices.choose(rng) else {
            return false;
        };
        board.set_value(index, value);
    }
    true
}

fn clear_row(board: &mut Board, row: usize) {
    for col in 0..9 {
        board.set_value(row * 9 + col, 0);
    }
}
