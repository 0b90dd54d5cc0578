use std::fmt;

use nonet_core::{Board, DigitSet, code};
use nonet_generator::{ReduceOptions, generate_completed, reduce};
use nonet_solver::{solve_at_most, solve_one};

use crate::{GameError, ImportError};

/// A Sudoku game session.
///
/// Owns the board (cells plus fixed mask) and the player's pencil notes,
/// and exposes the full puzzle lifecycle: generate a completed board,
/// reduce it to a unique-solution puzzle, exchange it as a puzzle code, and
/// apply player moves that can never overwrite a given.
///
/// # Examples
///
/// ```
/// use nonet_game::Game;
/// use nonet_generator::ReduceOptions;
///
/// let mut game = Game::new();
/// game.generate_completed_board();
/// assert!(game.is_full() && game.is_valid());
///
/// game.remove_board_numbers(70, &ReduceOptions::default());
/// assert!(!game.is_full());
///
/// let code = game.to_code();
/// let mut restored = Game::new();
/// restored.load_code(&code)?;
/// assert_eq!(restored.board().fixed(), game.board().fixed());
/// # Ok::<(), nonet_game::ImportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    notes: [DigitSet; 81],
}

impl Game {
    /// Creates a session with an all-zero board, every cell fixed: the
    /// placeholder state before generation or import.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            notes: [DigitSet::EMPTY; 81],
        }
    }

    /// Returns the board, for the collaborator's `cells()` / `fixed()`
    /// views.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board with a freshly generated completed one; every
    /// cell is filled and fixed, and all notes are cleared.
    pub fn generate_completed_board(&mut self) {
        self.board = generate_completed();
        self.notes = [DigitSet::EMPTY; 81];
    }

    /// Removes digits until at most `target_remaining` candidate cells are
    /// left, keeping the solution unique; see
    /// [`nonet_generator::reduce`] for the pool semantics, progress counter
    /// and cancellation.
    pub fn remove_board_numbers(&mut self, target_remaining: usize, options: &ReduceOptions) {
        reduce(&mut self.board, target_remaining, options);
    }

    /// Returns `true` if no placed value conflicts with another.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.board.is_valid()
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Returns `true` if the board is completely and correctly filled in.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_full() && self.board.is_valid()
    }

    /// Encodes the current givens as a puzzle code.
    #[must_use]
    pub fn to_code(&self) -> String {
        code::encode(&self.board)
    }

    /// Imports a puzzle code, replacing the board and clearing all notes.
    ///
    /// The code must be structurally well formed, conflict-free, and admit
    /// exactly one solution; otherwise the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Code`] for malformed codes,
    /// [`ImportError::Conflicting`] when the decoded givens clash,
    /// [`ImportError::Unsolvable`] when no completion exists, and
    /// [`ImportError::Ambiguous`] when more than one does.
    pub fn load_code(&mut self, text: &str) -> Result<(), ImportError> {
        let board = code::decode(text)?;
        if !board.is_valid() {
            return Err(ImportError::Conflicting);
        }
        match solve_at_most(&board, 2).len() {
            0 => Err(ImportError::Unsolvable),
            1 => {
                self.board = board;
                self.notes = [DigitSet::EMPTY; 81];
                Ok(())
            }
            _ => Err(ImportError::Ambiguous),
        }
    }

    /// Replaces the board with its solution and returns `true`, or returns
    /// `false` and leaves the board untouched when no solution exists.
    ///
    /// If the board admits several solutions, the first one the search
    /// finds is used.
    pub fn solve(&mut self) -> bool {
        match solve_one(&self.board) {
            Some(solution) => {
                self.board = solution;
                true
            }
            None => false,
        }
    }

    /// Enters `value` into the cell at `index`, clearing the cell's notes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] if the cell is a given.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80 or `value` is not in the
    /// range 1–9.
    pub fn set_cell(&mut self, index: usize, value: u8) -> Result<(), GameError> {
        assert!((1..=9).contains(&value), "digit out of range: {value}");
        if self.board.is_fixed(index) {
            return Err(GameError::FixedCell { index });
        }
        self.board.set_value(index, value);
        self.notes[index] = DigitSet::EMPTY;
        Ok(())
    }

    /// Empties the cell at `index`, clearing the cell's notes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] if the cell is a given.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80.
    pub fn clear_cell(&mut self, index: usize) -> Result<(), GameError> {
        if self.board.is_fixed(index) {
            return Err(GameError::FixedCell { index });
        }
        self.board.set_value(index, 0);
        self.notes[index] = DigitSet::EMPTY;
        Ok(())
    }

    /// Adds `digit` to the cell's pencil notes, or removes it if already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] for a given cell and
    /// [`GameError::OccupiedCell`] for a cell that holds a value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80 or `digit` is not in the
    /// range 1–9.
    pub fn toggle_note(&mut self, index: usize, digit: u8) -> Result<(), GameError> {
        if self.board.is_fixed(index) {
            return Err(GameError::FixedCell { index });
        }
        if self.board.value(index) != 0 {
            return Err(GameError::OccupiedCell { index });
        }
        let notes = &mut self.notes[index];
        if notes.contains(digit) {
            notes.remove(digit);
        } else {
            notes.insert(digit);
        }
        Ok(())
    }

    /// Returns the pencil notes of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0–80.
    #[must_use]
    pub fn notes_at(&self, index: usize) -> DigitSet {
        self.notes[index]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a session around an existing board, e.g. one restored from a
/// collaborator's save file. Notes start empty.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self {
            board,
            notes: [DigitSet::EMPTY; 81],
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
