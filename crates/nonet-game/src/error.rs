//! Error types for game sessions.

use nonet_core::code::CodeError;

/// Errors from player moves on a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell is a given clue and cannot be modified.
    #[display("cell {index} is a given and cannot be modified")]
    FixedCell {
        /// Index of the cell.
        index: usize,
    },
    /// The cell already holds a value, so a note cannot be placed.
    #[display("cell {index} already holds a value")]
    OccupiedCell {
        /// Index of the cell.
        index: usize,
    },
}

/// Errors from importing a puzzle code into a [`Game`](crate::Game).
///
/// The game is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ImportError {
    /// The code was structurally malformed.
    #[display("malformed puzzle code: {_0}")]
    Code(CodeError),
    /// The decoded givens conflict with each other.
    #[display("puzzle code places conflicting values")]
    Conflicting,
    /// The decoded puzzle admits no solution.
    #[display("puzzle has no solution")]
    Unsolvable,
    /// The decoded puzzle admits more than one solution.
    #[display("puzzle has more than one solution")]
    Ambiguous,
}
