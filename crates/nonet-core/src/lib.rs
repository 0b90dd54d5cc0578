//! Core data structures for the Nonet Sudoku engine.
//!
//! This crate holds everything the rest of the workspace builds on:
//!
//! - [`board`]: the 81-cell [`Board`] with its parallel fixed mask and the
//!   row/column/box conflict queries
//! - [`digit_set`]: [`DigitSet`], a bitmask set of digits 1–9
//! - [`candidates`]: legal-digit evaluation for a cell, including the
//!   forced-placement "smart" variant used during generation
//! - [`code`]: the compact puzzle-code text format for exchanging puzzles
//!
//! # Examples
//!
//! ```
//! use nonet_core::Board;
//!
//! let mut board = Board::new();
//! board.set_value(0, 5);
//!
//! // 5 is now taken in row 0, column 0, and the top-left box.
//! assert!(!board.candidates(1).contains(5));
//! assert!(!board.candidates(9).contains(5));
//! assert!(!board.candidates(10).contains(5));
//! assert!(board.candidates(80).contains(5));
//! ```

pub mod board;
pub mod candidates;
pub mod code;
pub mod digit_set;

pub use self::{
    board::{Board, BoardParseError, Conflict},
    digit_set::DigitSet,
};
