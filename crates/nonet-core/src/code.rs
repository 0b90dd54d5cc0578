//! The puzzle-code text format.
//!
//! A puzzle code carries only a board's given cells. It starts with a
//! direction tag (`r` for row-major traversal, `c` for column-major) and
//! then alternates given digits with hole runs: a run of up to two holes is
//! written as that many `0` characters, a longer run as a `0x`-prefixed
//! hexadecimal length, and the run trailing the last given is dropped
//! entirely. [`encode`] produces both traversals and returns the shorter
//! one.
//!
//! A run token's hex part is one digit for runs 6–15 and two digits for
//! runs 3–5 (zero-padded) and 16–80. Two-digit runs never exceed 80, so
//! their first hex digit is at most 5; one-digit runs start at 6. The
//! decoder therefore reads a second hex digit exactly when the first one is
//! 5 or less, which keeps decoding single-pass and unambiguous even though
//! the digits 1–9 that follow a token are themselves valid hex characters.
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Board, code};
//!
//! let mut board = Board::new();
//! board.set_value(0, 1);
//! board.set_value(4, 2);
//!
//! let text = code::encode(&board);
//! assert_eq!(text, "r10x032");
//!
//! let decoded = code::decode(&text)?;
//! assert_eq!(decoded.value(0), 1);
//! assert_eq!(decoded.value(4), 2);
//! assert!(decoded.is_fixed(4));
//! # Ok::<(), code::CodeError>(())
//! ```

use crate::{Board, board::CELL_COUNT};

/// Longest hole run a single hex digit encodes.
const ONE_DIGIT_MAX_RUN: usize = 15;
/// Longest hole run written as literal zeros.
const LITERAL_MAX_RUN: usize = 2;

#[derive(Clone, Copy)]
enum Direction {
    Row,
    Column,
}

impl Direction {
    fn tag(self) -> char {
        match self {
            Self::Row => 'r',
            Self::Column => 'c',
        }
    }

    /// Board index of the `position`-th cell of this traversal.
    fn index(self, position: usize) -> usize {
        match self {
            Self::Row => position,
            Self::Column => (position % 9) * 9 + position / 9,
        }
    }
}

/// Error returned when [`decode`] rejects a puzzle code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodeError {
    /// The code was empty.
    #[display("empty puzzle code")]
    Empty,
    /// The code did not start with `r` or `c`.
    #[display("unknown direction tag {tag:?}")]
    UnknownTag {
        /// The character found instead.
        tag: char,
    },
    /// A character was neither a digit nor part of a run token.
    #[display("unexpected symbol {symbol:?} at offset {offset}")]
    UnexpectedSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset into the code.
        offset: usize,
    },
    /// A `0x` run token was cut short or not hexadecimal.
    #[display("invalid zero-run token at offset {offset}")]
    InvalidRun {
        /// Byte offset of the token's `0`.
        offset: usize,
    },
    /// The code described more than 81 cells.
    #[display("code describes more than 81 cells")]
    TooManyCells,
}

/// Encodes a board's given cells as a puzzle code, returning the shorter of
/// the row-major and column-major encodings (row-major on ties).
///
/// Cells that are empty or not fixed become holes.
#[must_use]
pub fn encode(board: &Board) -> String {
    let row_major = encode_direction(board, Direction::Row);
    let column_major = encode_direction(board, Direction::Column);
    if row_major.len() <= column_major.len() {
        row_major
    } else {
        column_major
    }
}

fn encode_direction(board: &Board, direction: Direction) -> String {
    let mut out = String::new();
    out.push(direction.tag());
    let mut run = 0;
    for position in 0..CELL_COUNT {
        let index = direction.index(position);
        let value = if board.is_fixed(index) { board.value(index) } else { 0 };
        if value == 0 {
            run += 1;
            continue;
        }
        push_run(&mut out, run);
        run = 0;
        out.push(char::from(b'0' + value));
    }
    // the trailing run stays implicit
    out
}

fn push_run(out: &mut String, run: usize) {
    if run <= LITERAL_MAX_RUN {
        for _ in 0..run {
            out.push('0');
        }
    } else if run > ONE_DIGIT_MAX_RUN || run < 0x06 {
        out.push_str(&format!("0x{run:02x}"));
    } else {
        out.push_str(&format!("0x{run:x}"));
    }
}

/// Decodes a puzzle code into a board.
///
/// Decoded non-zero cells are marked fixed; holes, including the implicit
/// trailing run, are empty and not fixed. Only the structure is checked
/// here; whether the result is a *playable* puzzle (conflict-free, exactly
/// one solution) is the importing caller's concern.
///
/// # Errors
///
/// Returns a [`CodeError`] when the direction tag is unknown, a symbol is
/// not part of the format, a run token is malformed, or the code describes
/// more than 81 cells.
pub fn decode(text: &str) -> Result<Board, CodeError> {
    if let Some((offset, symbol)) = text.char_indices().find(|(_, symbol)| !symbol.is_ascii()) {
        return Err(CodeError::UnexpectedSymbol { symbol, offset });
    }
    let bytes = text.as_bytes();
    let Some((&tag, rest)) = bytes.split_first() else {
        return Err(CodeError::Empty);
    };
    let direction = match tag {
        b'r' => Direction::Row,
        b'c' => Direction::Column,
        other => return Err(CodeError::UnknownTag { tag: char::from(other) }),
    };

    let mut values = Vec::with_capacity(CELL_COUNT);
    let mut pos = 0;
    while pos < rest.len() {
        let offset = pos + 1; // error offsets are into `text`
        match rest[pos] {
            digit @ b'1'..=b'9' => {
                values.push(digit - b'0');
                pos += 1;
            }
            b'0' if rest.get(pos + 1) == Some(&b'x') => {
                let first = rest
                    .get(pos + 2)
                    .and_then(|&byte| hex_value(byte))
                    .ok_or(CodeError::InvalidRun { offset })?;
                let (run, consumed) = if first <= 0x5 {
                    let second = rest
                        .get(pos + 3)
                        .and_then(|&byte| hex_value(byte))
                        .ok_or(CodeError::InvalidRun { offset })?;
                    (first * 16 + second, 4)
                } else {
                    (first, 3)
                };
                values.resize(values.len() + run, 0);
                pos += consumed;
            }
            b'0' => {
                values.push(0);
                pos += 1;
            }
            other => {
                return Err(CodeError::UnexpectedSymbol {
                    symbol: char::from(other),
                    offset,
                });
            }
        }
        if values.len() > CELL_COUNT {
            return Err(CodeError::TooManyCells);
        }
    }

    let mut board = Board::new();
    for (position, &value) in values.iter().enumerate() {
        let index = direction.index(position);
        board.set_value(index, value);
    }
    for index in 0..CELL_COUNT {
        board.set_fixed(index, board.value(index) != 0);
    }
    Ok(board)
}

fn hex_value(byte: u8) -> Option<usize> {
    match byte {
        b'0'..=b'9' => Some(usize::from(byte - b'0')),
        b'a'..=b'f' => Some(usize::from(byte - b'a') + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_with(givens: &[(usize, u8)]) -> Board {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            board.set_fixed(index, false);
        }
        for &(index, value) in givens {
            board.set_value(index, value);
            board.set_fixed(index, true);
        }
        board
    }

    #[test]
    fn encodes_an_empty_board_as_a_bare_tag() {
        let board = board_with(&[]);
        assert_eq!(encode(&board), "r");
    }

    #[test]
    fn drops_the_trailing_run() {
        let board = board_with(&[(0, 4)]);
        assert_eq!(encode(&board), "r4");
    }

    #[test]
    fn short_runs_stay_literal() {
        // holes at 1 and 2 only
        let board = board_with(&[(0, 1), (3, 2), (4, 3)]);
        assert_eq!(encode(&board), "r10023");
    }

    #[test]
    fn long_runs_use_hex_tokens() {
        // run of 3 pads to two hex digits, runs of 6-15 use one
        assert_eq!(encode(&board_with(&[(0, 1), (4, 2)])), "r10x032");
        assert_eq!(encode(&board_with(&[(0, 1), (8, 2)])), "r10x72");
        // two runs of 39 need two hex digits each
        assert_eq!(encode(&board_with(&[(0, 1), (40, 2), (80, 3)])), "r10x2720x273");
    }

    #[test]
    fn picks_the_shorter_direction() {
        // A full first column compresses much better column-major.
        let givens: Vec<_> = (0..9).map(|row| (row * 9, u8::try_from(row + 1).unwrap())).collect();
        let board = board_with(&givens);
        let text = encode(&board);
        assert_eq!(text, "c123456789");

        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.cells(), board.cells());
    }

    #[test]
    fn never_longer_than_either_direction() {
        let board = board_with(&[(5, 7), (27, 1), (62, 9)]);
        let row = encode_direction(&board, Direction::Row);
        let column = encode_direction(&board, Direction::Column);
        let chosen = encode(&board);
        assert!(chosen.len() <= row.len());
        assert!(chosen.len() <= column.len());
    }

    #[test]
    fn decodes_literal_zeros() {
        let mut text = String::from("r");
        text.push('4');
        text.push_str(&"0".repeat(80));
        let board = decode(&text).unwrap();
        assert_eq!(board.value(0), 4);
        assert!(board.is_fixed(0));
        assert!(!board.is_fixed(1));
        assert_eq!(board.cells().iter().filter(|&&value| value != 0).count(), 1);
    }

    #[test]
    fn decodes_column_major_codes() {
        let board = decode("c40x082").unwrap();
        assert_eq!(board.value(0), 4); // logical 0 -> index 0
        assert_eq!(board.value(1), 2); // logical 9 -> row 0, column 1
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(decode(""), Err(CodeError::Empty));
        assert_eq!(decode("x123"), Err(CodeError::UnknownTag { tag: 'x' }));
        assert_eq!(
            decode("r12!4"),
            Err(CodeError::UnexpectedSymbol { symbol: '!', offset: 3 })
        );
        assert_eq!(decode("r0x"), Err(CodeError::InvalidRun { offset: 1 }));
        assert_eq!(decode("r0xg"), Err(CodeError::InvalidRun { offset: 1 }));
        assert_eq!(decode("r10x3"), Err(CodeError::InvalidRun { offset: 2 }));
        assert_eq!(decode(&"1".repeat(83)), Err(CodeError::UnknownTag { tag: '1' }));
        let text = format!("r{}", "5".repeat(82));
        assert_eq!(decode(&text), Err(CodeError::TooManyCells));
        assert_eq!(decode("r0x510x51"), Err(CodeError::TooManyCells));
    }

    proptest! {
        #[test]
        fn round_trips_arbitrary_given_patterns(
            givens in proptest::collection::btree_map(0..CELL_COUNT, 1u8..=9, 0..40)
        ) {
            let givens: Vec<_> = givens.into_iter().collect();
            let board = board_with(&givens);
            let decoded = decode(&encode(&board)).unwrap();
            prop_assert_eq!(decoded.cells(), board.cells());
            prop_assert_eq!(decoded.fixed(), board.fixed());
        }

        #[test]
        fn chosen_direction_is_never_longer(
            givens in proptest::collection::btree_map(0..CELL_COUNT, 1u8..=9, 0..40)
        ) {
            let givens: Vec<_> = givens.into_iter().collect();
            let board = board_with(&givens);
            let row = encode_direction(&board, Direction::Row);
            let column = encode_direction(&board, Direction::Column);
            prop_assert!(encode(&board).len() <= row.len().min(column.len()));
        }
    }
}
