//! Board coordinates and algebraic square notation.
//!
//! Row 0 is White's back rank and column 0 is the `a` file, so `(0, 0)` is
//! `a1` and `(5, 5)` is `f6`.
//!
//! Parsing and formatting are independent of the board size: `h8` parses to
//! `(7, 7)` even though that square does not exist here. Anything taken from
//! user input must still pass [`is_valid_position`] before it is used to
//! address the board; [`parse_square`] does both steps at once.

use std::fmt;

use crate::error::{Error, Result};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn is_valid(self) -> bool {
        is_valid_position(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match position_to_algebraic(*self) {
            Ok(square) => f.write_str(&square),
            Err(_) => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// True iff the position addresses a square of the 6x6 board.
pub fn is_valid_position(pos: Position) -> bool {
    pos.row >= 0 && pos.row < BOARD_SIZE && pos.col >= 0 && pos.col < BOARD_SIZE
}

/// Converts a square like `"c4"` into a position.
///
/// Accepts a lowercase file letter followed by a rank number without leading
/// zeros (`a1`, `c10`). The result is not bounds-checked.
pub fn algebraic_to_position(notation: &str) -> Result<Position> {
    let invalid = |reason| Error::InvalidNotation {
        notation: notation.to_owned(),
        reason,
    };

    let mut chars = notation.chars();
    let file = match chars.next() {
        Some(file) => file,
        None => return Err(invalid("expected a file letter followed by a rank number")),
    };
    if !file.is_ascii_lowercase() {
        return Err(invalid("file must be a lowercase letter"));
    }

    let rank = chars.as_str();
    if rank.is_empty() {
        return Err(invalid("expected a file letter followed by a rank number"));
    }
    if !rank.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("rank must be a number"));
    }
    if rank.starts_with('0') {
        return Err(invalid("rank must start from 1"));
    }
    let row = rank
        .parse::<i64>()
        .ok()
        .map(|rank| rank - 1)
        .filter(|&row| row <= i64::from(i32::MAX))
        .ok_or_else(|| invalid("rank is too large"))?;

    Ok(Position {
        row: row as i32,
        col: (file as u8 - b'a') as i32,
    })
}

/// Converts a position into a square like `"c4"`.
///
/// Defined for columns 0 to 25 and any row from 0 up, the range
/// [`algebraic_to_position`] can produce.
pub fn position_to_algebraic(pos: Position) -> Result<String> {
    if pos.col < 0 || pos.col > 25 || pos.row < 0 {
        return Err(Error::Unrepresentable(pos));
    }

    let file = (b'a' + pos.col as u8) as char;
    Ok(format!("{}{}", file, i64::from(pos.row) + 1))
}

/// Parses a square and checks that it lies on the board.
pub fn parse_square(notation: &str) -> Result<Position> {
    let pos = algebraic_to_position(notation)?;
    if is_valid_position(pos) {
        Ok(pos)
    } else {
        Err(Error::OffBoard(pos))
    }
}
