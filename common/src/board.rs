use std::fmt;

use itertools::Itertools;

use crate::color::PieceColor;
use crate::error::{Error, Result};
use crate::piece::{Piece, PieceId, PieceType};
use crate::position::{is_valid_position, Position, BOARD_SIZE};

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The 6x6 grid, indexed `[row][col]`.
///
/// Cells are only reachable through accessors that bounds-check the
/// position first, so an off-board coordinate is never used as an index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn empty() -> Board {
        Board::default()
    }

    /// The starting position.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for color in PieceColor::ALL.iter().cloned() {
            let back = match color {
                PieceColor::White => 0,
                PieceColor::Black => BOARD_SIZE - 1,
            };
            let officers = [
                PieceType::King,
                PieceType::Rook,
                PieceType::Knight,
                PieceType::Bishop,
            ];
            for (col, &kind) in officers.iter().enumerate() {
                board.set(
                    Position::new(back, col as i32),
                    Piece::new(PieceId::officer(color, kind), kind, color),
                );
            }

            // The two pawns sit on opposite corners of the board.
            let pawn_square = match color {
                PieceColor::White => Position::new(1, BOARD_SIZE - 1),
                PieceColor::Black => Position::new(BOARD_SIZE - 2, 0),
            };
            board.set(
                pawn_square,
                Piece::new(PieceId::pawn(color, 0), PieceType::Pawn, color),
            );
        }

        debug!("Built starting board with {} pieces", board.occupied().count());
        board
    }

    pub fn get(&self, pos: Position) -> Option<&Piece> {
        if !is_valid_position(pos) {
            return None;
        }
        self.cells[pos.row as usize][pos.col as usize].as_ref()
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        if !is_valid_position(pos) {
            return None;
        }
        self.cells[pos.row as usize][pos.col as usize].as_mut()
    }

    /// Puts `piece` on `pos`, returning whatever stood there before.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<Option<Piece>> {
        if !is_valid_position(pos) {
            return Err(Error::OffBoard(pos));
        }
        Ok(self.set(pos, piece))
    }

    /// Empties `pos`, returning its occupant.
    pub fn take(&mut self, pos: Position) -> Result<Option<Piece>> {
        if !is_valid_position(pos) {
            return Err(Error::OffBoard(pos));
        }
        Ok(self.cells[pos.row as usize][pos.col as usize].take())
    }

    /// Every occupied square in row-major order.
    pub fn occupied<'a>(&'a self) -> impl Iterator<Item = (Position, &'a Piece)> + 'a {
        (0..BOARD_SIZE)
            .cartesian_product(0..BOARD_SIZE)
            .filter_map(move |(row, col)| {
                let pos = Position::new(row, col);
                self.get(pos).map(|piece| (pos, piece))
            })
    }

    pub fn find(&self, id: &PieceId) -> Option<Position> {
        self.occupied()
            .find(|&(_, piece)| piece.id == *id)
            .map(|(pos, _)| pos)
    }

    // Callers have already checked the position.
    fn set(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        ::std::mem::replace(
            &mut self.cells[pos.row as usize][pos.col as usize],
            Some(piece),
        )
    }
}

/// Produces a fresh board in the starting position.
pub fn create_initial_board() -> Board {
    Board::initial()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .get(Position::new(row, col))
                    .map_or('.', |piece| piece.symbol());
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}
