//! Shared game-state vocabulary for 6x6 drop chess.
//!
//! Everything the rules engine and the UI exchange lives here: the piece and
//! color enumerations, the board grid, the move record, the bank of captured
//! pieces and the full `GameState`, along with the starting-position
//! factories and the algebraic square helpers. All of it serializes to the
//! JSON shape the front end reads.

#[macro_use]
extern crate serde_derive;
extern crate serde;

#[macro_use]
extern crate log;

extern crate itertools;
extern crate thiserror;

mod bank;
mod board;
mod color;
mod error;
mod moves;
mod piece;
mod position;
mod state;

pub use bank::PieceBank;
pub use board::{create_initial_board, Board};
pub use color::PieceColor;
pub use error::{Error, Result};
pub use moves::{CheckState, Move, Origin};
pub use piece::{Piece, PieceId, PieceType};
pub use position::{
    algebraic_to_position, is_valid_position, parse_square, position_to_algebraic, Position,
    BOARD_SIZE,
};
pub use state::{create_initial_game_state, GameState};
