//! Error type shared by every fallible operation in the model.

use thiserror::Error;

use crate::piece::PieceId;
use crate::position::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a `<file><rank>` square such as `c4`.
    #[error("invalid algebraic notation {notation:?}: {reason}")]
    InvalidNotation {
        notation: String,
        reason: &'static str,
    },

    /// The position has a negative row or no single-letter file.
    #[error("position {0} cannot be written in algebraic notation")]
    Unrepresentable(Position),

    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("piece id {0} is used by more than one piece")]
    DuplicatePieceId(PieceId),

    #[error("promotion flag does not agree with the promotion piece")]
    InconsistentPromotion,

    #[error("a piece dropped from the bank cannot capture")]
    DropWithCapture,

    #[error("a piece dropped from the bank cannot promote")]
    DropWithPromotion,

    #[error("last move does not match the end of the move history")]
    LastMoveMismatch,
}

pub type Result<T> = ::std::result::Result<T, Error>;
