//! The move record kept in a game's history.
//!
//! On the wire a move is a flat object with optional flags (`isDropped`,
//! `isPromotion`, `capturedPiece`, ...). In memory those flags are folded
//! into types so the combinations that make no sense cannot be built: a drop
//! has no origin square and never captures or promotes, a promotion always
//! names its piece, and checkmate is a kind of check. Decoding also rejects
//! squares that are off the board.

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::piece::{Piece, PieceType};
use crate::position::{is_valid_position, Position};

/// Where the moving piece came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Square(Position),
    Bank,
}

/// Status of the opposing king after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Safe,
    Check,
    Checkmate,
}

// Written as `from` for drops.
const BANK_SENTINEL: Position = Position { row: -1, col: -1 };

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "MoveRepr", into = "MoveRepr")]
pub struct Move {
    origin: Origin,
    pub to: Position,
    /// The piece as it was before moving.
    pub piece: Piece,
    captured: Option<Piece>,
    promote_to: Option<PieceType>,
    pub check: CheckState,
}

impl Move {
    /// A piece moving across the board.
    pub fn board(from: Position, to: Position, piece: Piece) -> Move {
        Move {
            origin: Origin::Square(from),
            to,
            piece,
            captured: None,
            promote_to: None,
            check: CheckState::Safe,
        }
    }

    /// A banked piece placed onto `to`.
    pub fn dropped(piece: Piece, to: Position) -> Move {
        Move {
            origin: Origin::Bank,
            to,
            piece,
            captured: None,
            promote_to: None,
            check: CheckState::Safe,
        }
    }

    pub fn capturing(mut self, captured: Piece) -> Result<Move> {
        if self.is_dropped() {
            return Err(Error::DropWithCapture);
        }
        self.captured = Some(captured);
        Ok(self)
    }

    pub fn promoting(mut self, kind: PieceType) -> Result<Move> {
        if self.is_dropped() {
            return Err(Error::DropWithPromotion);
        }
        self.promote_to = Some(kind);
        Ok(self)
    }

    pub fn with_check(mut self, check: CheckState) -> Move {
        self.check = check;
        self
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Origin square, or `None` for a drop.
    pub fn from_square(&self) -> Option<Position> {
        match self.origin {
            Origin::Square(pos) => Some(pos),
            Origin::Bank => None,
        }
    }

    pub fn is_dropped(&self) -> bool {
        self.origin == Origin::Bank
    }

    pub fn captured_piece(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }

    pub fn promote_to(&self) -> Option<PieceType> {
        self.promote_to
    }

    pub fn is_promotion(&self) -> bool {
        self.promote_to.is_some()
    }

    pub fn is_check(&self) -> bool {
        self.check != CheckState::Safe
    }

    pub fn is_checkmate(&self) -> bool {
        self.check == CheckState::Checkmate
    }
}

fn flag(set: bool) -> Option<bool> {
    if set {
        Some(true)
    } else {
        None
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveRepr {
    from: Position,
    to: Position,
    piece: Piece,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    captured_piece: Option<Piece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_promotion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    promote_to: Option<PieceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_checkmate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_dropped: Option<bool>,
}

impl From<Move> for MoveRepr {
    fn from(mv: Move) -> MoveRepr {
        MoveRepr {
            from: mv.from_square().unwrap_or(BANK_SENTINEL),
            to: mv.to,
            is_promotion: flag(mv.is_promotion()),
            is_check: flag(mv.is_check()),
            is_checkmate: flag(mv.is_checkmate()),
            is_dropped: flag(mv.is_dropped()),
            piece: mv.piece,
            captured_piece: mv.captured,
            promote_to: mv.promote_to,
        }
    }
}

impl TryFrom<MoveRepr> for Move {
    type Error = Error;

    fn try_from(repr: MoveRepr) -> Result<Move> {
        if repr.is_promotion.unwrap_or(false) != repr.promote_to.is_some() {
            return Err(Error::InconsistentPromotion);
        }

        let dropped = repr.is_dropped.unwrap_or(false);
        if dropped && repr.captured_piece.is_some() {
            return Err(Error::DropWithCapture);
        }
        if dropped && repr.promote_to.is_some() {
            return Err(Error::DropWithPromotion);
        }
        if !is_valid_position(repr.to) {
            return Err(Error::OffBoard(repr.to));
        }
        if !dropped && !is_valid_position(repr.from) {
            return Err(Error::OffBoard(repr.from));
        }

        let check = if repr.is_checkmate.unwrap_or(false) {
            CheckState::Checkmate
        } else if repr.is_check.unwrap_or(false) {
            CheckState::Check
        } else {
            CheckState::Safe
        };

        Ok(Move {
            origin: if dropped {
                Origin::Bank
            } else {
                Origin::Square(repr.from)
            },
            to: repr.to,
            piece: repr.piece,
            captured: repr.captured_piece,
            promote_to: repr.promote_to,
            check,
        })
    }
}
