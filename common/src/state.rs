use std::collections::HashSet;
use std::convert::TryFrom;

use crate::bank::PieceBank;
use crate::board::Board;
use crate::color::PieceColor;
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::piece::Piece;
use crate::position::Position;

/// Everything the rules engine and UI share about a game in progress.
///
/// Only the move history is guarded: it grows through
/// [`GameState::record_move`] and the last move is read from its tail, so the
/// two can never disagree. Every other field belongs to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "GameStateRepr", into = "GameStateRepr")]
pub struct GameState {
    pub board: Board,
    pub current_player: PieceColor,
    move_history: Vec<Move>,
    /// UI selection cursor.
    pub selected_piece: Option<Position>,
    /// Destinations for the current selection, filled in by the rules engine.
    pub valid_moves: Vec<Position>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub piece_bank: PieceBank,
    /// Set while the player is placing a piece from the bank.
    pub is_dropping_piece: bool,
}

impl GameState {
    /// A new game: starting board, White to move, nothing captured.
    pub fn new() -> GameState {
        let state = GameState {
            board: Board::initial(),
            current_player: PieceColor::White,
            move_history: Vec::new(),
            selected_piece: None,
            valid_moves: Vec::new(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            piece_bank: PieceBank::new(),
            is_dropping_piece: false,
        };
        debug!("Created game state, {} to move", state.current_player);
        state
    }

    /// Oldest first.
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// Appends to the history. Board, bank and turn updates stay with the caller.
    pub fn record_move(&mut self, mv: Move) {
        self.move_history.push(mv);
    }

    /// Pieces on the board followed by banked pieces.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board
            .occupied()
            .map(|(_, piece)| piece)
            .chain(self.piece_bank.iter())
    }

    /// Checks that no two pieces in play share an id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for piece in self.pieces() {
            if !seen.insert(&piece.id) {
                warn!("Rejecting game state: piece id {} appears twice", piece.id);
                return Err(Error::DuplicatePieceId(piece.id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

/// Produces the state a new game starts from.
pub fn create_initial_game_state() -> GameState {
    GameState::new()
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRepr {
    board: Board,
    current_player: PieceColor,
    move_history: Vec<Move>,
    selected_piece: Option<Position>,
    valid_moves: Vec<Position>,
    is_check: bool,
    is_checkmate: bool,
    is_stalemate: bool,
    last_move: Option<Move>,
    piece_bank: PieceBank,
    #[serde(default)]
    is_dropping_piece: bool,
}

impl From<GameState> for GameStateRepr {
    fn from(state: GameState) -> GameStateRepr {
        GameStateRepr {
            last_move: state.move_history.last().cloned(),
            board: state.board,
            current_player: state.current_player,
            move_history: state.move_history,
            selected_piece: state.selected_piece,
            valid_moves: state.valid_moves,
            is_check: state.is_check,
            is_checkmate: state.is_checkmate,
            is_stalemate: state.is_stalemate,
            piece_bank: state.piece_bank,
            is_dropping_piece: state.is_dropping_piece,
        }
    }
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = Error;

    fn try_from(repr: GameStateRepr) -> Result<GameState> {
        if repr.last_move.as_ref() != repr.move_history.last() {
            warn!("Rejecting game state: lastMove disagrees with moveHistory");
            return Err(Error::LastMoveMismatch);
        }

        let state = GameState {
            board: repr.board,
            current_player: repr.current_player,
            move_history: repr.move_history,
            selected_piece: repr.selected_piece,
            valid_moves: repr.valid_moves,
            is_check: repr.is_check,
            is_checkmate: repr.is_checkmate,
            is_stalemate: repr.is_stalemate,
            piece_bank: repr.piece_bank,
            is_dropping_piece: repr.is_dropping_piece,
        };
        state.validate()?;
        Ok(state)
    }
}
