use crate::color::PieceColor;
use crate::piece::{Piece, PieceId};

/// Captured pieces waiting to be dropped back onto the board, per color.
///
/// Each list is kept in capture order. Which side may drop from which list is
/// the rules engine's business.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceBank {
    #[serde(default)]
    white: Vec<Piece>,
    #[serde(default)]
    black: Vec<Piece>,
}

impl PieceBank {
    pub fn new() -> PieceBank {
        PieceBank::default()
    }

    pub fn pieces(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    fn pieces_mut(&mut self, color: PieceColor) -> &mut Vec<Piece> {
        match color {
            PieceColor::White => &mut self.white,
            PieceColor::Black => &mut self.black,
        }
    }

    pub fn push(&mut self, color: PieceColor, piece: Piece) {
        self.pieces_mut(color).push(piece);
    }

    /// Removes the piece with `id` from `color`'s list.
    pub fn take(&mut self, color: PieceColor, id: &PieceId) -> Option<Piece> {
        let pieces = self.pieces_mut(color);
        let index = pieces.iter().position(|piece| piece.id == *id)?;
        Some(pieces.remove(index))
    }

    pub fn len(&self, color: PieceColor) -> usize {
        self.pieces(color).len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// All banked pieces, White's list first.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.white.iter().chain(self.black.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceType;

    fn piece(id: &str, kind: PieceType) -> Piece {
        Piece::new(id, kind, PieceColor::Black)
    }

    #[test]
    fn starts_empty() {
        let bank = PieceBank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.len(PieceColor::White), 0);
        assert!(bank.pieces(PieceColor::Black).is_empty());
    }

    #[test]
    fn keeps_capture_order_and_takes_by_id() {
        let mut bank = PieceBank::new();
        bank.push(PieceColor::White, piece("black-rook", PieceType::Rook));
        bank.push(PieceColor::White, piece("black-pawn-0", PieceType::Pawn));
        bank.push(PieceColor::White, piece("black-knight", PieceType::Knight));

        let taken = bank.take(PieceColor::White, &PieceId::from("black-pawn-0"));
        assert_eq!(taken.map(|p| p.kind), Some(PieceType::Pawn));

        let left: Vec<&str> = bank
            .pieces(PieceColor::White)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(left, vec!["black-rook", "black-knight"]);
        assert_eq!(bank.len(PieceColor::Black), 0);
    }

    #[test]
    fn take_from_wrong_list_finds_nothing() {
        let mut bank = PieceBank::new();
        bank.push(PieceColor::White, piece("black-bishop", PieceType::Bishop));
        assert!(bank
            .take(PieceColor::Black, &PieceId::from("black-bishop"))
            .is_none());
        assert_eq!(bank.iter().count(), 1);
    }
}
