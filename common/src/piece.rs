use std::fmt;

use crate::color::PieceColor;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Pawn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Pawn => "pawn",
        }
    }

    /// English letter, as used in diagrams.
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one physical piece for the lifetime of a game.
///
/// The id follows a piece from the board into a bank and back, so it is the
/// only reliable way to tell two white rooks apart. Canonical ids are issued
/// by [`PieceId::officer`] and [`PieceId::pawn`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PieceId(String);

impl PieceId {
    /// Id for the single non-pawn piece of a kind, e.g. `white-knight`.
    pub fn officer(color: PieceColor, kind: PieceType) -> PieceId {
        PieceId(format!("{}-{}", color, kind))
    }

    /// Id for the `index`th pawn of a color, e.g. `black-pawn-0`.
    pub fn pawn(color: PieceColor, index: u8) -> PieceId {
        PieceId(format!("{}-{}-{}", color, PieceType::Pawn, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for PieceId {
    fn from(id: &'a str) -> PieceId {
        PieceId(id.to_owned())
    }
}

impl From<String> for PieceId {
    fn from(id: String) -> PieceId {
        PieceId(id)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: PieceId,
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub color: PieceColor,
    /// Maintained by the rules engine for first-move-only rules.
    pub has_moved: bool,
}

impl Piece {
    pub fn new<I: Into<PieceId>>(id: I, kind: PieceType, color: PieceColor) -> Piece {
        Piece {
            id: id.into(),
            kind,
            color,
            has_moved: false,
        }
    }

    /// Diagram letter: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            PieceColor::White => symbol,
            PieceColor::Black => symbol.to_ascii_lowercase(),
        }
    }
}
