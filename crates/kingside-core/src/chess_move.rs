//! Moves carrying enough information to be undone exactly.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    /// Generation order: queen first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }

    /// Lowercase UCI suffix.
    pub const fn uci_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }
}

/// The category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    /// Pawn advancing two squares from its start rank.
    DoublePush,
    /// Pawn capturing onto the en-passant target square.
    EnPassant,
    /// King move of two files; the rook travels with it.
    Castle(CastleSide),
    /// Pawn reaching the last rank, with or without a capture.
    Promotion(PromotionPiece),
}

/// A move from `from` to `to` by `piece`.
///
/// For en passant, `captured` is the enemy pawn even though `to` is empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    pub const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move { from, to, piece, captured, kind }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves, before any promotion.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Promotion target, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(promo),
            _ => None,
        }
    }

    /// Square of the captured piece; differs from `to` only for en passant.
    pub fn capture_square(self) -> Option<Square> {
        self.captured?;
        match self.kind {
            MoveKind::EnPassant => Square::from_coords(self.to.file(), self.from.rank()),
            _ => Some(self.to),
        }
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.uci_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?}", self.piece)?;
        if let Some(captured) = self.captured {
            write!(f, "x{captured:?}")?;
        }
        write!(f, " {:?})", self.kind)
    }
}
