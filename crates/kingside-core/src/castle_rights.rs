//! Castling rights as a 4-bit set.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// King destination square for `color`.
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::G1,
            (Color::White, CastleSide::QueenSide) => Square::C1,
            (Color::Black, CastleSide::KingSide) => Square::G8,
            (Color::Black, CastleSide::QueenSide) => Square::C8,
        }
    }

    /// Rook (origin, destination) for `color`.
    pub const fn rook_squares(self, color: Color) -> (Square, Square) {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => (Square::H1, Square::F1),
            (Color::White, CastleSide::QueenSide) => (Square::A1, Square::D1),
            (Color::Black, CastleSide::KingSide) => (Square::H8, Square::F8),
            (Color::Black, CastleSide::QueenSide) => (Square::A8, Square::D8),
        }
    }

    /// Notation for this castle.
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// bit 0 = white king side, 1 = white queen side, 2 = black king side, 3 = black queen side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::flag(color, side))
    }

    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::flag(color, side))
    }

    /// Drop every right that depends on the piece standing on `sq`.
    ///
    /// Called with both the origin and the destination of each move, so a
    /// king or rook moving away and a rook being captured both revoke.
    pub const fn touched(self, sq: Square) -> CastleRights {
        let mask = match sq.index() {
            0 => 0b0010,
            4 => 0b0011,
            7 => 0b0001,
            56 => 0b1000,
            60 => 0b1100,
            63 => 0b0100,
            _ => 0,
        };
        CastleRights(self.0 & !mask)
    }

    /// Parse the FEN castling field (`"KQkq"`, `"-"`, ...).
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        field.chars().try_fold(CastleRights::NONE, |rights, c| {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.with(color, side))
        })
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
