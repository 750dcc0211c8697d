//! Colored pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A (color, kind) pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { color, kind }
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn fen_case_selects_color() {
        let white = Piece::from_fen_char('N').unwrap();
        assert_eq!(white.color(), Color::White);
        assert_eq!(white.kind(), PieceKind::Knight);

        let black = Piece::from_fen_char('q').unwrap();
        assert_eq!(black, Piece::new(PieceKind::Queen, Color::Black));
        assert_eq!(Piece::from_fen_char('7'), None);
    }

    #[test]
    fn display_and_debug() {
        let piece = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(format!("{piece}"), "r");
        assert_eq!(format!("{piece:?}"), "BR");
        assert_eq!(format!("{:?}", Piece::new(PieceKind::King, Color::White)), "WK");
    }

    #[test]
    fn option_piece_is_two_bytes() {
        assert_eq!(std::mem::size_of::<Option<Piece>>(), 2);
    }
}
