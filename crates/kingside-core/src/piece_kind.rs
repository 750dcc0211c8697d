//! Piece kinds, without color.

use std::fmt;

/// The kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN letter, ignoring case.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase letter used in algebraic notation; pawns have none.
    #[inline]
    pub const fn notation_char(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// `true` for bishops, rooks and queens.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_fen_char(kind.fen_char()), Some(kind));
            assert_eq!(
                PieceKind::from_fen_char(kind.fen_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }

    #[test]
    fn notation_letters() {
        assert_eq!(PieceKind::Pawn.notation_char(), None);
        assert_eq!(PieceKind::Knight.notation_char(), Some('N'));
        assert_eq!(PieceKind::King.notation_char(), Some('K'));
    }

    #[test]
    fn sliders() {
        assert!(PieceKind::Queen.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(!PieceKind::King.is_slider());
    }
}
