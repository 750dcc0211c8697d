//! The board: piece placement, side to move, castling, en passant and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete position: a total mapping from square to optional piece plus
/// the state needed to continue play from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// A board with no pieces, White to move.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                if let Some(sq) = Square::from_coords(file, color.back_rank()) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::from_coords(file, color.pawn_rank()) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Place or clear a square. No other state is touched.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Every occupied square with its piece, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding pieces of `color`, a1 to h8.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, piece)| piece == king).map(|(sq, _)| sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Check that the position is playable: one king per side, no pawns on
    /// the first or eighth rank, and the side that just moved not in check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, piece)| piece.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        if crate::attacks::in_check(self, self.side_to_move.flip()) {
            return Err(BoardError::OpponentInCheck);
        }

        Ok(())
    }

    /// Pretty-printable 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper that prints a board as a grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            let row: Vec<String> = (0u8..8)
                .filter_map(|file| Square::from_coords(file, rank))
                .map(|sq| self.0.piece_at(sq).map_or('.', Piece::fen_char).to_string())
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        write!(f, "   a b c d e f g h")
    }
}
