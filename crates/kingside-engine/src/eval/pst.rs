//! Piece-square tables.
//!
//! Tables are laid out as seen from White's side of the board: the first
//! row is rank 8, the last row rank 1. [`pst_value`] handles the mirroring
//! for both colors.

use kingside_core::{Board, Color, PieceKind, Square};

use crate::eval::score::{S, Score};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// King shelter while material remains.
#[rustfmt::skip]
const KING_MG: [i32; 64] = [
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,   0,   0,  10,  30,  20,
];

/// King centralization once the board empties.
#[rustfmt::skip]
const KING_EG: [i32; 64] = [
   -50, -40, -30, -20, -20, -30, -40, -50,
   -30, -20, -10,   0,   0, -10, -20, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -30,   0,   0,   0,   0, -30, -30,
   -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Table value of `kind` of `color` standing on `sq`.
pub fn pst_value(kind: PieceKind, color: Color, sq: Square) -> Score {
    // Row 0 of each table is rank 8, so White flips the rank and Black reads
    // its own square directly.
    let index = match color {
        Color::White => sq.index() ^ 56,
        Color::Black => sq.index(),
    };
    match kind {
        PieceKind::Pawn => S(PAWN[index], PAWN[index]),
        PieceKind::Knight => S(KNIGHT[index], KNIGHT[index]),
        PieceKind::Bishop => S(BISHOP[index], BISHOP[index]),
        PieceKind::Rook => S(ROOK[index], ROOK[index]),
        PieceKind::Queen => S(QUEEN[index], QUEEN[index]),
        PieceKind::King => S(KING_MG[index], KING_EG[index]),
    }
}

/// Sum of table values from White's point of view.
pub fn pst(board: &Board) -> Score {
    board.pieces().fold(Score::ZERO, |acc, (sq, piece)| {
        let value = pst_value(piece.kind(), piece.color(), sq);
        match piece.color() {
            Color::White => acc + value,
            Color::Black => acc - value,
        }
    })
}

#[cfg(test)]
mod tests {
    use kingside_core::{Board, Color, PieceKind, Square};

    use super::{pst, pst_value};
    use crate::eval::score::{S, Score};

    #[test]
    fn central_pawn_push_is_rewarded() {
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::E4), S(20, 20));
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::E2), S(-20, -20));
    }

    #[test]
    fn colors_mirror_by_rank() {
        for kind in PieceKind::ALL {
            assert_eq!(
                pst_value(kind, Color::White, Square::C2),
                pst_value(kind, Color::Black, Square::C7),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn king_tables_differ_by_phase() {
        let corner = pst_value(PieceKind::King, Color::White, Square::G1);
        assert_eq!(corner, S(30, -30));
        let center = pst_value(PieceKind::King, Color::Black, Square::D5);
        assert_eq!(center, S(-40, 40));
    }

    #[test]
    fn starting_position_is_symmetric() {
        assert_eq!(pst(&Board::starting_position()), Score::ZERO);
    }
}
