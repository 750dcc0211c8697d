//! Material balance.

use kingside_core::{Board, Color, PieceKind};

use crate::eval::score::{S, Score};

/// Piece values indexed by [`PieceKind::index`].
pub const MATERIAL_VALUE: [Score; PieceKind::COUNT] = [
    S(100, 115), // Pawn
    S(320, 300), // Knight
    S(330, 320), // Bishop
    S(500, 530), // Rook
    S(900, 940), // Queen
    S(0, 0),     // King
];

const BISHOP_PAIR_BONUS: Score = S(40, 55);

/// Material from White's point of view.
pub fn material(board: &Board) -> Score {
    let mut score = Score::ZERO;
    let mut bishops = [0u32; 2];

    for (_, piece) in board.pieces() {
        let value = MATERIAL_VALUE[piece.kind().index()];
        match piece.color() {
            Color::White => score += value,
            Color::Black => score -= value,
        }
        if piece.kind() == PieceKind::Bishop {
            bishops[piece.color().index()] += 1;
        }
    }

    if bishops[Color::White.index()] >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    if bishops[Color::Black.index()] >= 2 {
        score -= BISHOP_PAIR_BONUS;
    }
    score
}
