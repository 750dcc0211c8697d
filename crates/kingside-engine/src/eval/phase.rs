//! Game phase from the remaining non-pawn material.

use kingside_core::{Board, PieceKind};

/// Phase of the starting position: 4 minors x 1 + 4 minors x 1 + 4 rooks x 2
/// + 2 queens x 4.
pub const MAX_PHASE: i32 = 24;

const fn phase_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Knight | PieceKind::Bishop => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 4,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

/// Value in `0..=MAX_PHASE`; promoted pieces cannot push it past the maximum.
pub fn game_phase(board: &Board) -> i32 {
    let phase: i32 = board.pieces().map(|(_, piece)| phase_weight(piece.kind())).sum();
    phase.min(MAX_PHASE)
}
