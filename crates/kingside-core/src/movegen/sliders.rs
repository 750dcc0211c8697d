//! Bishop, rook and queen move generation.

use crate::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, ray};
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        ROOK_DIRECTIONS[0],
        ROOK_DIRECTIONS[1],
        ROOK_DIRECTIONS[2],
        ROOK_DIRECTIONS[3],
        BISHOP_DIRECTIONS[0],
        BISHOP_DIRECTIONS[1],
        BISHOP_DIRECTIONS[2],
        BISHOP_DIRECTIONS[3],
    ];
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        _ => &QUEEN,
    }
}

pub(super) fn gen_slider(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    debug_assert!(piece.kind().is_slider());
    for &dir in directions(piece.kind()) {
        for to in ray(board, from, dir) {
            match board.piece_at(to) {
                None => list.push(Move::new(from, to, piece, None, MoveKind::Normal)),
                Some(other) if other.color() != piece.color() => {
                    list.push(Move::new(from, to, piece, Some(other), MoveKind::Normal));
                }
                Some(_) => {}
            }
        }
    }
}
