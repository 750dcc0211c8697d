//! Knight move generation.

use crate::attacks::KNIGHT_STEPS;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Push a step move from `from` to every reachable target of `steps` that is
/// empty or holds an enemy piece. Shared with the king.
pub(super) fn gen_steps(board: &Board, from: Square, piece: Piece, steps: &[(i8, i8)], list: &mut MoveList) {
    for &(df, dr) in steps {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(to) {
            None => list.push(Move::new(from, to, piece, None, MoveKind::Normal)),
            Some(other) if other.color() != piece.color() => {
                list.push(Move::new(from, to, piece, Some(other), MoveKind::Normal));
            }
            Some(_) => {}
        }
    }
}

pub(super) fn gen_knight(board: &Board, from: Square, knight: Piece, list: &mut MoveList) {
    gen_steps(board, from, knight, &KNIGHT_STEPS, list);
}
