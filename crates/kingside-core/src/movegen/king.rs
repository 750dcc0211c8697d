//! King steps and castling.

use crate::attacks::{KING_STEPS, is_square_attacked};
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;
use super::knights::gen_steps;

pub(super) fn gen_king(board: &Board, from: Square, king: Piece, list: &mut MoveList) {
    gen_steps(board, from, king, &KING_STEPS, list);

    let us = king.color();
    let them = us.flip();
    let home = Square::from_coords(4, us.back_rank());
    if Some(from) != home || is_square_attacked(board, from, them) {
        return;
    }

    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        let (rook_from, _) = side.rook_squares(us);
        if board.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }

        // Every square strictly between king and rook must be empty.
        let (lo, hi) = if rook_from.file() < from.file() {
            (rook_from.file() + 1, from.file())
        } else {
            (from.file() + 1, rook_from.file())
        };
        let path_clear = (lo..hi)
            .filter_map(|file| Square::from_coords(file, us.back_rank()))
            .all(|sq| !board.is_occupied(sq));
        if !path_clear {
            continue;
        }

        // The king may not cross or land on an attacked square.
        let target = side.king_target(us);
        let step: i8 = if target.file() > from.file() { 1 } else { -1 };
        let crossed_safe = [from.offset(step, 0), Some(target)]
            .into_iter()
            .flatten()
            .all(|sq| !is_square_attacked(board, sq, them));
        if crossed_safe {
            list.push(Move::new(from, target, king, None, MoveKind::Castle(side)));
        }
    }
}
