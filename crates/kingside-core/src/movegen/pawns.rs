//! Pawn pushes, captures, en passant and promotions.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Push one pawn move, expanding it into every promotion when it lands on
/// the last rank.
fn push_pawn_move(list: &mut MoveList, from: Square, to: Square, pawn: Piece, captured: Option<Piece>) {
    if to.rank() == pawn.color().promotion_rank() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new(from, to, pawn, captured, MoveKind::Promotion(promo)));
        }
    } else {
        list.push(Move::new(from, to, pawn, captured, MoveKind::Normal));
    }
}

pub(super) fn gen_pawn(board: &Board, from: Square, pawn: Piece, list: &mut MoveList) {
    let us = pawn.color();
    let forward = us.forward();

    if let Some(one) = from.offset(0, forward)
        && !board.is_occupied(one)
    {
        push_pawn_move(list, from, one, pawn, None);

        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && !board.is_occupied(two)
        {
            list.push(Move::new(from, two, pawn, None, MoveKind::DoublePush));
        }
    }

    for df in [-1, 1] {
        let Some(target) = from.offset(df, forward) else {
            continue;
        };
        match board.piece_at(target) {
            Some(victim) if victim.color() != us => {
                push_pawn_move(list, from, target, pawn, Some(victim));
            }
            Some(_) => {}
            None if board.en_passant() == Some(target) => {
                // The passed pawn sits beside us, on the target's file.
                let passed = Square::from_coords(target.file(), from.rank()).and_then(|sq| board.piece_at(sq));
                if let Some(victim) = passed
                    && victim == Piece::new(PieceKind::Pawn, us.flip())
                {
                    list.push(Move::new(from, target, pawn, Some(victim), MoveKind::EnPassant));
                }
            }
            None => {}
        }
    }
}
