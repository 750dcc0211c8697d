//! Standard algebraic notation.

use crate::attacks::in_check;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::movegen::generate_legal_moves;
use crate::piece_kind::PieceKind;

/// Algebraic text for `mv`, played from `board`.
///
/// Pieces get their letter and, when another piece of the same kind could
/// reach the same square, the origin file, rank or both. Captures are
/// marked `x`, promotions `=Q`, and the result of the move `+` or `#`.
pub fn san(board: &Board, mv: Move) -> String {
    let mut text = String::new();

    match mv.kind() {
        MoveKind::Castle(side) => text.push_str(side.notation()),
        _ => {
            let kind = mv.piece().kind();
            match kind.notation_char() {
                Some(letter) => {
                    text.push(letter);
                    push_disambiguation(&mut text, board, mv);
                }
                None if mv.is_capture() => text.push(mv.from().file_char()),
                None => {}
            }
            if mv.is_capture() {
                text.push('x');
            }
            text.push_str(&mv.to().to_string());
            if let Some(promo) = mv.promotion() {
                text.push('=');
                text.push(promo.to_piece_kind().fen_char().to_ascii_uppercase());
            }
        }
    }

    let after = board.make_move(mv);
    let defender = after.side_to_move();
    if in_check(&after, defender) {
        text.push(if generate_legal_moves(&after).is_empty() { '#' } else { '+' });
    }
    text
}

fn push_disambiguation(text: &mut String, board: &Board, mv: Move) {
    debug_assert_ne!(mv.piece().kind(), PieceKind::Pawn);
    let rivals: Vec<Move> = generate_legal_moves(board)
        .into_iter()
        .filter(|other| other.piece() == mv.piece() && other.to() == mv.to() && other.from() != mv.from())
        .collect();
    if rivals.is_empty() {
        return;
    }

    let from = mv.from();
    if rivals.iter().all(|r| r.from().file() != from.file()) {
        text.push(from.file_char());
    } else if rivals.iter().all(|r| r.from().rank() != from.rank()) {
        text.push(from.rank_char());
    } else {
        text.push(from.file_char());
        text.push(from.rank_char());
    }
}
