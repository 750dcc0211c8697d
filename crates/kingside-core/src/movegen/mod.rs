//! Move generation: pseudo-legal candidates per piece, then a legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::in_check;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Ordered list of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList { moves: Vec::with_capacity(64) }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Every geometrically reachable move for the side to move, ignoring
/// whether it exposes the mover's own king.
///
/// Pieces are visited a1 to h8, so the order is fixed for a given board.
pub fn generate_pseudo_legal(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();
    for (sq, piece) in board.pieces_of(us) {
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, sq, piece, &mut list),
            PieceKind::Knight => gen_knight(board, sq, piece, &mut list),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                gen_slider(board, sq, piece, &mut list)
            }
            PieceKind::King => gen_king(board, sq, piece, &mut list),
        }
    }
    list
}

/// All legal moves for the side to move.
///
/// Each candidate is played on a scratch copy of the board and dropped if
/// the mover's king is attacked afterwards.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let us = board.side_to_move();
    let mut list = generate_pseudo_legal(board);
    list.retain(|&mv| !in_check(&board.make_move(mv), us));
    list
}
