//! Leaf-node counting over the legal move tree.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Number of leaf positions `depth` plies below `board`.
///
/// Walks the tree in place with [`Board::apply`] / [`Board::revert`], so the
/// count also checks that every move is reverted exactly.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut scratch = *board;
    walk(&mut scratch, depth)
}

fn walk(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let inverse = board.apply(mv);
        nodes += walk(board, depth - 1);
        board.revert(mv, &inverse);
    }
    nodes
}

/// Per-root-move leaf counts as `(uci, nodes)`, sorted by move text.
pub fn divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let mut split: Vec<(String, u64)> = generate_legal_moves(board)
        .into_iter()
        .map(|mv| (mv.to_uci(), perft(&board.make_move(mv), depth.saturating_sub(1))))
        .collect();
    split.sort();
    split
}
