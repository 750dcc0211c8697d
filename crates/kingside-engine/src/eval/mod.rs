//! Static evaluation.

pub mod material;
pub mod phase;
pub mod pst;
pub mod score;

use kingside_core::{Board, Color};

use material::material;
use phase::game_phase;
use pst::pst;

/// Scores a position for the search.
///
/// Implementations must be deterministic and return centipawns from the
/// point of view of the side to move: positive means that side is better.
/// The search calls the evaluator from a worker thread.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> i32 + Send + Sync,
{
    fn evaluate(&self, board: &Board) -> i32 {
        self(board)
    }
}

/// Tapered material plus piece-square tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPst;

impl Evaluator for MaterialPst {
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board)
    }
}

/// Evaluate `board` with [`MaterialPst`], relative to the side to move.
pub fn evaluate(board: &Board) -> i32 {
    let white = (material(board) + pst(board)).taper(game_phase(board));
    match board.side_to_move() {
        Color::White => white,
        Color::Black => -white,
    }
}
