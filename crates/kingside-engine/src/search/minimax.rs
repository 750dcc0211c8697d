//! Plain negamax: every child of every node is searched.

use kingside_core::GameState;

use super::{INF, SearchContext, SearchError};

/// Score of `state` for the side to move, searched `depth` plies deep.
pub(super) fn minimax(
    ctx: &mut SearchContext<'_>,
    state: &mut GameState,
    depth: u8,
    ply: u8,
) -> Result<i32, SearchError> {
    ctx.enter_node()?;

    if depth == 0 {
        return Ok(ctx.evaluate(state));
    }

    let moves = state.valid_moves();
    if moves.is_empty() {
        return Ok(ctx.terminal_score(state, ply));
    }

    let mut best = -INF;
    for mv in moves {
        state.apply_move(mv);
        let score = -minimax(ctx, state, depth - 1, ply + 1)?;
        state.undo_move()?;
        best = best.max(score);
    }
    Ok(best)
}
