//! Negamax with an (alpha, beta) window.

use kingside_core::GameState;

use super::{INF, SearchContext, SearchError};

/// Fail-soft alpha-beta. Inside the window the result equals
/// [`minimax`](super::minimax::minimax); outside it is a bound on the
/// true score.
pub(super) fn alpha_beta(
    ctx: &mut SearchContext<'_>,
    state: &mut GameState,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
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
        let score = -alpha_beta(ctx, state, depth - 1, ply + 1, -beta, -alpha)?;
        state.undo_move()?;

        if score > best {
            best = score;
            alpha = alpha.max(score);
        }
        if alpha >= beta {
            break;
        }
    }
    Ok(best)
}
