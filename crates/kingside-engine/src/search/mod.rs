//! Fixed-depth tree search.

pub mod alphabeta;
pub mod control;
pub mod minimax;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use kingside_core::{GameState, Move};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::{Evaluator, MaterialPst};
use alphabeta::alpha_beta;
use control::SearchControl;
use minimax::minimax;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for checkmate (adjusted by ply for mate distance).
pub const MATE_SCORE: i32 = 29_000;

/// Scores beyond this magnitude indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 28_000;

/// How a side picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exhaustive negamax.
    Minimax,
    /// Negamax with alpha-beta pruning.
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => f.write_str("minimax"),
            Strategy::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy \"{0}\" (expected minimax or alphabeta)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Strategy, UnknownStrategy> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Strategy::AlphaBeta),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective.
    pub score: i32,
    /// Nodes visited.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Per-search state threaded through the recursive strategies.
pub(crate) struct SearchContext<'a> {
    evaluator: &'a dyn Evaluator,
    control: &'a SearchControl,
    nodes: u64,
}

impl SearchContext<'_> {
    /// Count a node and bail out if the search was cancelled.
    #[inline]
    fn enter_node(&mut self) -> Result<(), SearchError> {
        self.nodes += 1;
        if self.control.is_stopped() {
            return Err(SearchError::Cancelled);
        }
        Ok(())
    }

    /// Static score, clamped strictly inside the mate band.
    #[inline]
    fn evaluate(&self, state: &GameState) -> i32 {
        self.evaluator
            .evaluate(state.board())
            .clamp(-MATE_THRESHOLD + 1, MATE_THRESHOLD - 1)
    }

    /// Score for a side with no legal moves: mated (nearer mates are worse)
    /// or stalemated.
    #[inline]
    fn terminal_score(&self, state: &GameState, ply: u8) -> i32 {
        if state.in_check() { -(MATE_SCORE - i32::from(ply)) } else { 0 }
    }
}

/// Runs minimax or alpha-beta over a private copy of a [`GameState`].
pub struct Searcher {
    evaluator: Arc<dyn Evaluator>,
    control: SearchControl,
}

impl Searcher {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            control: SearchControl::new(),
        }
    }

    /// Use `control` to cancel this searcher from elsewhere.
    pub fn with_control(mut self, control: SearchControl) -> Self {
        self.control = control;
        self
    }

    pub fn control(&self) -> &SearchControl {
        &self.control
    }

    /// Search `state` to `depth` plies with `strategy`, using the full window.
    pub fn search(&self, state: &GameState, depth: u8, strategy: Strategy) -> Result<SearchResult, SearchError> {
        self.root(state, depth, -INF, INF, strategy)
    }

    /// Exhaustive negamax search.
    pub fn minimax(&self, state: &GameState, depth: u8) -> Result<SearchResult, SearchError> {
        self.root(state, depth, -INF, INF, Strategy::Minimax)
    }

    /// Alpha-beta search with an explicit root window.
    ///
    /// With `(-INF, INF)` the score and move equal [`minimax`](Self::minimax).
    /// A narrower window may return a bound instead of the exact score.
    pub fn alpha_beta(&self, state: &GameState, depth: u8, alpha: i32, beta: i32) -> Result<SearchResult, SearchError> {
        self.root(state, depth, alpha, beta, Strategy::AlphaBeta)
    }

    fn root(
        &self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        strategy: Strategy,
    ) -> Result<SearchResult, SearchError> {
        let mut ctx = SearchContext {
            evaluator: self.evaluator.as_ref(),
            control: &self.control,
            nodes: 0,
        };
        let mut scratch = state.clone();
        ctx.enter_node()?;

        let moves = scratch.valid_moves();
        let (best_move, score) = if moves.is_empty() {
            (None, ctx.terminal_score(&scratch, 0))
        } else if depth == 0 {
            (moves.iter().next().copied(), ctx.evaluate(&scratch))
        } else {
            let mut best_move = None;
            let mut best = -INF;
            for mv in moves {
                scratch.apply_move(mv);
                let score = match strategy {
                    Strategy::Minimax => -minimax(&mut ctx, &mut scratch, depth - 1, 1)?,
                    Strategy::AlphaBeta => -alpha_beta(&mut ctx, &mut scratch, depth - 1, 1, -beta, -alpha)?,
                };
                scratch.undo_move()?;

                // Strictly greater: ties keep the earlier move.
                if best_move.is_none() || score > best {
                    best = score;
                    best_move = Some(mv);
                    alpha = alpha.max(score);
                }
                if strategy == Strategy::AlphaBeta && alpha >= beta {
                    break;
                }
            }
            (best_move, best)
        };

        debug!(
            %strategy,
            depth,
            nodes = ctx.nodes,
            score,
            best = ?best_move.map(|mv| mv.to_uci()),
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            depth,
        })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(Arc::new(MaterialPst))
    }
}

impl fmt::Debug for Searcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Searcher")
            .field("stopped", &self.control.is_stopped())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kingside_core::{Board, GameState, Square};

    use super::{INF, MATE_SCORE, MATE_THRESHOLD, Searcher, Strategy};
    use crate::error::SearchError;

    const SCHOLARS_MATE_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

    #[test]
    fn strategy_names() {
        assert_eq!("minimax".parse(), Ok(Strategy::Minimax));
        assert_eq!("AlphaBeta".parse(), Ok(Strategy::AlphaBeta));
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!(Strategy::AlphaBeta.to_string(), "alphabeta");
    }

    #[test]
    fn finds_mate_in_one() {
        let state = GameState::from_fen(SCHOLARS_MATE_FEN).unwrap();
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let result = Searcher::default().search(&state, 2, strategy).unwrap();
            let best = result.best_move.unwrap();
            assert_eq!((best.from(), best.to()), (Square::H5, Square::F7), "{strategy}");
            assert_eq!(result.score, MATE_SCORE - 1);
            assert!(result.score > MATE_THRESHOLD);
        }
    }

    #[test]
    fn mated_root_has_no_move() {
        let state = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let result = Searcher::default().search(&state, 3, Strategy::AlphaBeta).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);
    }

    #[test]
    fn stalemated_root_scores_zero() {
        let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
        let result = Searcher::default().minimax(&state, 2).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn depth_zero_returns_first_legal_move() {
        let state = GameState::new();
        let first = state.valid_moves().iter().next().copied();
        let result = Searcher::default().minimax(&state, 0).unwrap();
        assert_eq!(result.best_move, first);
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn prefers_the_faster_mate() {
        // Qa8# now, or dawdle and mate later.
        let state = GameState::from_fen("6k1/5ppp/8/8/8/8/5PPP/Q5K1 w - - 0 1").unwrap();
        let result = Searcher::default().search(&state, 3, Strategy::AlphaBeta).unwrap();
        let best = result.best_move.unwrap();
        assert_eq!((best.from(), best.to()), (Square::A1, Square::A8));
        assert_eq!(result.score, MATE_SCORE - 1);
    }

    #[test]
    fn narrow_window_returns_a_bound() {
        let state = GameState::new();
        let searcher = Searcher::default();
        let exact = searcher.alpha_beta(&state, 2, -INF, INF).unwrap();
        let high = searcher.alpha_beta(&state, 2, exact.score + 50, exact.score + 100).unwrap();
        assert!(high.score <= exact.score + 50);
    }

    #[test]
    fn search_leaves_the_input_untouched() {
        let state = GameState::from_fen(SCHOLARS_MATE_FEN).unwrap();
        let before = state.clone();
        Searcher::default().search(&state, 2, Strategy::Minimax).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn stopped_control_cancels() {
        let searcher = Searcher::default();
        searcher.control().stop();
        let result = searcher.search(&GameState::new(), 3, Strategy::Minimax);
        assert!(matches!(result, Err(SearchError::Cancelled)));
    }

    #[test]
    fn out_of_range_evaluator_still_picks_a_move() {
        // Hates whichever side is to move, far beyond any mate score.
        let evaluator = |board: &Board| match board.side_to_move() {
            kingside_core::Color::White => i32::MIN,
            kingside_core::Color::Black => 50_000,
        };
        let searcher = Searcher::new(Arc::new(evaluator));
        let state = GameState::new();
        let first = state.valid_moves().iter().next().copied();
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let result = searcher.search(&state, 1, strategy).unwrap();
            assert_eq!(result.best_move, first, "{strategy}");
            assert_eq!(result.score, -(MATE_THRESHOLD - 1));
        }
        let deeper = searcher.search(&state, 2, Strategy::AlphaBeta).unwrap();
        assert!(deeper.best_move.is_some());
    }

    #[test]
    fn custom_evaluator_is_used() {
        // An evaluator that loves having a white pawn on a3.
        let evaluator = |board: &Board| {
            let bonus = i32::from(board.piece_at(Square::A3).is_some()) * 1_000;
            match board.side_to_move() {
                kingside_core::Color::White => bonus,
                kingside_core::Color::Black => -bonus,
            }
        };
        let searcher = Searcher::new(Arc::new(evaluator));
        let result = searcher.search(&GameState::new(), 1, Strategy::Minimax).unwrap();
        let best = result.best_move.unwrap();
        assert_eq!((best.from(), best.to()), (Square::A2, Square::A3));
        assert_eq!(result.score, 1_000);
    }
}
