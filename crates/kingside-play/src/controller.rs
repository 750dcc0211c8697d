//! The turn controller: the only owner and mutator of the live game.

use kingside_core::{GameState, Move, Outcome, parse_coordinates};
use kingside_engine::{Orchestrator, SearchError};
use tracing::{debug, error, info, warn};

use crate::config::{Player, SessionConfig};
use crate::error::ControllerError;

/// Where the controller is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The side to move has not produced its move yet.
    AwaitingMove,
    /// A move is being committed. Only observable from inside the controller.
    Applying,
    /// No legal moves remain.
    GameOver(Outcome),
    /// A search failed; only [`TurnController::reset`] leaves this phase.
    Aborted,
}

/// Alternates turns between the two players of a session.
///
/// Human moves arrive through [`submit_move`](Self::submit_move) or
/// [`submit_uci`](Self::submit_uci). Computer moves are produced by
/// [`tick`](Self::tick), which runs one search on the orchestrator and
/// blocks until it reports.
#[derive(Debug)]
pub struct TurnController {
    config: SessionConfig,
    state: GameState,
    phase: Phase,
    orchestrator: Orchestrator,
}

impl TurnController {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_orchestrator(config, Orchestrator::default())
    }

    /// Use `orchestrator` for computer turns, e.g. with a custom evaluator.
    pub fn with_orchestrator(config: SessionConfig, orchestrator: Orchestrator) -> Self {
        let state = config.start().clone();
        let phase = phase_for(&state);
        info!(
            white = %config.player(kingside_core::Color::White),
            black = %config.player(kingside_core::Color::Black),
            depth = config.depth(),
            "session started"
        );
        Self {
            config,
            state,
            phase,
            orchestrator,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the live game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Result of the session once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Player for the side to move.
    pub fn current_player(&self) -> Player {
        self.config.player(self.state.turn())
    }

    /// `true` if a computer is due to move and [`tick`](Self::tick) would search.
    pub fn computer_to_move(&self) -> bool {
        self.phase == Phase::AwaitingMove && !self.current_player().is_human()
    }

    /// Play a human move. It must be one of the current legal moves.
    pub fn submit_move(&mut self, mv: Move) -> Result<(), ControllerError> {
        self.ensure_human_turn()?;
        if !self.state.valid_moves().contains(&mv) {
            debug!(mv = %mv, "rejected illegal move");
            return Err(ControllerError::IllegalMove { mv: mv.to_uci() });
        }
        self.commit(mv);
        Ok(())
    }

    /// Play a human move given as coordinate text (`e2e4`, `e7e8q`).
    pub fn submit_uci(&mut self, text: &str) -> Result<Move, ControllerError> {
        self.ensure_human_turn()?;
        let (from, to, promotion) =
            parse_coordinates(text).map_err(|_| ControllerError::InvalidMoveText { text: text.to_string() })?;
        let mv = self
            .state
            .find_move(from, to, promotion)
            .ok_or_else(|| ControllerError::IllegalMove { mv: text.trim().to_string() })?;
        self.commit(mv);
        Ok(mv)
    }

    /// Advance the game by one computer move.
    ///
    /// Returns the move played, or `None` when there was nothing to do: a
    /// human is to move, the game is over, or the search found no move and
    /// the game ended. A failed search aborts the session.
    pub fn tick(&mut self) -> Result<Option<Move>, ControllerError> {
        match self.phase {
            Phase::AwaitingMove => {}
            Phase::Aborted => return Err(ControllerError::Aborted),
            Phase::GameOver(_) | Phase::Applying => return Ok(None),
        }
        let Player::Computer(strategy) = self.current_player() else {
            return Ok(None);
        };

        let depth = self.config.depth();
        let result = self
            .orchestrator
            .run(self.state.clone(), depth, strategy)
            .and_then(|result| match result.best_move {
                Some(mv) if !self.state.valid_moves().contains(&mv) => Err(SearchError::StrategyFault {
                    message: format!("search returned illegal move {mv}"),
                }),
                _ => Ok(result),
            });

        let result = match result {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, side = %self.state.turn(), "computer turn failed, aborting session");
                self.phase = Phase::Aborted;
                return Err(ControllerError::StrategyFault(err));
            }
        };

        match result.best_move {
            Some(mv) => {
                debug!(mv = %mv, score = result.score, nodes = result.nodes, %strategy, "computer move");
                self.commit(mv);
                Ok(Some(mv))
            }
            None => {
                let outcome = self.state.outcome().unwrap_or(Outcome::Draw);
                info!(%outcome, "computer has no legal move");
                self.phase = Phase::GameOver(outcome);
                Ok(None)
            }
        }
    }

    /// Take back the last ply.
    pub fn undo(&mut self) -> Result<Move, ControllerError> {
        match self.phase {
            Phase::AwaitingMove => {}
            Phase::GameOver(_) | Phase::Applying => return Err(ControllerError::UndoUnavailable),
            Phase::Aborted => return Err(ControllerError::Aborted),
        }
        if !self.config.has_human() {
            return Err(ControllerError::UndoUnavailable);
        }
        let mv = self.state.undo_move().map_err(|_| ControllerError::EmptyHistory)?;
        info!(mv = %mv, ply = self.state.ply(), "undo");
        Ok(mv)
    }

    /// Take back plies until a human is to move again: one ply between two
    /// humans, the computer's reply and the human's move against a computer.
    ///
    /// Returns the moves taken back, most recent first. If no earlier human
    /// turn exists the game is left as it was and `EmptyHistory` is returned.
    pub fn undo_to_human_turn(&mut self) -> Result<Vec<Move>, ControllerError> {
        let mut undone = vec![self.undo()?];
        while !self.current_player().is_human() {
            match self.state.undo_move() {
                Ok(mv) => undone.push(mv),
                Err(_) => {
                    for &mv in undone.iter().rev() {
                        self.state.apply_move(mv);
                    }
                    debug!("no human turn to return to");
                    return Err(ControllerError::EmptyHistory);
                }
            }
        }
        info!(plies = undone.len(), ply = self.state.ply(), "back to a human turn");
        Ok(undone)
    }

    /// Discard the game and start over from the configured position.
    pub fn reset(&mut self) {
        self.state = self.config.start().clone();
        self.phase = phase_for(&self.state);
        info!("session reset");
    }

    fn ensure_human_turn(&self) -> Result<(), ControllerError> {
        match self.phase {
            Phase::AwaitingMove | Phase::Applying => {}
            Phase::GameOver(_) => return Err(ControllerError::GameFinished),
            Phase::Aborted => return Err(ControllerError::Aborted),
        }
        if !self.current_player().is_human() {
            warn!(side = %self.state.turn(), "move submitted on the computer's turn");
            return Err(ControllerError::NotHumanTurn);
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        self.phase = Phase::Applying;
        self.state.apply_move(mv);
        self.phase = phase_for(&self.state);
        info!(mv = %mv, ply = self.state.ply(), check = self.state.in_check(), "move applied");
        if let Phase::GameOver(outcome) = self.phase {
            info!(%outcome, "game over");
        }
    }
}

fn phase_for(state: &GameState) -> Phase {
    match state.outcome() {
        Some(outcome) => Phase::GameOver(outcome),
        None => Phase::AwaitingMove,
    }
}
