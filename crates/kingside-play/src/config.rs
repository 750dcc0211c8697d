//! Session settings: who plays each color and how deep computers search.

use std::str::FromStr;

use kingside_core::{Color, GameState};
use kingside_engine::Strategy;

use crate::error::ConfigError;

/// Search depth used when none is given.
pub const DEFAULT_DEPTH: u8 = 3;

/// Deepest search a session may configure.
pub const MAX_DEPTH: u8 = 8;

/// Who moves for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer(Strategy),
}

impl Player {
    pub const fn is_human(self) -> bool {
        matches!(self, Player::Human)
    }
}

impl FromStr for Player {
    type Err = ConfigError;

    /// `human`, or a strategy name such as `minimax` or `alphabeta`.
    fn from_str(value: &str) -> Result<Player, ConfigError> {
        if value.eq_ignore_ascii_case("human") {
            return Ok(Player::Human);
        }
        value
            .parse()
            .map(Player::Computer)
            .map_err(|source| ConfigError::InvalidPlayer {
                value: value.to_string(),
                source,
            })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => f.write_str("human"),
            Player::Computer(strategy) => write!(f, "computer ({strategy})"),
        }
    }
}

/// Immutable settings for one session.
///
/// Built once from a preset or the command line, validated, then handed to
/// the [`TurnController`](crate::TurnController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    depth: u8,
    white: Player,
    black: Player,
    start: GameState,
    max_plies: Option<usize>,
}

impl SessionConfig {
    /// Two humans at one board.
    pub fn human_vs_human() -> Self {
        Self::with_players(Player::Human, Player::Human)
    }

    /// A human playing `human` against an alpha-beta computer.
    pub fn human_vs_computer(human: Color) -> Self {
        match human {
            Color::White => Self::with_players(Player::Human, Player::Computer(Strategy::AlphaBeta)),
            Color::Black => Self::with_players(Player::Computer(Strategy::AlphaBeta), Player::Human),
        }
    }

    /// Minimax with White against alpha-beta with Black.
    pub fn computer_vs_computer() -> Self {
        Self::with_players(
            Player::Computer(Strategy::Minimax),
            Player::Computer(Strategy::AlphaBeta),
        )
    }

    fn with_players(white: Player, black: Player) -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            white,
            black,
            start: GameState::new(),
            max_plies: None,
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Result<Self, ConfigError> {
        self.depth = depth;
        self.validate()?;
        Ok(self)
    }

    pub fn with_player(mut self, color: Color, player: Player) -> Self {
        match color {
            Color::White => self.white = player,
            Color::Black => self.black = player,
        }
        self
    }

    /// Start from `fen` instead of the standard position.
    pub fn with_fen(mut self, fen: &str) -> Result<Self, ConfigError> {
        self.start = GameState::from_fen(fen).map_err(|source| ConfigError::InvalidFen {
            fen: fen.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// Stop the console after this many plies. Only computer-vs-computer
    /// runs need it; the controller itself ignores it.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn player(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// `true` if at least one color is played by a human.
    pub fn has_human(&self) -> bool {
        self.white.is_human() || self.black.is_human()
    }

    /// Fresh game at the configured starting position.
    pub fn start(&self) -> &GameState {
        &self.start
    }

    pub fn max_plies(&self) -> Option<usize> {
        self.max_plies
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::human_vs_computer(Color::White)
    }
}
