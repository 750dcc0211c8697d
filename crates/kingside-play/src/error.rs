//! Errors for session configuration, the turn controller and the console.

use kingside_core::GameError;
use kingside_engine::{SearchError, UnknownStrategy};

/// Problems with session settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Depth outside `1..=MAX_DEPTH`.
    #[error("depth {depth} out of range 1..={max}")]
    DepthOutOfRange { depth: u8, max: u8 },

    #[error("invalid player \"{value}\" (expected human, minimax or alphabeta)")]
    InvalidPlayer {
        value: String,
        #[source]
        source: UnknownStrategy,
    },

    #[error("invalid FEN \"{fen}\"")]
    InvalidFen {
        fen: String,
        #[source]
        source: GameError,
    },

    /// A human color was given for a mode other than `pvc`.
    #[error("a human color only applies to pvc, not {mode}")]
    ColorOutsidePvc { mode: String },
}

/// Rejected commands and failed computer turns.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The move is not among the legal moves of the current position.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    #[error("invalid move text: \"{text}\"")]
    InvalidMoveText { text: String },

    #[error("no moves to undo")]
    EmptyHistory,

    /// Undo needs the game to be awaiting a move and a human at the board.
    #[error("undo is not available in this session")]
    UndoUnavailable,

    #[error("it is the computer's turn")]
    NotHumanTurn,

    #[error("the game is over")]
    GameFinished,

    /// A previous strategy fault ended the session; only reset leaves it.
    #[error("the session was aborted by a search failure")]
    Aborted,

    #[error("search failed: {0}")]
    StrategyFault(#[source] SearchError),
}

/// Errors from the text console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("unknown command \"{command}\" (type help)")]
    UnknownCommand { command: String },

    #[error("{command} needs an argument")]
    MissingArgument { command: String },

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
